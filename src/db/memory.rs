// src/db/memory.rs
// DOCUMENTATION: In-process document store
// PURPOSE: Backs tests and `memory://` development runs with MongoDB-like semantics

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::db::identifier::INTERNAL_ID_FIELD;
use crate::db::store::{DocumentStore, SortOrder, StoreError, StoreResult};

type Collections = HashMap<String, Vec<Document>>;

/// Thread-safe in-memory store
/// DOCUMENTATION: Collections keep insertion order, which is the natural
/// order used by find_one with an empty filter. Clones share the same data
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    name: String,
    collections: Arc<RwLock<Collections>>,
}

impl InMemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

fn with_id(mut document: Document, id: ObjectId) -> Document {
    document.insert(INTERNAL_ID_FIELD, id);
    document
}

/// Ordering for a single sort field; missing and null values come first
fn compare_field(a: Option<&Bson>, b: Option<&Bson>) -> Ordering {
    fn rank(value: Option<&Bson>) -> u8 {
        match value {
            None | Some(Bson::Null) => 0,
            Some(Bson::Int32(_)) | Some(Bson::Int64(_)) | Some(Bson::Double(_)) => 1,
            Some(Bson::String(_)) => 2,
            Some(_) => 3,
        }
    }

    fn number(value: &Bson) -> f64 {
        match value {
            Bson::Int32(n) => f64::from(*n),
            Bson::Int64(n) => *n as f64,
            Bson::Double(n) => *n,
            _ => 0.0,
        }
    }

    match (a, b) {
        (Some(Bson::String(x)), Some(Bson::String(y))) => x.cmp(y),
        (Some(x), Some(y)) if rank(a) == 1 && rank(b) == 1 => {
            number(x).partial_cmp(&number(y)).unwrap_or(Ordering::Equal)
        }
        _ => rank(a).cmp(&rank(b)),
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| matches(doc, &filter)))
            .cloned())
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        sort: Option<(&str, SortOrder)>,
    ) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;

        let mut found: Vec<Document> = collections
            .get(collection)
            .map(|docs| docs.iter().filter(|doc| matches(doc, &filter)).cloned().collect())
            .unwrap_or_default();

        if let Some((field, order)) = sort {
            // Stable sort keeps insertion order for ties
            found.sort_by(|a, b| {
                let ordering = compare_field(a.get(field), b.get(field));
                match order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });
        }

        Ok(found)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId> {
        let id = match document.get(INTERNAL_ID_FIELD) {
            Some(Bson::ObjectId(id)) => *id,
            Some(other) => {
                return Err(StoreError::InvalidDocument(format!(
                    "unsupported _id value: {}",
                    other
                )))
            }
            None => ObjectId::new(),
        };

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(with_id(document, id));

        Ok(id)
    }

    async fn replace_one(
        &self,
        collection: &str,
        filter: Document,
        replacement: Document,
        upsert: bool,
    ) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        if !upsert && !collections.contains_key(collection) {
            return Ok(());
        }
        let docs = collections.entry(collection.to_string()).or_default();

        match docs.iter().position(|doc| matches(doc, &filter)) {
            Some(index) => {
                let id = docs[index]
                    .get_object_id(INTERNAL_ID_FIELD)
                    .map_err(|e| StoreError::InvalidDocument(e.to_string()))?;
                docs[index] = with_id(replacement, id);
            }
            None if upsert => docs.push(with_id(replacement, ObjectId::new())),
            None => {}
        }

        Ok(())
    }

    async fn insert_if_absent(&self, collection: &str, filter: Document, document: Document) -> StoreResult<bool> {
        // Check and insert under one write lock
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        if docs.iter().any(|doc| matches(doc, &filter)) {
            return Ok(false);
        }

        docs.push(with_id(document, ObjectId::new()));
        Ok(true)
    }

    async fn update_one(&self, collection: &str, filter: Document, fields: Document) -> StoreResult<u64> {
        let mut collections = self.collections.write().await;

        let Some(existing) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| matches(doc, &filter)))
        else {
            return Ok(0);
        };

        for (key, value) in fields {
            existing.insert(key, value);
        }

        Ok(1)
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> StoreResult<u64> {
        let mut collections = self.collections.write().await;

        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };

        match docs.iter().position(|doc| matches(doc, &filter)) {
            Some(index) => {
                docs.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        let collections = self.collections.read().await;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
