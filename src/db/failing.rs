// src/db/failing.rs
// DOCUMENTATION: Document store that rejects every operation
// PURPOSE: Exercise the error paths of services and handlers in tests

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};

use crate::db::store::{DocumentStore, SortOrder, StoreError, StoreResult};

#[derive(Debug, Clone)]
pub struct FailingStore {
    message: String,
}

impl FailingStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn error(&self) -> StoreError {
        StoreError::InvalidDocument(self.message.clone())
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    fn name(&self) -> &str {
        "broken"
    }

    async fn find_one(&self, _collection: &str, _filter: Document) -> StoreResult<Option<Document>> {
        Err(self.error())
    }

    async fn find(
        &self,
        _collection: &str,
        _filter: Document,
        _sort: Option<(&str, SortOrder)>,
    ) -> StoreResult<Vec<Document>> {
        Err(self.error())
    }

    async fn insert_one(&self, _collection: &str, _document: Document) -> StoreResult<ObjectId> {
        Err(self.error())
    }

    async fn replace_one(
        &self,
        _collection: &str,
        _filter: Document,
        _replacement: Document,
        _upsert: bool,
    ) -> StoreResult<()> {
        Err(self.error())
    }

    async fn insert_if_absent(&self, _collection: &str, _filter: Document, _document: Document) -> StoreResult<bool> {
        Err(self.error())
    }

    async fn update_one(&self, _collection: &str, _filter: Document, _fields: Document) -> StoreResult<u64> {
        Err(self.error())
    }

    async fn delete_one(&self, _collection: &str, _filter: Document) -> StoreResult<u64> {
        Err(self.error())
    }

    async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        Err(self.error())
    }
}
