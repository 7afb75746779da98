// src/db/mongo.rs
// DOCUMENTATION: MongoDB implementation of the document store
// PURPOSE: Map DocumentStore operations to single driver calls

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Client, Collection, Database};

use crate::config::env::DEFAULT_DATABASE_NAME;
use crate::db::store::{DocumentStore, SortOrder, StoreError, StoreResult};

#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Create a client for the connection string
    /// DOCUMENTATION: The driver connects lazily; call ping() to verify the server
    pub async fn connect(url: &str, database_name: Option<&str>) -> StoreResult<Self> {
        let client = Client::with_uri_str(url).await?;

        let database = match database_name {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE_NAME)),
        };

        Ok(Self { database })
    }

    pub async fn ping(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn name(&self) -> &str {
        self.database.name()
    }

    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>> {
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        sort: Option<(&str, SortOrder)>,
    ) -> StoreResult<Vec<Document>> {
        let collection = self.collection(collection);
        let find = collection.find(filter);
        let cursor = match sort {
            Some((field, order)) => find.sort(doc! { field: order.as_i32() }).await?,
            None => find.await?,
        };

        Ok(cursor.try_collect().await?)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId> {
        let result = self.collection(collection).insert_one(document).await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::InvalidDocument(format!(
                "inserted id is not an ObjectId: {}",
                result.inserted_id
            ))
        })
    }

    async fn replace_one(
        &self,
        collection: &str,
        filter: Document,
        replacement: Document,
        upsert: bool,
    ) -> StoreResult<()> {
        self.collection(collection)
            .replace_one(filter, replacement)
            .upsert(upsert)
            .await?;

        Ok(())
    }

    async fn insert_if_absent(&self, collection: &str, filter: Document, document: Document) -> StoreResult<bool> {
        let result = self
            .collection(collection)
            .update_one(filter, doc! { "$setOnInsert": document })
            .upsert(true)
            .await?;

        Ok(result.upserted_id.is_some())
    }

    async fn update_one(&self, collection: &str, filter: Document, fields: Document) -> StoreResult<u64> {
        let result = self
            .collection(collection)
            .update_one(filter, doc! { "$set": fields })
            .await?;

        Ok(result.matched_count)
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> StoreResult<u64> {
        let result = self.collection(collection).delete_one(filter).await?;
        Ok(result.deleted_count)
    }

    async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        Ok(self.database.list_collection_names().await?)
    }
}
