// src/db/store.rs
// DOCUMENTATION: Document store abstraction
// PURPOSE: The narrow set of operations handlers need from the database

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

use crate::errors::WeddingError;

/// Errors raised by a document store implementation
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Backend(#[from] mongodb::error::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] mongodb::bson::de::Error),

    #[error("Unexpected document shape: {0}")]
    InvalidDocument(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    #[allow(dead_code)]
    Descending,
}

impl SortOrder {
    pub fn as_i32(self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

/// Document database addressed by collection name
/// DOCUMENTATION: Filters are equality matches on top-level fields;
/// an empty filter matches every document in natural order
#[async_trait]
pub trait DocumentStore: Send + Sync + Debug {
    /// Database or connection name
    fn name(&self) -> &str;

    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>>;

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        sort: Option<(&str, SortOrder)>,
    ) -> StoreResult<Vec<Document>>;

    /// Insert a document and return the identifier the store assigned to it
    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId>;

    /// Replace the first matching document; with `upsert`, insert when nothing matches
    async fn replace_one(
        &self,
        collection: &str,
        filter: Document,
        replacement: Document,
        upsert: bool,
    ) -> StoreResult<()>;

    /// Insert `document` only when nothing matches `filter`, as a single atomic write.
    /// Returns true when the document was inserted
    async fn insert_if_absent(&self, collection: &str, filter: Document, document: Document) -> StoreResult<bool>;

    /// Set the given fields on the first matching document, returning the matched count
    async fn update_one(&self, collection: &str, filter: Document, fields: Document) -> StoreResult<u64>;

    /// Delete the first matching document, returning the deleted count
    async fn delete_one(&self, collection: &str, filter: Document) -> StoreResult<u64>;

    async fn list_collection_names(&self) -> StoreResult<Vec<String>>;
}

/// Process-wide store handle
/// DOCUMENTATION: Built once in main.rs and shared with every handler via web::Data.
/// An unavailable store is an explicit state, not a missing value
#[derive(Debug, Clone)]
pub enum StoreState {
    Connected {
        store: Arc<dyn DocumentStore>,
        url_configured: bool,
    },
    Unavailable {
        reason: String,
        url_configured: bool,
    },
}

impl StoreState {
    pub fn connected(store: Arc<dyn DocumentStore>, url_configured: bool) -> Self {
        StoreState::Connected {
            store,
            url_configured,
        }
    }

    pub fn unavailable(reason: impl Into<String>, url_configured: bool) -> Self {
        StoreState::Unavailable {
            reason: reason.into(),
            url_configured,
        }
    }

    /// Store handle for data handlers; unavailable stores surface as 503
    pub fn store(&self) -> Result<&dyn DocumentStore, WeddingError> {
        match self {
            StoreState::Connected { store, .. } => Ok(store.as_ref()),
            StoreState::Unavailable { reason, .. } => {
                log::warn!("Document store requested but unavailable: {}", reason);
                Err(WeddingError::StoreUnavailable(reason.clone()))
            }
        }
    }

    pub fn url_configured(&self) -> bool {
        match self {
            StoreState::Connected { url_configured, .. } => *url_configured,
            StoreState::Unavailable { url_configured, .. } => *url_configured,
        }
    }
}
