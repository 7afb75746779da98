// src/db/event_repository.rs
// DOCUMENTATION: Event database operations
// PURPOSE: Read and replace the singleton document in the `event` collection

use crate::db::identifier::normalize_id;
use crate::db::store::{DocumentStore, StoreError};
use crate::errors::WeddingError;
use crate::models::{Event, EventResponse};
use mongodb::bson::{self, doc, Document};

pub const EVENT_COLLECTION: &str = "event";

pub struct EventRepository;

impl EventRepository {
    /// Fetch the singleton event, if one exists
    /// DOCUMENTATION: Always addresses the first document, never an id
    pub async fn find(store: &dyn DocumentStore) -> Result<Option<EventResponse>, WeddingError> {
        let document = store
            .find_one(EVENT_COLLECTION, doc! {})
            .await
            .map_err(|e| {
                log::error!("Failed to fetch event: {}", e);
                WeddingError::from(e)
            })?;

        document.map(to_response).transpose()
    }

    /// Insert the event only when the collection is empty
    /// DOCUMENTATION: One upsert with $setOnInsert; an existing record is never touched
    pub async fn insert_if_absent(store: &dyn DocumentStore, event: &Event) -> Result<bool, WeddingError> {
        let document = bson::to_document(event).map_err(StoreError::from)?;

        store
            .insert_if_absent(EVENT_COLLECTION, doc! {}, document)
            .await
            .map_err(|e| {
                log::error!("Failed to seed event: {}", e);
                WeddingError::from(e)
            })
    }

    /// Replace the singleton event, creating it when the collection is empty
    pub async fn replace(store: &dyn DocumentStore, event: &Event) -> Result<(), WeddingError> {
        let replacement = bson::to_document(event).map_err(StoreError::from)?;

        store
            .replace_one(EVENT_COLLECTION, doc! {}, replacement, true)
            .await
            .map_err(|e| {
                log::error!("Failed to replace event: {}", e);
                WeddingError::from(e)
            })?;

        log::info!("Stored event for {}", event.couple_names);
        Ok(())
    }
}

fn to_response(document: Document) -> Result<EventResponse, WeddingError> {
    bson::from_document(normalize_id(document)).map_err(|e| {
        log::error!("Stored event has an unexpected shape: {}", e);
        WeddingError::from(StoreError::from(e))
    })
}
