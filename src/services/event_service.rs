// src/services/event_service.rs
// DOCUMENTATION: Business logic for the wedding event
// PURPOSE: Lazy seeding of the singleton and full replacement on update

use crate::db::{DocumentStore, EventRepository};
use crate::errors::WeddingError;
use crate::models::{Event, EventResponse};

pub struct EventService;

impl EventService {
    /// Write the default event when the collection is empty
    /// DOCUMENTATION: Idempotent single write; returns true only when a seed was written
    pub async fn ensure_default_event(store: &dyn DocumentStore) -> Result<bool, WeddingError> {
        let seeded = EventRepository::insert_if_absent(store, &Event::default()).await?;
        if seeded {
            log::info!("Event collection was empty, seeded default event");
        }
        Ok(seeded)
    }

    /// Get the event
    /// DOCUMENTATION: Side effect - seeds the default event on first access
    pub async fn get_event(store: &dyn DocumentStore) -> Result<EventResponse, WeddingError> {
        Self::ensure_default_event(store).await?;
        Self::read_back(store).await
    }

    /// Replace the event with a full payload, creating it if absent
    pub async fn update_event(store: &dyn DocumentStore, event: Event) -> Result<EventResponse, WeddingError> {
        EventRepository::replace(store, &event).await?;
        Self::read_back(store).await
    }

    async fn read_back(store: &dyn DocumentStore) -> Result<EventResponse, WeddingError> {
        EventRepository::find(store).await?.ok_or_else(|| {
            log::error!("Event missing right after it was written");
            WeddingError::DatabaseError("event not found after write".to_string())
        })
    }
}
