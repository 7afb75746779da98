// src/db/place_repository.rs
// DOCUMENTATION: Database access layer for places
// PURPOSE: One store operation per call against the `place` collection

use crate::db::identifier::{normalize_id, INTERNAL_ID_FIELD};
use crate::db::store::{DocumentStore, SortOrder, StoreError};
use crate::errors::WeddingError;
use crate::models::{Place, PlaceResponse};
use mongodb::bson::{self, doc, oid::ObjectId, Document};

pub const PLACE_COLLECTION: &str = "place";

/// PlaceRepository: All database operations for places
pub struct PlaceRepository;

impl PlaceRepository {
    /// List places sorted by name, optionally restricted to one category
    /// DOCUMENTATION: Used by GET /api/places, no pagination
    pub async fn list(
        store: &dyn DocumentStore,
        category: Option<&str>,
    ) -> Result<Vec<PlaceResponse>, WeddingError> {
        let filter = match category {
            Some(category) => doc! { "category": category },
            None => doc! {},
        };

        let documents = store
            .find(PLACE_COLLECTION, filter, Some(("name", SortOrder::Ascending)))
            .await
            .map_err(|e| {
                log::error!("Failed to list places: {}", e);
                WeddingError::from(e)
            })?;

        log::debug!(
            "Listed {} places (category: {})",
            documents.len(),
            category.unwrap_or("all")
        );

        documents.into_iter().map(to_response).collect()
    }

    /// Insert a place and return the stored record
    /// DOCUMENTATION: Used by POST /api/places
    pub async fn create(store: &dyn DocumentStore, place: &Place) -> Result<PlaceResponse, WeddingError> {
        let document = bson::to_document(place).map_err(StoreError::from)?;

        let id = store
            .insert_one(PLACE_COLLECTION, document)
            .await
            .map_err(|e| {
                log::error!("Failed to create place: {}", e);
                WeddingError::from(e)
            })?;

        let place = Self::get_by_id(store, id).await?;
        log::info!("Created place with id: {}", place.id);
        Ok(place)
    }

    /// Retrieve place by ID
    pub async fn get_by_id(store: &dyn DocumentStore, id: ObjectId) -> Result<PlaceResponse, WeddingError> {
        let document = store
            .find_one(PLACE_COLLECTION, id_filter(id))
            .await
            .map_err(|e| {
                log::error!("Database error fetching place: {}", e);
                WeddingError::from(e)
            })?
            .ok_or_else(|| {
                log::warn!("Place not found: {}", id);
                WeddingError::NotFound("Place".to_string())
            })?;

        to_response(document)
    }

    /// Set the given fields on an existing place
    /// DOCUMENTATION: Partial update - only provided fields are modified
    pub async fn update(
        store: &dyn DocumentStore,
        id: ObjectId,
        fields: Document,
    ) -> Result<PlaceResponse, WeddingError> {
        let matched = store
            .update_one(PLACE_COLLECTION, id_filter(id), fields)
            .await
            .map_err(|e| {
                log::error!("Update failed for place {}: {}", id, e);
                WeddingError::from(e)
            })?;

        if matched == 0 {
            log::warn!("Place not found for update: {}", id);
            return Err(WeddingError::NotFound("Place".to_string()));
        }

        let place = Self::get_by_id(store, id).await?;
        log::info!("Updated place: {}", id);
        Ok(place)
    }

    /// Hard delete place
    pub async fn delete(store: &dyn DocumentStore, id: ObjectId) -> Result<(), WeddingError> {
        let deleted = store
            .delete_one(PLACE_COLLECTION, id_filter(id))
            .await
            .map_err(|e| {
                log::error!("Delete failed for place {}: {}", id, e);
                WeddingError::from(e)
            })?;

        if deleted == 0 {
            return Err(WeddingError::NotFound("Place".to_string()));
        }

        log::info!("Deleted place: {}", id);
        Ok(())
    }
}

fn id_filter(id: ObjectId) -> Document {
    doc! { INTERNAL_ID_FIELD: id }
}

fn to_response(document: Document) -> Result<PlaceResponse, WeddingError> {
    bson::from_document(normalize_id(document)).map_err(|e| {
        log::error!("Stored place has an unexpected shape: {}", e);
        WeddingError::from(StoreError::from(e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryStore;

    fn place(category: &str, name: &str) -> Place {
        Place {
            category: category.to_string(),
            name: name.to_string(),
            address: format!("Via {} 1", name),
            description: None,
            phone: None,
            website: None,
            maps_url: None,
            tags: Some(vec!["wedding".to_string()]),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let store = InMemoryStore::new("test");
        let input = place("hotel", "Hotel Roma");

        let created = PlaceRepository::create(&store, &input).await.unwrap();
        let id = ObjectId::parse_str(&created.id).unwrap();
        let fetched = PlaceRepository::get_by_id(&store, id).await.unwrap();

        assert_eq!(fetched.place, input);
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn test_list_filters_by_category_sorted_by_name() {
        let store = InMemoryStore::new("test");
        for (category, name) in [
            ("hotel", "Villa Maria"),
            ("restaurant", "Da Peppe"),
            ("hotel", "Albergo Centrale"),
        ] {
            PlaceRepository::create(&store, &place(category, name)).await.unwrap();
        }

        let hotels = PlaceRepository::list(&store, Some("hotel")).await.unwrap();
        let names: Vec<&str> = hotels.iter().map(|p| p.place.name.as_str()).collect();
        assert_eq!(names, vec!["Albergo Centrale", "Villa Maria"]);

        let all = PlaceRepository::list(&store, None).await.unwrap();
        assert_eq!(all.len(), 3);

        let none = PlaceRepository::list(&store, Some("barber")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_place_is_not_found() {
        let store = InMemoryStore::new("test");
        let result = PlaceRepository::update(&store, ObjectId::new(), doc! { "name": "X" }).await;
        assert!(matches!(result, Err(WeddingError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = InMemoryStore::new("test");
        let created = PlaceRepository::create(&store, &place("poi", "Duomo")).await.unwrap();
        let id = ObjectId::parse_str(&created.id).unwrap();

        assert!(PlaceRepository::delete(&store, id).await.is_ok());
        assert!(matches!(
            PlaceRepository::delete(&store, id).await,
            Err(WeddingError::NotFound(_))
        ));
    }
}
