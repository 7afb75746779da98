// src/services/place_service.rs
// DOCUMENTATION: Business logic for places
// PURPOSE: Intermediary between handlers and repository, handles payload checks

use crate::db::{DocumentStore, PlaceRepository};
use crate::errors::WeddingError;
use crate::models::{Place, PlaceCategory, PlaceListQuery, PlaceResponse, UpdatePlaceRequest};
use mongodb::bson::oid::ObjectId;

pub struct PlaceService;

impl PlaceService {
    /// List places, sorted by name
    pub async fn list_places(
        store: &dyn DocumentStore,
        query: &PlaceListQuery,
    ) -> Result<Vec<PlaceResponse>, WeddingError> {
        PlaceRepository::list(store, query.category_filter()).await
    }

    /// Create a new place
    pub async fn create_place(store: &dyn DocumentStore, place: Place) -> Result<PlaceResponse, WeddingError> {
        if !PlaceCategory::is_known(&place.category) {
            log::debug!("Accepting place with undocumented category: {}", place.category);
        }

        PlaceRepository::create(store, &place).await
    }

    /// Partially update a place
    /// DOCUMENTATION: Rejects empty updates before touching the store
    pub async fn update_place(
        store: &dyn DocumentStore,
        id: ObjectId,
        req: UpdatePlaceRequest,
    ) -> Result<PlaceResponse, WeddingError> {
        let fields = req.to_set_document();
        if fields.is_empty() {
            return Err(WeddingError::InvalidInput("No fields to update".to_string()));
        }

        PlaceRepository::update(store, id, fields).await
    }

    /// Delete a place
    pub async fn delete_place(store: &dyn DocumentStore, id: ObjectId) -> Result<(), WeddingError> {
        PlaceRepository::delete(store, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{parse_object_id, InMemoryStore};

    fn hotel() -> Place {
        Place {
            category: "hotel".to_string(),
            name: "Hotel Roma".to_string(),
            address: "Via Roma 1".to_string(),
            description: Some("Vicino alla chiesa".to_string()),
            phone: Some("089 000000".to_string()),
            website: None,
            maps_url: None,
            tags: None,
        }
    }

    #[tokio::test]
    async fn test_partial_update_changes_only_phone() {
        let store = InMemoryStore::new("test");
        let created = PlaceService::create_place(&store, hotel()).await.unwrap();

        let req = UpdatePlaceRequest {
            phone: Some("123".to_string()),
            ..Default::default()
        };
        let id = parse_object_id(&created.id).unwrap();
        let updated = PlaceService::update_place(&store, id, req).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.place.phone.as_deref(), Some("123"));
        assert_eq!(
            Place {
                phone: created.place.phone.clone(),
                ..updated.place.clone()
            },
            created.place
        );
    }

    #[tokio::test]
    async fn test_update_rejects_empty_payload() {
        let store = InMemoryStore::new("test");
        let created = PlaceService::create_place(&store, hotel()).await.unwrap();

        let id = parse_object_id(&created.id).unwrap();

        let result = PlaceService::update_place(&store, id, UpdatePlaceRequest::default()).await;
        assert!(matches!(result, Err(WeddingError::InvalidInput(_))));

        let unchanged = PlaceService::list_places(&store, &PlaceListQuery::default()).await.unwrap();
        assert_eq!(unchanged[0].place, created.place);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let store = InMemoryStore::new("test");
        let result = PlaceService::delete_place(&store, ObjectId::new()).await;
        assert!(matches!(result, Err(WeddingError::NotFound(_))));
    }
}
