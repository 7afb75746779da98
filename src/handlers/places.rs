// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place operations
// PURPOSE: Parse requests, call services, return responses

use crate::db::{parse_object_id, StoreState};
use crate::errors::WeddingError;
use crate::models::{Place, PlaceListQuery, UpdatePlaceRequest};
use crate::services::PlaceService;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// GET /api/places
/// List places sorted by name, optionally filtered by category
pub async fn list_places(
    state: web::Data<StoreState>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<impl Responder, WeddingError> {
    let query = PlaceListQuery::from_pairs(query.into_inner());
    let places = PlaceService::list_places(state.store()?, &query).await?;
    Ok(HttpResponse::Ok().json(places))
}

/// POST /api/places
/// Create a new place
pub async fn create_place(
    state: web::Data<StoreState>,
    req: web::Json<Place>,
) -> Result<impl Responder, WeddingError> {
    req.validate()?;

    let place = PlaceService::create_place(state.store()?, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(place))
}

/// PUT /api/places/{id}
/// Partially update a place
/// The id is checked before the body is decoded
pub async fn update_place(
    state: web::Data<StoreState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<impl Responder, WeddingError> {
    let id = parse_object_id(&path)?;

    let req: UpdatePlaceRequest = serde_json::from_slice(&body)
        .map_err(|e| WeddingError::ValidationError(e.to_string()))?;
    req.validate()?;

    let place = PlaceService::update_place(state.store()?, id, req).await?;
    Ok(HttpResponse::Ok().json(place))
}

/// DELETE /api/places/{id}
/// Hard delete a place
pub async fn delete_place(
    state: web::Data<StoreState>,
    path: web::Path<String>,
) -> Result<impl Responder, WeddingError> {
    let id = parse_object_id(&path)?;

    PlaceService::delete_place(state.store()?, id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/places")
            .route("", web::get().to(list_places))
            .route("/", web::get().to(list_places))
            .route("", web::post().to(create_place))
            .route("/", web::post().to(create_place))
            .route("/{id}", web::put().to(update_place))
            .route("/{id}", web::delete().to(delete_place)),
    );
}
