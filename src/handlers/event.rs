// src/handlers/event.rs
// DOCUMENTATION: HTTP handlers for the wedding event
// PURPOSE: Parse requests, call services, return responses

use crate::db::StoreState;
use crate::errors::WeddingError;
use crate::models::Event;
use crate::services::EventService;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// GET /api/event
/// Return the event, seeding the default one on first access
pub async fn get_event(state: web::Data<StoreState>) -> Result<impl Responder, WeddingError> {
    let event = EventService::get_event(state.store()?).await?;
    Ok(HttpResponse::Ok().json(event))
}

/// PUT /api/event
/// Replace the event with a full payload
pub async fn update_event(
    state: web::Data<StoreState>,
    req: web::Json<Event>,
) -> Result<impl Responder, WeddingError> {
    req.validate()?;

    let event = EventService::update_event(state.store()?, req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(event))
}

/// Configuration for event routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/event")
            .route(web::get().to(get_event))
            .route(web::put().to(update_event)),
    );
}
