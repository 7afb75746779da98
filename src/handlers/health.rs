// src/handlers/health.rs
// DOCUMENTATION: Health and diagnostics handlers
// PURPOSE: Verify service status and store connectivity

use crate::db::StoreState;
use crate::services::DiagnosticsService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Wedding backend running" }))
}

/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "wedding-backend",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /test
/// Store diagnostics; degrades into the report instead of failing
pub async fn test_database(state: web::Data<StoreState>) -> impl Responder {
    let report = DiagnosticsService::report(state.get_ref()).await;
    HttpResponse::Ok().json(report)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/test", web::get().to(test_database));
}
