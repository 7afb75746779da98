// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and wire all routes

use actix_web::web;

/// Build an actix test service with every route and the given StoreState
#[cfg(test)]
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .app_data(crate::errors::json_config())
                .configure(crate::handlers::configure),
        )
        .await
    };
}

pub mod event;
pub mod health;
pub mod places;

pub use event::config as event_config;
pub use health::config as health_config;
pub use places::config as places_config;

/// All application routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    health_config(cfg);
    event_config(cfg);
    places_config(cfg);
}
