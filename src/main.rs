// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, document store, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use db::StoreState;
use dotenv::dotenv;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info,mongodb=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        return Err(io::Error::new(io::ErrorKind::InvalidInput, e));
    }

    log::info!("Starting wedding backend...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize the document store once; an unavailable store is kept as state
    let store = web::Data::new(config::init_store(&config).await);
    if let StoreState::Unavailable { reason, .. } = store.get_ref() {
        log::warn!("Starting without a document store: {}", reason);
    }

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            // Application state (store handle)
            .app_data(store.clone())
            .app_data(errors::json_config())
            // Middleware
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::configure)
    })
    .bind(&server_addr)?
    .run()
    .await
}
