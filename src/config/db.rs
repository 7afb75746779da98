// src/config/db.rs
// DOCUMENTATION: Document store initialization
// PURPOSE: Build the single process-wide store handle at startup

use crate::config::env::DEFAULT_DATABASE_NAME;
use crate::config::Config;
use crate::db::{DocumentStore, InMemoryStore, MongoStore, StoreState};
use anyhow::Context;
use std::sync::Arc;

const MEMORY_SCHEME: &str = "memory://";

/// Initialize the document store
/// DOCUMENTATION: Called once during application startup in main.rs
/// Never fails: a missing or broken connection string yields StoreState::Unavailable
pub async fn init_store(config: &Config) -> StoreState {
    let url_configured = config.database_url_configured();

    let Some(url) = config.database_url.as_deref() else {
        return StoreState::unavailable("DATABASE_URL not set", url_configured);
    };

    match connect(url, config.database_name.as_deref()).await {
        Ok(store) => {
            log::info!("Document store initialized: {}", store.name());
            StoreState::connected(store, url_configured)
        }
        Err(e) => {
            log::error!("Failed to initialize document store: {:#}", e);
            StoreState::unavailable(format!("{:#}", e), url_configured)
        }
    }
}

async fn connect(url: &str, database_name: Option<&str>) -> anyhow::Result<Arc<dyn DocumentStore>> {
    if let Some(rest) = url.strip_prefix(MEMORY_SCHEME) {
        let name = database_name
            .or(Some(rest).filter(|r| !r.is_empty()))
            .unwrap_or(DEFAULT_DATABASE_NAME);
        log::warn!("Using in-memory document store '{}' - data is not persisted", name);
        return Ok(Arc::new(InMemoryStore::new(name)));
    }

    log::info!("Connecting to document store");

    let store = MongoStore::connect(url, database_name)
        .await
        .context("could not create MongoDB client")?;

    // Verify connection works; the client stays usable even if the server is down now
    if let Err(e) = store.ping().await {
        log::warn!("MongoDB ping failed, continuing with lazy connection: {}", e);
    }

    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: Option<&str>) -> Config {
        Config {
            database_url: url.map(str::to_string),
            database_name: None,
            server_address: "127.0.0.1".to_string(),
            server_port: 8000,
            environment: "test".to_string(),
            log_level: "info".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_url_is_unavailable() {
        let state = init_store(&config(None)).await;
        assert!(state.store().is_err());
        assert!(!state.url_configured());
    }

    #[tokio::test]
    async fn test_memory_url_connects() {
        let state = init_store(&config(Some("memory://guests"))).await;
        let store = state.store().expect("memory store should be connected");
        assert_eq!(store.name(), "guests");
        assert!(state.url_configured());
    }

    #[tokio::test]
    async fn test_invalid_url_is_unavailable() {
        let state = init_store(&config(Some("not a connection string"))).await;
        assert!(state.store().is_err());
        assert!(state.url_configured());
    }
}
