// src/services/diagnostics_service.rs
// DOCUMENTATION: Store availability probe
// PURPOSE: Build the GET /test report; every failure degrades into the report

use crate::db::StoreState;
use crate::models::{truncate_error, DiagnosticsReport, MAX_REPORTED_COLLECTIONS};

pub struct DiagnosticsService;

impl DiagnosticsService {
    /// Probe the store and summarize its state
    /// DOCUMENTATION: Never returns an error
    pub async fn report(state: &StoreState) -> DiagnosticsReport {
        let mut report = DiagnosticsReport::default();

        let store = match state {
            StoreState::Connected { store, .. } => store,
            StoreState::Unavailable { reason, .. } => {
                log::debug!("Diagnostics: store unavailable ({})", reason);
                report.database = "⚠️ Available but not initialized".to_string();
                return report;
            }
        };

        report.database = "✅ Available".to_string();
        let url_status = if state.url_configured() { "✅ Set" } else { "❌ Not Set" };
        report.database_url = Some(url_status.to_string());
        report.database_name = Some(store.name().to_string());
        report.connection_status = "Connected".to_string();

        match store.list_collection_names().await {
            Ok(mut collections) => {
                collections.truncate(MAX_REPORTED_COLLECTIONS);
                report.collections = collections;
                report.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                log::warn!("Diagnostics: listing collections failed: {}", e);
                report.database = format!("⚠️ Connected but Error: {}", truncate_error(&e.to_string()));
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DocumentStore, FailingStore, InMemoryStore};
    use mongodb::bson::doc;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_unavailable_store_degrades() {
        let state = StoreState::unavailable("DATABASE_URL not set", false);
        let report = DiagnosticsService::report(&state).await;

        assert_eq!(report.backend, "✅ Running");
        assert_eq!(report.database, "⚠️ Available but not initialized");
        assert_eq!(report.connection_status, "Not Connected");
        assert!(report.database_url.is_none());
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn test_connected_store_lists_at_most_ten_collections() {
        let store = InMemoryStore::new("wedding");
        for i in 0..12 {
            store
                .insert_one(&format!("c{:02}", i), doc! { "n": i })
                .await
                .unwrap();
        }

        let state = StoreState::connected(Arc::new(store), true);
        let report = DiagnosticsService::report(&state).await;

        assert_eq!(report.database, "✅ Connected & Working");
        assert_eq!(report.database_url.as_deref(), Some("✅ Set"));
        assert_eq!(report.database_name.as_deref(), Some("wedding"));
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.collections.len(), MAX_REPORTED_COLLECTIONS);
    }

    #[tokio::test]
    async fn test_listing_failure_reports_truncated_error() {
        let store = FailingStore::new(
            "server selection timeout: no available servers after 30000 ms, topology Unknown",
        );
        let state = StoreState::connected(Arc::new(store), true);
        let report = DiagnosticsService::report(&state).await;

        assert_eq!(
            report.database,
            "⚠️ Connected but Error: Unexpected document shape: server selection timeou"
        );
        let detail = report.database.trim_start_matches("⚠️ Connected but Error: ");
        assert_eq!(detail.chars().count(), 50);
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.database_name.as_deref(), Some("broken"));
        assert!(report.collections.is_empty());
    }
}
