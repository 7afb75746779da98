// src/models/diagnostics.rs
// DOCUMENTATION: Diagnostics report for GET /test
// PURPOSE: Operational snapshot of backend and store availability

use serde::Serialize;

/// At most this many collection names are reported
pub const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Error text is cut to this many characters
pub const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for DiagnosticsReport {
    fn default() -> Self {
        DiagnosticsReport {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}

/// Shorten an error message for the report
pub fn truncate_error(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_error() {
        let long = "x".repeat(80);
        assert_eq!(truncate_error(&long).chars().count(), MAX_ERROR_CHARS);
        assert_eq!(truncate_error("timeout"), "timeout");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let accented = "è".repeat(60);
        assert_eq!(truncate_error(&accented).chars().count(), MAX_ERROR_CHARS);
    }
}
