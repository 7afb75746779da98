// src/models/event.rs
// DOCUMENTATION: Wedding event record
// PURPOSE: Schema for the singleton document in the `event` collection

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Wedding event details
/// DOCUMENTATION: Used both as the PUT /api/event payload and as the stored shape.
/// Every field except `notes` is required; `date` is a free-form label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Event {
    /// Names of the couple
    pub couple_names: String,

    /// Date of the wedding, e.g. 2026-05-10
    pub date: String,

    /// City and province
    pub city: String,

    pub church_name: String,
    pub church_address: String,

    /// Reception venue
    pub venue_name: String,
    pub venue_address: String,

    /// Extra notes shown on the homepage
    #[serde(default)]
    pub notes: Option<String>,
}

impl Default for Event {
    /// Record seeded into an empty `event` collection on first read
    fn default() -> Self {
        Event {
            couple_names: "Brigitte & Salvatore".to_string(),
            date: "2026-05-10".to_string(),
            city: "Montoro (AV)".to_string(),
            church_name: "Chiesa di San Giovanni Battista".to_string(),
            church_address: "Piazza Michele Pironti, Montoro (AV)".to_string(),
            venue_name: "Tenuta Leone - Villa per Eventi".to_string(),
            venue_address: "Via Roma, 19, 84080 Calvanico (SA)".to_string(),
            notes: Some(
                "Benvenuti! Qui trovate tutte le informazioni utili per vivere al meglio il nostro grande giorno."
                    .to_string(),
            ),
        }
    }
}

/// Event as returned by the API, with the store identifier as `id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: String,

    #[serde(flatten)]
    pub event: Event,
}
