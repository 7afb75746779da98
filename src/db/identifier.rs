// src/db/identifier.rs
// DOCUMENTATION: Store identifier handling
// PURPOSE: Validate public ids and hide the internal `_id` field

use mongodb::bson::{oid::ObjectId, Bson, Document};

use crate::errors::WeddingError;

/// Internal identifier field written by the store
pub const INTERNAL_ID_FIELD: &str = "_id";

/// Public identifier field exposed in responses
pub const PUBLIC_ID_FIELD: &str = "id";

/// Parse a public id into the store identifier type
/// DOCUMENTATION: Checked before any lookup, whether or not a record exists
pub fn parse_object_id(raw: &str) -> Result<ObjectId, WeddingError> {
    ObjectId::parse_str(raw).map_err(|_| {
        log::debug!("Rejected malformed identifier: {}", raw);
        WeddingError::InvalidId
    })
}

/// Rename `_id` to `id` rendered as its canonical hex string
pub fn normalize_id(mut document: Document) -> Document {
    if let Some(Bson::ObjectId(oid)) = document.get(INTERNAL_ID_FIELD).cloned() {
        document.remove(INTERNAL_ID_FIELD);
        document.insert(PUBLIC_ID_FIELD, oid.to_hex());
    }
    document
}
