// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Request, stored and response shapes for the `place` collection

use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Documented place categories
/// DOCUMENTATION: Not enforced - any string is accepted as a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceCategory {
    Church,
    Venue,
    Hairdresser,
    Barber,
    Hotel,
    Restaurant,
    Poi,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 7] = [
        PlaceCategory::Church,
        PlaceCategory::Venue,
        PlaceCategory::Hairdresser,
        PlaceCategory::Barber,
        PlaceCategory::Hotel,
        PlaceCategory::Restaurant,
        PlaceCategory::Poi,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlaceCategory::Church => "church",
            PlaceCategory::Venue => "venue",
            PlaceCategory::Hairdresser => "hairdresser",
            PlaceCategory::Barber => "barber",
            PlaceCategory::Hotel => "hotel",
            PlaceCategory::Restaurant => "restaurant",
            PlaceCategory::Poi => "poi",
        }
    }

    pub fn is_known(category: &str) -> bool {
        Self::ALL.iter().any(|c| c.as_str() == category)
    }
}

/// Generic place (hairdresser, barber, hotel, restaurant, cultural POI, etc.)
/// DOCUMENTATION: Payload for POST /api/places and the stored document shape.
/// The identifier is assigned by the store and is never part of this schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Place {
    /// One of the documented PlaceCategory values, unchecked
    pub category: String,

    pub name: String,

    /// Full address
    pub address: String,

    /// Short description or tips
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    /// Website URL as string
    #[serde(default)]
    pub website: Option<String>,

    /// Google Maps link
    #[serde(default)]
    pub maps_url: Option<String>,

    /// Optional tags/labels
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Request DTO for updating an existing place
/// DOCUMENTATION: Data transfer object for PUT /api/places/{id}.
/// Omitted and null fields are left untouched
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePlaceRequest {
    pub category: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub maps_url: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl UpdatePlaceRequest {
    /// Fields to `$set`, in schema order; empty when nothing effective was supplied
    pub fn to_set_document(&self) -> Document {
        let strings = [
            ("category", &self.category),
            ("name", &self.name),
            ("address", &self.address),
            ("description", &self.description),
            ("phone", &self.phone),
            ("website", &self.website),
            ("maps_url", &self.maps_url),
        ];

        let mut fields = Document::new();
        for (key, value) in strings {
            if let Some(value) = value {
                fields.insert(key, value.clone());
            }
        }

        if let Some(tags) = &self.tags {
            fields.insert(
                "tags",
                Bson::Array(tags.iter().cloned().map(Bson::String).collect()),
            );
        }

        fields
    }
}

/// Place as returned by the API, with the store identifier as `id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceResponse {
    pub id: String,

    #[serde(flatten)]
    pub place: Place,
}

/// Query string for GET /api/places
#[derive(Debug, Default)]
pub struct PlaceListQuery {
    /// Exact-match category filter
    pub category: Option<String>,
}

impl PlaceListQuery {
    /// Build from decoded query pairs; a repeated `category` keeps its last value
    /// and unknown parameters are ignored
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let category = pairs
            .into_iter()
            .filter(|(key, _)| key == "category")
            .map(|(_, value)| value)
            .last();

        Self { category }
    }

    /// Category filter, treating an empty value as no filter
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}
