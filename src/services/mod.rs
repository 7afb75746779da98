// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod diagnostics_service;
pub mod event_service;
pub mod place_service;

pub use diagnostics_service::*;
pub use event_service::*;
pub use place_service::*;
