// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod event_repository;
#[cfg(test)]
pub mod failing;
pub mod identifier;
pub mod memory;
pub mod mongo;
pub mod place_repository;
pub mod store;

pub use event_repository::*;
#[cfg(test)]
pub use failing::*;
pub use identifier::*;
pub use memory::*;
pub use mongo::*;
pub use place_repository::*;
pub use store::*;
