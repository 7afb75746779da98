// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod diagnostics;
pub mod event;
pub mod place;
pub mod sample;

pub use diagnostics::*;
pub use event::*;
pub use place::*;
#[allow(unused_imports)]
pub use sample::*;
