// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod geo;
pub mod search_service;

pub use search_service::*;
