// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod exhibition_repository;
pub mod place_repository;

pub use exhibition_repository::*;
pub use place_repository::*;
