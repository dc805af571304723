// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod exhibition;
pub mod place;

pub use exhibition::*;
pub use place::*;
