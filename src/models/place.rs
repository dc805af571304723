// src/models/place.rs
// DOCUMENTATION: Core data structures for places and map search
// PURPOSE: Defines all serialization/deserialization models for API and database

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A place annotated with its great-circle distance from the search point
/// DOCUMENTATION: Query-scoped projection produced by the radius query;
/// exists only for the duration of one search request, never persisted.
/// Coordinates are non-null here because the query's bounding-box range
/// filter discards rows without them
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RankedPlace {
    pub id: i64,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub url: Option<String>,
    pub seq: Option<i32>,

    /// Distance from the search reference point, in meters
    pub distance: f64,
}

/// Request DTO for map radius search
/// DOCUMENTATION: Body of POST /map/search and POST /map/exhibitions
/// Fields are Options so missing values surface as descriptive validation
/// errors instead of a generic deserialization failure; partial parameter
/// sets are rejected, never default-filled
#[derive(Debug, Deserialize, Validate)]
pub struct MapSearchRequest {
    /// Reference latitude in decimal degrees
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be within [-90, 90]"))]
    pub latitude: Option<f64>,

    /// Reference longitude in decimal degrees
    #[validate(range(min = -180.0, max = 180.0, message = "longitude must be within [-180, 180]"))]
    pub longitude: Option<f64>,

    /// Search radius in meters
    pub range: Option<f64>,
}

/// Uniform response envelope for map search endpoints
/// DOCUMENTATION: `{ success, message, data: { content: [...] } }`
/// Zero matches is a success with empty content, not an error
#[derive(Debug, Serialize)]
pub struct SearchEnvelope<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: SearchContent<T>,
}

/// Inner content wrapper of the search envelope
#[derive(Debug, Serialize)]
pub struct SearchContent<T: Serialize> {
    pub content: Vec<T>,
}
