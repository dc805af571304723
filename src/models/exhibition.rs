// src/models/exhibition.rs
// DOCUMENTATION: Data structures for exhibition ("art") records
// PURPOSE: Database rows and API response shapes for exhibitions

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Exhibition summary with place data eagerly joined
/// DOCUMENTATION: Result shape of the batched place→exhibition join.
/// Address/coordinates always come from the joined place row, never from
/// the arts table itself
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionSummary {
    /// Unique identifier (BIGSERIAL)
    pub id: i64,

    /// Owning place identifier
    pub place_id: Option<i64>,

    /// Listing thumbnail URL
    pub thumbnail: Option<String>,

    /// Category code
    pub art_code: Option<String>,

    /// Category type
    pub art_type: Option<String>,

    /// Exhibition title
    pub title: Option<String>,

    /// Opening date
    pub start_date: Option<NaiveDate>,

    /// Closing date
    pub end_date: Option<NaiveDate>,

    /// Free-text price (may carry a "free" marker)
    pub price: Option<String>,

    /// Venue display name
    pub place_name: Option<String>,

    /// Venue phone number
    pub phone: Option<String>,

    /// Joined from the owning place
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub url: Option<String>,
    pub seq: Option<i32>,
}

/// Exhibition summary annotated with its place's search distance
/// DOCUMENTATION: Produced by attaching the ranked-place distance to each
/// joined exhibition; ordered by the owning place's distance rank
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionWithDistance {
    #[serde(flatten)]
    pub exhibition: ExhibitionSummary,

    /// Distance of the owning place from the search point, in meters
    pub distance: f64,
}

/// Full exhibition detail returned by GET /exhibitions/{id}
/// DOCUMENTATION: Summary fields plus region and bookkeeping columns
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionDetail {
    pub id: i64,
    pub place_id: Option<i64>,
    pub thumbnail: Option<String>,
    pub art_code: Option<String>,
    pub art_type: Option<String>,
    pub title: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub price: Option<String>,
    pub place_name: Option<String>,
    pub region: Option<String>,
    pub sub_region: Option<String>,
    pub phone: Option<String>,

    /// Incremented on every detail view
    pub view_count: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Joined from the owning place
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub url: Option<String>,
    pub seq: Option<i32>,
}

/// Request DTO for the card lookup endpoint
/// DOCUMENTATION: Body of POST /map/cards; ids are collected client-side
/// after a map drag/pan. Typed deserialization rejects non-numeric elements
/// before any handler code runs; emptiness is checked in the service
#[derive(Debug, Deserialize)]
pub struct CardLookupRequest {
    pub id: Vec<i64>,
}
