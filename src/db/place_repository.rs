// src/db/place_repository.rs
// DOCUMENTATION: Database access for places
// PURPOSE: Radius-ranked place lookup, the single raw-SQL escape hatch

use crate::errors::ArtmapError;
use crate::models::RankedPlace;
use crate::services::geo::BoundingBox;
use sqlx::PgPool;

/// PlaceRepository: all database operations for places
/// DOCUMENTATION: The distance expression cannot be written through the
/// query builder, so it lives here as one parameterized raw query with a
/// typed result shape; everything else goes through the ordinary paths
pub struct PlaceRepository;

impl PlaceRepository {
    /// Find every place within `radius_m` of the reference point,
    /// annotated with its great-circle distance, nearest first
    /// DOCUMENTATION: The bounding-box range predicates are an index-friendly
    /// pre-filter (they also discard NULL coordinates); the spherical
    /// law-of-cosines distance in the subquery is the authoritative filter.
    /// The acos argument is clamped into [-1, 1] against rounding drift
    pub async fn find_within_radius(
        pool: &PgPool,
        lat: f64,
        lon: f64,
        radius_m: f64,
        bbox: &BoundingBox,
    ) -> Result<Vec<RankedPlace>, ArtmapError> {
        let rows = sqlx::query_as::<_, RankedPlace>(
            r#"
            SELECT *
            FROM (
                SELECT
                    p.id, p.address, p.latitude, p.longitude, p.url, p.seq,
                    6371000.0 * acos(
                        LEAST(1.0, GREATEST(-1.0,
                            cos(radians($1)) * cos(radians(p.latitude))
                                * cos(radians(p.longitude) - radians($2))
                            + sin(radians($1)) * sin(radians(p.latitude))
                        ))
                    ) AS distance
                FROM places p
                WHERE p.latitude BETWEEN $4 AND $5
                  AND p.longitude BETWEEN $6 AND $7
            ) ranked
            WHERE ranked.distance <= $3
            ORDER BY ranked.distance ASC
            "#,
        )
        .bind(lat) // $1
        .bind(lon) // $2
        .bind(radius_m) // $3
        .bind(bbox.min_lat) // $4
        .bind(bbox.max_lat) // $5
        .bind(bbox.min_lon) // $6
        .bind(bbox.max_lon) // $7
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Radius query failed: {}", e);
            ArtmapError::DatabaseError(e.to_string())
        })?;

        log::debug!(
            "Radius query: {} places within {}m of ({}, {})",
            rows.len(),
            radius_m,
            lat,
            lon
        );

        Ok(rows)
    }
}
