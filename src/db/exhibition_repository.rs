// src/db/exhibition_repository.rs
// DOCUMENTATION: Database access for exhibitions
// PURPOSE: Batched place→exhibition joins and the detail view

use crate::errors::ArtmapError;
use crate::models::{ExhibitionDetail, ExhibitionSummary};
use sqlx::PgPool;

const SUMMARY_COLUMNS: &str = r#"
    a.id, a.place_id, a.thumbnail, a.art_code, a.art_type, a.title,
    a.start_date, a.end_date, a.price, a.place_name, a.phone,
    p.address, p.latitude, p.longitude, p.url, p.seq
"#;

/// ExhibitionRepository: all database operations for exhibitions
pub struct ExhibitionRepository;

impl ExhibitionRepository {
    /// Fetch every exhibition referencing any of the given place ids
    /// DOCUMENTATION: One batched query over the whole id set, never one
    /// query per place. Place columns are joined eagerly; an exhibition
    /// without a place cannot match and is excluded by the inner join
    pub async fn find_by_place_ids(
        pool: &PgPool,
        place_ids: &[i64],
    ) -> Result<Vec<ExhibitionSummary>, ArtmapError> {
        let sql = format!(
            r#"
            SELECT {SUMMARY_COLUMNS}
            FROM arts a
            JOIN places p ON p.id = a.place_id
            WHERE a.place_id = ANY($1)
            "#
        );

        let rows = sqlx::query_as::<_, ExhibitionSummary>(&sql)
            .bind(place_ids)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Exhibition join query failed: {}", e);
                ArtmapError::DatabaseError(e.to_string())
            })?;

        Ok(rows)
    }

    /// Fetch exhibitions by explicit id list, place data eagerly joined
    /// DOCUMENTATION: Card lookup after a map drag/pan; ids absent from
    /// storage are silently omitted. LEFT JOIN keeps exhibitions whose
    /// place reference is NULL
    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[i64],
    ) -> Result<Vec<ExhibitionSummary>, ArtmapError> {
        let sql = format!(
            r#"
            SELECT {SUMMARY_COLUMNS}
            FROM arts a
            LEFT JOIN places p ON p.id = a.place_id
            WHERE a.id = ANY($1)
            "#
        );

        let rows = sqlx::query_as::<_, ExhibitionSummary>(&sql)
            .bind(ids)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Card lookup query failed: {}", e);
                ArtmapError::DatabaseError(e.to_string())
            })?;

        Ok(rows)
    }

    /// Fetch one exhibition's full detail, incrementing its view count
    /// DOCUMENTATION: The increment runs first so the returned row already
    /// carries the new count; a missing id is NotFound, not a 500
    pub async fn get_detail(pool: &PgPool, id: i64) -> Result<ExhibitionDetail, ArtmapError> {
        let bumped = sqlx::query_as::<_, (i64,)>(
            "UPDATE arts SET view_count = view_count + 1, updated_at = NOW() WHERE id = $1 RETURNING id",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("View count update failed for exhibition {}: {}", id, e);
            ArtmapError::DatabaseError(e.to_string())
        })?;

        if bumped.is_none() {
            return Err(ArtmapError::NotFound(id.to_string()));
        }

        let row = sqlx::query_as::<_, ExhibitionDetail>(
            r#"
            SELECT
                a.id, a.place_id, a.thumbnail, a.art_code, a.art_type, a.title,
                a.start_date, a.end_date, a.price, a.place_name,
                a.region, a.sub_region, a.phone, a.view_count,
                a.created_at, a.updated_at,
                p.address, p.latitude, p.longitude, p.url, p.seq
            FROM arts a
            LEFT JOIN places p ON p.id = a.place_id
            WHERE a.id = $1
            "#,
        )
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Detail query failed for exhibition {}: {}", id, e);
            ArtmapError::DatabaseError(e.to_string())
        })?;

        Ok(row)
    }
}
