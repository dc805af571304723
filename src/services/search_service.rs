// src/services/search_service.rs
// DOCUMENTATION: Business logic for the map search flow
// PURPOSE: Validate parameters, run the radius→join chain, assemble envelopes

use crate::db::{ExhibitionRepository, PlaceRepository};
use crate::errors::ArtmapError;
use crate::models::{
    CardLookupRequest, ExhibitionSummary, ExhibitionWithDistance, MapSearchRequest, RankedPlace,
    SearchContent, SearchEnvelope,
};
use crate::services::geo;
use serde::Serialize;
use sqlx::PgPool;
use std::collections::HashMap;

pub struct SearchService;

impl SearchService {
    /// Extract and validate the (latitude, longitude, range) triple
    /// DOCUMENTATION: All three must be present together; a partial set is
    /// a validation error, never a default-filled query. Range checks here
    /// cover what the validator derive on the DTO cannot express
    pub fn validate_search_params(req: &MapSearchRequest) -> Result<(f64, f64, f64), ArtmapError> {
        let lat = req
            .latitude
            .ok_or_else(|| ArtmapError::ValidationError("latitude is required".to_string()))?;
        let lon = req
            .longitude
            .ok_or_else(|| ArtmapError::ValidationError("longitude is required".to_string()))?;
        let range = req
            .range
            .ok_or_else(|| ArtmapError::ValidationError("range is required".to_string()))?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(ArtmapError::ValidationError(
                "latitude must be within [-90, 90]".to_string(),
            ));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(ArtmapError::ValidationError(
                "longitude must be within [-180, 180]".to_string(),
            ));
        }
        if !range.is_finite() || range <= 0.0 {
            return Err(ArtmapError::ValidationError(
                "range must be a positive number of meters".to_string(),
            ));
        }

        Ok((lat, lon, range))
    }

    /// Radius search returning distance-ranked places
    pub async fn search_places(
        pool: &PgPool,
        req: MapSearchRequest,
    ) -> Result<SearchEnvelope<RankedPlace>, ArtmapError> {
        let (lat, lon, range) = Self::validate_search_params(&req)?;
        let bbox = geo::bounding_box(lat, lon, range)?;

        let places = PlaceRepository::find_within_radius(pool, lat, lon, range, &bbox).await?;

        log::info!(
            "Map search at ({}, {}) range {}m: {} places",
            lat,
            lon,
            range,
            places.len()
        );

        Ok(Self::assemble(places, "place"))
    }

    /// Full search chain: radius-ranked places, then the batched join to
    /// their exhibitions, each annotated with its place's distance
    pub async fn search_exhibitions(
        pool: &PgPool,
        req: MapSearchRequest,
    ) -> Result<SearchEnvelope<ExhibitionWithDistance>, ArtmapError> {
        let (lat, lon, range) = Self::validate_search_params(&req)?;
        let bbox = geo::bounding_box(lat, lon, range)?;

        let ranked = PlaceRepository::find_within_radius(pool, lat, lon, range, &bbox).await?;
        if ranked.is_empty() {
            return Ok(Self::assemble(Vec::new(), "exhibition"));
        }

        let place_ids: Vec<i64> = ranked.iter().map(|p| p.id).collect();
        let exhibitions = ExhibitionRepository::find_by_place_ids(pool, &place_ids).await?;

        let joined = Self::attach_distances(&ranked, exhibitions);

        log::info!(
            "Map search at ({}, {}) range {}m: {} exhibitions at {} places",
            lat,
            lon,
            range,
            joined.len(),
            ranked.len()
        );

        Ok(Self::assemble(joined, "exhibition"))
    }

    /// Card lookup by explicit exhibition id list
    pub async fn lookup_cards(
        pool: &PgPool,
        req: CardLookupRequest,
    ) -> Result<SearchEnvelope<ExhibitionSummary>, ArtmapError> {
        if req.id.is_empty() {
            return Err(ArtmapError::ValidationError(
                "id must be a non-empty array of exhibition ids".to_string(),
            ));
        }

        let exhibitions = ExhibitionRepository::find_by_ids(pool, &req.id).await?;
        Ok(Self::assemble(exhibitions, "exhibition"))
    }

    /// Attach each exhibition's distance from its place's ranked position
    /// DOCUMENTATION: Exhibitions whose place is absent from the ranked set
    /// are dropped, not errored; output follows the place distance order,
    /// nearest place's exhibitions first
    pub fn attach_distances(
        ranked: &[RankedPlace],
        exhibitions: Vec<ExhibitionSummary>,
    ) -> Vec<ExhibitionWithDistance> {
        let by_place: HashMap<i64, (usize, f64)> = ranked
            .iter()
            .enumerate()
            .map(|(rank, p)| (p.id, (rank, p.distance)))
            .collect();

        let mut joined: Vec<(usize, ExhibitionWithDistance)> = exhibitions
            .into_iter()
            .filter_map(|e| {
                let place_id = e.place_id?;
                let (rank, distance) = *by_place.get(&place_id)?;
                Some((
                    rank,
                    ExhibitionWithDistance {
                        exhibition: e,
                        distance,
                    },
                ))
            })
            .collect();

        joined.sort_by_key(|(rank, _)| *rank);
        joined.into_iter().map(|(_, e)| e).collect()
    }

    /// Wrap items into the uniform `{ success, message, data: { content } }`
    /// envelope; zero matches is a success, not a failure
    pub fn assemble<T: Serialize>(items: Vec<T>, noun: &str) -> SearchEnvelope<T> {
        let message = match items.len() {
            0 => format!("No {}s found", noun),
            1 => format!("1 {} found", noun),
            n => format!("{} {}s found", n, noun),
        };

        SearchEnvelope {
            success: true,
            message,
            data: SearchContent { content: items },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(id: i64, lat: f64, lon: f64, distance: f64) -> RankedPlace {
        RankedPlace {
            id,
            address: None,
            latitude: lat,
            longitude: lon,
            url: None,
            seq: None,
            distance,
        }
    }

    fn summary(id: i64, place_id: Option<i64>) -> ExhibitionSummary {
        ExhibitionSummary {
            id,
            place_id,
            thumbnail: None,
            art_code: None,
            art_type: None,
            title: Some(format!("Exhibition {}", id)),
            start_date: None,
            end_date: None,
            price: None,
            place_name: None,
            phone: None,
            address: None,
            latitude: None,
            longitude: None,
            url: None,
            seq: None,
        }
    }

    fn search_req(lat: Option<f64>, lon: Option<f64>, range: Option<f64>) -> MapSearchRequest {
        MapSearchRequest {
            latitude: lat,
            longitude: lon,
            range,
        }
    }

    #[test]
    fn test_validate_accepts_full_triple() {
        let params =
            SearchService::validate_search_params(&search_req(Some(37.5665), Some(126.978), Some(1000.0)));
        assert!(params.is_ok());
        let (lat, lon, range) = params.unwrap();
        assert_eq!(lat, 37.5665);
        assert_eq!(lon, 126.978);
        assert_eq!(range, 1000.0);
    }

    #[test]
    fn test_validate_rejects_partial_sets() {
        assert!(SearchService::validate_search_params(&search_req(None, Some(1.0), Some(1.0))).is_err());
        assert!(SearchService::validate_search_params(&search_req(Some(1.0), None, Some(1.0))).is_err());
        assert!(SearchService::validate_search_params(&search_req(Some(1.0), Some(1.0), None)).is_err());
        assert!(SearchService::validate_search_params(&search_req(None, None, None)).is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_coordinates() {
        // Latitude 200 is the malformed-request scenario; must fail before any query
        assert!(SearchService::validate_search_params(&search_req(Some(200.0), Some(0.0), Some(10.0))).is_err());
        assert!(SearchService::validate_search_params(&search_req(Some(0.0), Some(-181.0), Some(10.0))).is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_range() {
        assert!(SearchService::validate_search_params(&search_req(Some(0.0), Some(0.0), Some(0.0))).is_err());
        assert!(SearchService::validate_search_params(&search_req(Some(0.0), Some(0.0), Some(-5.0))).is_err());
        assert!(SearchService::validate_search_params(&search_req(Some(0.0), Some(0.0), Some(f64::NAN))).is_err());
    }

    #[test]
    fn test_radius_filter_seoul_scenario() {
        // Reference (37.5665, 126.9780), range 100 km: a ~50 km place stays,
        // a ~150 km place is excluded. Mirrors the SQL predicate using the
        // reference distance implementation
        let reference = (37.5665, 126.9780);
        let range = 100_000.0;

        let near = (37.2636, 127.0286); // Suwon, ~35-50 km
        let far = (36.3504, 127.3845); // Daejeon, ~140-160 km

        let candidates = [(1_i64, near), (2_i64, far)];

        let mut kept: Vec<RankedPlace> = candidates
            .iter()
            .map(|(id, (lat, lon))| {
                let d = geo::haversine_distance_m(reference.0, reference.1, *lat, *lon);
                ranked(*id, *lat, *lon, d)
            })
            .filter(|p| p.distance <= range)
            .collect();
        kept.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 1);
        assert!(kept[0].distance <= range);
    }

    #[test]
    fn test_effectively_zero_radius_keeps_nothing() {
        let reference = (37.5665, 126.9780);
        let d = geo::haversine_distance_m(reference.0, reference.1, 37.5666, 126.9781);
        // Nobody sits exactly on the reference point
        assert!(d > 0.001);
    }

    #[test]
    fn test_attach_distances_orders_by_place_rank() {
        let ranked_places = vec![
            ranked(10, 37.0, 127.0, 500.0),
            ranked(20, 37.1, 127.1, 1500.0),
        ];
        // Exhibitions arrive in arbitrary order from the batched join
        let exhibitions = vec![summary(3, Some(20)), summary(1, Some(10)), summary(2, Some(10))];

        let joined = SearchService::attach_distances(&ranked_places, exhibitions);

        assert_eq!(joined.len(), 3);
        // Nearest place's exhibitions first
        assert_eq!(joined[0].exhibition.place_id, Some(10));
        assert_eq!(joined[1].exhibition.place_id, Some(10));
        assert_eq!(joined[2].exhibition.place_id, Some(20));
        assert_eq!(joined[0].distance, 500.0);
        assert_eq!(joined[2].distance, 1500.0);

        // Ascending distance invariant
        assert!(joined.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_attach_distances_drops_unmatched() {
        let ranked_places = vec![ranked(10, 37.0, 127.0, 500.0)];
        let exhibitions = vec![
            summary(1, Some(10)),
            summary(2, Some(99)), // place not in the ranked set
            summary(3, None),     // no place reference at all
        ];

        let joined = SearchService::attach_distances(&ranked_places, exhibitions);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].exhibition.id, 1);
    }

    #[test]
    fn test_assemble_messages() {
        let empty: SearchEnvelope<RankedPlace> = SearchService::assemble(Vec::new(), "exhibition");
        assert!(empty.success);
        assert_eq!(empty.message, "No exhibitions found");
        assert!(empty.data.content.is_empty());

        let one = SearchService::assemble(vec![ranked(1, 0.0, 0.0, 0.0)], "place");
        assert_eq!(one.message, "1 place found");

        let three = SearchService::assemble(
            vec![
                ranked(1, 0.0, 0.0, 0.0),
                ranked(2, 0.0, 0.0, 1.0),
                ranked(3, 0.0, 0.0, 2.0),
            ],
            "place",
        );
        assert_eq!(three.message, "3 places found");
    }
}
