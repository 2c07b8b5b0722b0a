use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use makan_core::{Category, MerchantDetail, MerchantIntel, MerchantSummary};
use makan_discovery::{
    views, Coordinate, DiscoveryError, MerchantFinder, DEFAULT_PICK_COUNT, INTEL_PICK_COUNT,
};

use super::{ApiError, AppState};

const MISSING_COORDS: &str = "Provide lat and long in query";

/// Query parameters for the listing routes. `lat` and `long` stay raw strings
/// so an empty value is rejected the same way as an absent one.
#[derive(Debug, Deserialize)]
pub(super) struct NearbyQuery {
    lat: Option<String>,
    long: Option<String>,
    #[serde(rename = "type")]
    category: Option<String>,
}

/// `GET /random?lat&long&type?`: fastest-delivery view of a fresh
/// aggregation around the caller's coordinate.
pub(super) async fn random_merchants(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Vec<MerchantSummary>>, ApiError> {
    let center = parse_center(&query)?;
    let finder = MerchantFinder::new(
        &state.client,
        center,
        category_filter(&query),
        state.config.sample_points,
    );
    let merchants = finder.fetch_summaries(DEFAULT_PICK_COUNT).await;
    Ok(Json(views::fastest(merchants)))
}

/// `GET /intel?lat&long&type?`: pricey picks in the lightweight intel shape,
/// always from a fresh pick-50 aggregation.
pub(super) async fn intel_merchants(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Vec<MerchantIntel>>, ApiError> {
    let center = parse_center(&query)?;
    let finder = MerchantFinder::new(
        &state.client,
        center,
        category_filter(&query),
        state.config.sample_points,
    );
    let merchants = finder.fetch_intel(INTEL_PICK_COUNT).await;
    Ok(Json(views::intel_picks(merchants)))
}

/// `GET /merchant/{id}`: single merchant profile with menu.
pub(super) async fn merchant_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MerchantDetail>, ApiError> {
    let detail = makan_discovery::merchant_detail(&state.client, &id)
        .await
        .map_err(map_discovery_error)?;
    Ok(Json(detail))
}

fn parse_center(query: &NearbyQuery) -> Result<Coordinate, ApiError> {
    let (Some(lat), Some(long)) = (
        non_empty(query.lat.as_deref()),
        non_empty(query.long.as_deref()),
    ) else {
        return Err(ApiError::not_acceptable(MISSING_COORDS));
    };
    let latitude: f64 = lat
        .parse()
        .map_err(|_| ApiError::not_acceptable(format!("lat is not a number: {lat}")))?;
    let longitude: f64 = long
        .parse()
        .map_err(|_| ApiError::not_acceptable(format!("long is not a number: {long}")))?;
    Coordinate::new(latitude, longitude)
        .ok_or_else(|| ApiError::not_acceptable("lat or long out of range"))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.is_empty())
}

fn category_filter(query: &NearbyQuery) -> Option<Category> {
    query
        .category
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .map(Category::parse)
}

fn map_discovery_error(error: DiscoveryError) -> ApiError {
    match error {
        DiscoveryError::MerchantNotFound { .. } => ApiError::not_found(error.to_string()),
        other => {
            tracing::error!(error = %other, "merchant profile lookup failed");
            ApiError::internal("failed to load merchant profile")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(lat: Option<&str>, long: Option<&str>) -> NearbyQuery {
        NearbyQuery {
            lat: lat.map(str::to_string),
            long: long.map(str::to_string),
            category: None,
        }
    }

    #[test]
    fn parse_center_accepts_decimal_degrees() {
        let center = parse_center(&query(Some("-6.7559"), Some("108.5137"))).expect("coordinate");
        assert!((center.latitude + 6.7559).abs() < f64::EPSILON);
        assert!((center.longitude - 108.5137).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_center_rejects_missing_and_empty_values() {
        for bad in [
            query(None, None),
            query(Some("-6.2"), None),
            query(None, Some("106.8")),
            query(Some(""), Some("106.8")),
            query(Some("-6.2"), Some("")),
        ] {
            let error = parse_center(&bad).expect_err("missing coordinate should fail");
            assert_eq!(error.message, MISSING_COORDS);
        }
    }

    #[test]
    fn parse_center_rejects_non_numeric_values() {
        let error = parse_center(&query(Some("here"), Some("106.8"))).expect_err("non-numeric");
        assert!(error.message.contains("lat is not a number"));
    }

    #[test]
    fn parse_center_rejects_out_of_range_values() {
        assert!(parse_center(&query(Some("-91.0"), Some("106.8"))).is_err());
        assert!(parse_center(&query(Some("-6.2"), Some("181.0"))).is_err());
    }

    #[test]
    fn category_filter_skips_empty_type() {
        let mut q = query(Some("-6.2"), Some("106.8"));
        assert_eq!(category_filter(&q), None);

        q.category = Some(String::new());
        assert_eq!(category_filter(&q), None);

        q.category = Some("FOOD".to_string());
        assert_eq!(category_filter(&q), Some(Category::Food));

        q.category = Some("DESSERT".to_string());
        assert_eq!(category_filter(&q), Some(Category::Unknown));
    }
}
