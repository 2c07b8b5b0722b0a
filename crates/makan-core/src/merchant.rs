//! Normalized merchant shapes served by the API.
//!
//! All three types are projections of GoFood's nested card/profile JSON.
//! Optional fields are skipped during serialization when absent, so response
//! bodies only carry the keys the upstream actually provided.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A merchant row from the listing endpoint, flattened for the `/random`
/// sorted views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantSummary {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Upstream open-status code, e.g. `"OPEN"` or `"CLOSED"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_open: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Coarse cost tier, 1 (cheapest) through 4.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    /// Display rating as upstream formats it, e.g. `"4.6"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    /// Card display title (usually merchant name plus branch).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Brand name, distinct from the card title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Cuisine codes joined with commas, e.g. `"CHINESE,SEAFOOD"`. Empty when
    /// the card lists no cuisines.
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Opaque upstream location payload, passed through untouched.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub location: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_delivery_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_cooking_minutes: Option<u32>,
}

/// The lighter projection used by the `/intel` view: the summary minus
/// distance/eta fields, plus a derived map link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantIntel {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_open: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub tag: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub location: Value,
    /// Google Maps search link derived from the upstream location string,
    /// when that location is a plain string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A single merchant's profile plus menu, served by `/merchant/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantDetail {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub location: Value,
    /// Upstream short link to the merchant page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_cooking_minutes: Option<u32>,
    /// Menu items in upstream order.
    pub menu: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Price in rupiah.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}
