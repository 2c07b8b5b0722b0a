//! GoFood API response types for the public restaurant listing and profile
//! endpoints.
//!
//! ## Observed shape from the live API
//!
//! ### Listing envelope
//! The listing endpoint wraps its card array twice: the body is
//! `{"data": {"cards": [...]}}`. Both layers may be absent on degraded
//! responses, so they default to empty rather than failing the decode.
//!
//! ### Card nesting
//! Almost everything interesting lives under `content`; `title` and
//! `rating` sit beside it at the card level. None of the nested objects is
//! guaranteed: cards for closed or newly onboarded merchants drop
//! `delivery_status`, `avg_spend_level`, or `brand` entirely. Every nested
//! layer is therefore `Option`al and projection happens in `normalize`.
//!
//! ### `location`
//! Usually a `"lat,long"` string but occasionally a structured object. It is
//! carried as raw [`serde_json::Value`] and passed through untouched.
//!
//! ### Profile
//! `GET {listing}/{id}/profile` returns `restaurant` plus a flat `items`
//! menu array. `items` is absent for merchants without a published menu.

use serde::Deserialize;
use serde_json::Value;

/// Top-level body of the listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListingResponse {
    #[serde(default)]
    pub data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub cards: Vec<MerchantCard>,
}

/// One merchant card from a listing page.
#[derive(Debug, Deserialize)]
pub struct MerchantCard {
    pub title: Option<String>,
    pub rating: Option<CardRating>,
    pub content: Option<CardContent>,
}

#[derive(Debug, Deserialize)]
pub struct CardRating {
    /// Display rating, e.g. `"4.6"`.
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CardContent {
    pub id: Option<String>,
    pub active: Option<bool>,
    pub open_status: Option<OpenStatus>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub avg_spend_level: Option<SpendLevel>,
    pub brand: Option<CardBrand>,
    #[serde(default)]
    pub cuisines: Vec<Cuisine>,
    pub delivery_status: Option<DeliveryStatus>,
    #[serde(default)]
    pub location: Value,
    pub food_preparation_expected_time: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct OpenStatus {
    /// e.g. `"OPEN"` or `"CLOSED"`.
    pub code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SpendLevel {
    pub price_level: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct CardBrand {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Cuisine {
    /// Cuisine code, e.g. `"BAKMIE"` or `"COFFEE_SHOP"`.
    pub code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeliveryStatus {
    /// Great-circle distance from the queried point in kilometers.
    pub distance: Option<f64>,
    pub eta: Option<DeliveryEta>,
}

#[derive(Debug, Deserialize)]
pub struct DeliveryEta {
    pub minutes: Option<u32>,
}

/// Body of the merchant profile endpoint.
#[derive(Debug, Deserialize)]
pub struct MerchantProfile {
    pub restaurant: Option<ProfileRestaurant>,
    #[serde(default)]
    pub items: Vec<ProfileItem>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileRestaurant {
    pub id: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub location: Value,
    pub short_link: Option<String>,
    pub food_preparation_expected_time: Option<u32>,
}

/// One menu entry from a profile.
#[derive(Debug, Deserialize)]
pub struct ProfileItem {
    pub name: Option<String>,
    /// Price in rupiah.
    pub price: Option<i64>,
    pub image: Option<String>,
    pub weight: Option<i64>,
}
