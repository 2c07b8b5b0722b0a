//! Projection of raw GoFood records into the served merchant shapes.
//!
//! All projections are pure and lenient: a record without an id is dropped,
//! since it cannot take part in id-keyed deduplication; every other absent
//! upstream field stays absent in the output.

use makan_core::merchant::{MenuItem, MerchantDetail, MerchantIntel, MerchantSummary};
use serde_json::Value;

use crate::types::{CardContent, MerchantCard, MerchantProfile};

/// Projects a listing card into the full summary shape.
#[must_use]
pub fn to_summary(card: &MerchantCard) -> Option<MerchantSummary> {
    let content = card.content.as_ref()?;
    let id = content.id.clone()?;

    Some(MerchantSummary {
        id,
        active: content.active,
        is_open: content.open_status.as_ref().and_then(|s| s.code.clone()),
        address: content.address.clone(),
        phone_number: content.phone_number.clone(),
        price_level: content
            .avg_spend_level
            .as_ref()
            .and_then(|s| s.price_level),
        rating: card.rating.as_ref().and_then(|r| r.text.clone()),
        title: card.title.clone(),
        name: content.brand.as_ref().and_then(|b| b.name.clone()),
        tag: joined_cuisines(content),
        distance_km: content.delivery_status.as_ref().and_then(|d| d.distance),
        location: content.location.clone(),
        eta_delivery_minutes: content
            .delivery_status
            .as_ref()
            .and_then(|d| d.eta.as_ref())
            .and_then(|eta| eta.minutes),
        eta_cooking_minutes: content.food_preparation_expected_time,
    })
}

/// Projects a listing card into the lighter intel shape.
#[must_use]
pub fn to_intel(card: &MerchantCard) -> Option<MerchantIntel> {
    let content = card.content.as_ref()?;
    let id = content.id.clone()?;

    Some(MerchantIntel {
        id,
        active: content.active,
        is_open: content.open_status.as_ref().and_then(|s| s.code.clone()),
        address: content.address.clone(),
        phone_number: content.phone_number.clone(),
        price_level: content
            .avg_spend_level
            .as_ref()
            .and_then(|s| s.price_level),
        rating: card.rating.as_ref().and_then(|r| r.text.clone()),
        title: card.title.clone(),
        name: content.brand.as_ref().and_then(|b| b.name.clone()),
        tag: joined_cuisines(content),
        location: content.location.clone(),
        link: maps_link(&content.location),
    })
}

/// Projects a profile into the detail shape, menu order preserved.
#[must_use]
pub fn to_detail(profile: &MerchantProfile) -> Option<MerchantDetail> {
    let restaurant = profile.restaurant.as_ref()?;
    let id = restaurant.id.clone()?;

    let menu = profile
        .items
        .iter()
        .map(|item| MenuItem {
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            weight: item.weight,
        })
        .collect();

    Some(MerchantDetail {
        id,
        name: restaurant.name.clone(),
        phone_number: restaurant.phone_number.clone(),
        address: restaurant.address.clone(),
        location: restaurant.location.clone(),
        link: restaurant.short_link.clone(),
        eta_cooking_minutes: restaurant.food_preparation_expected_time,
        menu,
    })
}

/// Cuisine codes joined with commas. A cuisine without a code contributes an
/// empty segment; no cuisines at all yields an empty string.
fn joined_cuisines(content: &CardContent) -> String {
    content
        .cuisines
        .iter()
        .map(|cuisine| cuisine.code.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",")
}

/// Google Maps search link for a `"lat,long"` location string. Structured
/// location payloads produce no link.
fn maps_link(location: &Value) -> Option<String> {
    let coords = location.as_str()?;
    Some(format!(
        "https://www.google.com/maps/search/?api=1&query={coords}"
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::MerchantCard;

    fn card_from(value: serde_json::Value) -> MerchantCard {
        serde_json::from_value(value).expect("card decodes")
    }

    fn full_card() -> MerchantCard {
        card_from(json!({
            "title": "Bakmie Jaya, Kejaksan",
            "rating": { "text": "4.6" },
            "content": {
                "id": "abc-123",
                "active": true,
                "open_status": { "code": "OPEN" },
                "address": "Jl. Siliwangi 12",
                "phone_number": "+62231234567",
                "avg_spend_level": { "price_level": 3 },
                "brand": { "name": "Bakmie Jaya" },
                "cuisines": [ { "code": "BAKMIE" }, { "code": "CHINESE" } ],
                "delivery_status": { "distance": 1.4, "eta": { "minutes": 25 } },
                "location": "-6.75,108.51",
                "food_preparation_expected_time": 10
            }
        }))
    }

    #[test]
    fn summary_maps_every_field() {
        let summary = to_summary(&full_card()).expect("summary");
        assert_eq!(summary.id, "abc-123");
        assert_eq!(summary.active, Some(true));
        assert_eq!(summary.is_open.as_deref(), Some("OPEN"));
        assert_eq!(summary.address.as_deref(), Some("Jl. Siliwangi 12"));
        assert_eq!(summary.phone_number.as_deref(), Some("+62231234567"));
        assert_eq!(summary.price_level, Some(3));
        assert_eq!(summary.rating.as_deref(), Some("4.6"));
        assert_eq!(summary.title.as_deref(), Some("Bakmie Jaya, Kejaksan"));
        assert_eq!(summary.name.as_deref(), Some("Bakmie Jaya"));
        assert_eq!(summary.tag, "BAKMIE,CHINESE");
        assert_eq!(summary.distance_km, Some(1.4));
        assert_eq!(summary.location, json!("-6.75,108.51"));
        assert_eq!(summary.eta_delivery_minutes, Some(25));
        assert_eq!(summary.eta_cooking_minutes, Some(10));
    }

    #[test]
    fn summary_requires_content_id() {
        assert!(to_summary(&card_from(json!({ "title": "No content" }))).is_none());
        assert!(to_summary(&card_from(json!({ "content": {} }))).is_none());
    }

    #[test]
    fn summary_tolerates_bare_content() {
        let summary =
            to_summary(&card_from(json!({ "content": { "id": "bare" } }))).expect("summary");
        assert_eq!(summary.id, "bare");
        assert!(summary.active.is_none());
        assert!(summary.is_open.is_none());
        assert!(summary.price_level.is_none());
        assert!(summary.eta_delivery_minutes.is_none());
        assert_eq!(summary.tag, "");
        assert!(summary.location.is_null());
    }

    #[test]
    fn cuisine_without_code_joins_as_empty_segment() {
        let summary = to_summary(&card_from(json!({
            "content": {
                "id": "abc",
                "cuisines": [ { "code": "SATE" }, {} ]
            }
        })))
        .expect("summary");
        assert_eq!(summary.tag, "SATE,");
    }

    #[test]
    fn intel_derives_maps_link_from_string_location() {
        let intel = to_intel(&full_card()).expect("intel");
        assert_eq!(intel.id, "abc-123");
        assert_eq!(intel.tag, "BAKMIE,CHINESE");
        assert_eq!(
            intel.link.as_deref(),
            Some("https://www.google.com/maps/search/?api=1&query=-6.75,108.51")
        );
    }

    #[test]
    fn intel_skips_link_for_structured_location() {
        let intel = to_intel(&card_from(json!({
            "content": {
                "id": "abc",
                "location": { "latitude": -6.75, "longitude": 108.51 }
            }
        })))
        .expect("intel");
        assert!(intel.link.is_none());
        assert_eq!(
            intel.location,
            json!({ "latitude": -6.75, "longitude": 108.51 })
        );
    }

    #[test]
    fn detail_maps_profile_and_keeps_menu_order() {
        let profile: MerchantProfile = serde_json::from_value(json!({
            "restaurant": {
                "id": "abc-123",
                "name": "Bakmie Jaya",
                "phone_number": "+62231234567",
                "address": "Jl. Siliwangi 12",
                "location": "-6.75,108.51",
                "short_link": "https://gofd.co/xyz",
                "food_preparation_expected_time": 10
            },
            "items": [
                { "name": "Bakmie Ayam", "price": 25000, "image": "https://img/1.jpg", "weight": 400 },
                { "name": "Es Teh", "price": 8000 }
            ]
        }))
        .expect("profile decodes");

        let detail = to_detail(&profile).expect("detail");
        assert_eq!(detail.id, "abc-123");
        assert_eq!(detail.name.as_deref(), Some("Bakmie Jaya"));
        assert_eq!(detail.link.as_deref(), Some("https://gofd.co/xyz"));
        assert_eq!(detail.eta_cooking_minutes, Some(10));
        assert_eq!(detail.menu.len(), 2);
        assert_eq!(detail.menu[0].name.as_deref(), Some("Bakmie Ayam"));
        assert_eq!(detail.menu[0].price, Some(25_000));
        assert_eq!(detail.menu[0].weight, Some(400));
        assert_eq!(detail.menu[1].name.as_deref(), Some("Es Teh"));
        assert!(detail.menu[1].image.is_none());
    }

    #[test]
    fn detail_requires_restaurant_id() {
        let empty: MerchantProfile = serde_json::from_str("{}").expect("decode");
        assert!(to_detail(&empty).is_none());

        let no_id: MerchantProfile =
            serde_json::from_value(json!({ "restaurant": { "name": "Anon" } })).expect("decode");
        assert!(to_detail(&no_id).is_none());
    }
}
