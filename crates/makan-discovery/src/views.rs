//! Pure filter/sort views over fetched merchant lists.
//!
//! Each view consumes the list a fetch returned and keeps only the rows its
//! ordering criterion makes sense for. Zero is treated like absent for the
//! filtered field: a zero-minute eta or a zero price level carries no
//! ranking information.

use std::cmp::Reverse;

use makan_core::{MerchantIntel, MerchantSummary};

/// Merchants with a known delivery eta, fastest first.
#[must_use]
pub fn fastest(mut merchants: Vec<MerchantSummary>) -> Vec<MerchantSummary> {
    merchants.retain(|m| m.eta_delivery_minutes.is_some_and(|eta| eta > 0));
    merchants.sort_by_key(|m| m.eta_delivery_minutes);
    merchants
}

/// Merchants with a known price level, cheapest first; ties broken by
/// delivery eta, with unknown etas last.
#[must_use]
pub fn cheapest(mut merchants: Vec<MerchantSummary>) -> Vec<MerchantSummary> {
    merchants.retain(|m| m.price_level.is_some_and(|level| level > 0));
    merchants.sort_by_key(|m| (m.price_level, eta_or_max(m)));
    merchants
}

/// Upper-tier merchants (price level above 2), priciest first; ties broken
/// by delivery eta, with unknown etas last.
#[must_use]
pub fn priciest(mut merchants: Vec<MerchantSummary>) -> Vec<MerchantSummary> {
    merchants.retain(|m| m.price_level.is_some_and(|level| level > 2));
    merchants.sort_by_key(|m| (Reverse(m.price_level), eta_or_max(m)));
    merchants
}

/// Upper-tier intel rows (price level above 2), priciest first. No
/// tie-break; the stable sort preserves input order within a level.
#[must_use]
pub fn intel_picks(mut merchants: Vec<MerchantIntel>) -> Vec<MerchantIntel> {
    merchants.retain(|m| m.price_level.is_some_and(|level| level > 2));
    merchants.sort_by_key(|m| Reverse(m.price_level));
    merchants
}

fn eta_or_max(merchant: &MerchantSummary) -> u32 {
    merchant.eta_delivery_minutes.unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn summary(id: &str, price_level: Option<u8>, eta: Option<u32>) -> MerchantSummary {
        MerchantSummary {
            id: id.to_string(),
            active: Some(true),
            is_open: None,
            address: None,
            phone_number: None,
            price_level,
            rating: None,
            title: None,
            name: None,
            tag: String::new(),
            distance_km: None,
            location: Value::Null,
            eta_delivery_minutes: eta,
            eta_cooking_minutes: None,
        }
    }

    fn intel(id: &str, price_level: Option<u8>) -> MerchantIntel {
        MerchantIntel {
            id: id.to_string(),
            active: Some(true),
            is_open: None,
            address: None,
            phone_number: None,
            price_level,
            rating: None,
            title: None,
            name: None,
            tag: String::new(),
            location: Value::Null,
            link: None,
        }
    }

    fn ids(merchants: &[MerchantSummary]) -> Vec<&str> {
        merchants.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn fastest_sorts_ascending_and_drops_unknown_eta() {
        let sorted = fastest(vec![
            summary("slow", None, Some(40)),
            summary("none", Some(2), None),
            summary("zero", Some(2), Some(0)),
            summary("quick", Some(2), Some(10)),
            summary("mid", Some(2), Some(25)),
        ]);
        assert_eq!(ids(&sorted), vec!["quick", "mid", "slow"]);
    }

    #[test]
    fn cheapest_orders_by_price_then_eta() {
        let sorted = cheapest(vec![
            summary("pricey", Some(3), Some(10)),
            summary("cheap-slow", Some(1), Some(30)),
            summary("cheap-fast", Some(1), Some(5)),
            summary("cheap-no-eta", Some(1), None),
            summary("unpriced", None, Some(5)),
            summary("zero-price", Some(0), Some(5)),
        ]);
        assert_eq!(
            ids(&sorted),
            vec!["cheap-fast", "cheap-slow", "cheap-no-eta", "pricey"]
        );
    }

    #[test]
    fn priciest_keeps_upper_tier_descending() {
        let sorted = priciest(vec![
            summary("mid", Some(2), Some(10)),
            summary("high-slow", Some(4), Some(35)),
            summary("top", Some(4), Some(15)),
            summary("upper", Some(3), Some(20)),
        ]);
        assert_eq!(ids(&sorted), vec!["top", "high-slow", "upper"]);
    }

    #[test]
    fn intel_picks_sorts_descending_and_is_stable() {
        let sorted = intel_picks(vec![
            intel("first-four", Some(4)),
            intel("cheap", Some(1)),
            intel("three", Some(3)),
            intel("second-four", Some(4)),
            intel("unpriced", None),
        ]);
        let ids: Vec<&str> = sorted.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["first-four", "second-four", "three"]);
    }
}
