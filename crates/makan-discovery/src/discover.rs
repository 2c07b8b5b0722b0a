//! Randomized multi-point merchant aggregation.

use std::collections::HashMap;

use futures::future::join_all;
use rand::seq::SliceRandom;

use makan_core::{Category, MerchantDetail, MerchantIntel, MerchantSummary};

use crate::client::GoFoodClient;
use crate::error::DiscoveryError;
use crate::geo::{self, Coordinate};
use crate::normalize;
use crate::types::MerchantCard;

/// Merchants returned per summary aggregation.
pub const DEFAULT_PICK_COUNT: usize = 20;
/// Merchants returned per intel aggregation.
pub const INTEL_PICK_COUNT: usize = 50;

/// One discovery pass around a center coordinate.
///
/// Construction samples the nearby points; each fetch fans out one listing
/// request per point, merges the results, and returns an owned list the
/// caller keeps. Nothing is cached between calls.
pub struct MerchantFinder<'a> {
    client: &'a GoFoodClient,
    points: Vec<Coordinate>,
    category: Option<Category>,
}

impl<'a> MerchantFinder<'a> {
    #[must_use]
    pub fn new(
        client: &'a GoFoodClient,
        center: Coordinate,
        category: Option<Category>,
        sample_count: usize,
    ) -> Self {
        Self {
            client,
            points: geo::generate_points(center, sample_count),
            category,
        }
    }

    /// The sampled points for this pass.
    #[must_use]
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Fetches, filters, and deduplicates merchant summaries, then randomly
    /// keeps at most `pick_count` of them.
    pub async fn fetch_summaries(&self, pick_count: usize) -> Vec<MerchantSummary> {
        let cards = self.fetch_all_cards().await;
        let merchants: Vec<MerchantSummary> = cards
            .iter()
            .filter_map(normalize::to_summary)
            .filter(|merchant| self.admits(&merchant.tag))
            .collect();
        let distinct = dedupe_last_by_id(merchants, |m| m.id.as_str());
        tracing::debug!(
            cards = cards.len(),
            distinct = distinct.len(),
            pick_count,
            "aggregated merchant summaries"
        );
        pick_random(distinct, pick_count)
    }

    /// Same pipeline as [`MerchantFinder::fetch_summaries`], but projecting
    /// into the lighter intel shape.
    pub async fn fetch_intel(&self, pick_count: usize) -> Vec<MerchantIntel> {
        let cards = self.fetch_all_cards().await;
        let merchants: Vec<MerchantIntel> = cards
            .iter()
            .filter_map(normalize::to_intel)
            .filter(|merchant| self.admits(&merchant.tag))
            .collect();
        let distinct = dedupe_last_by_id(merchants, |m| m.id.as_str());
        tracing::debug!(
            cards = cards.len(),
            distinct = distinct.len(),
            pick_count,
            "aggregated merchant intel"
        );
        pick_random(distinct, pick_count)
    }

    /// Issues the per-point listing fetches concurrently and flattens the
    /// pages in point order. Failed points contribute empty pages.
    async fn fetch_all_cards(&self) -> Vec<MerchantCard> {
        let pages = join_all(
            self.points
                .iter()
                .map(|point| self.client.fetch_listing(*point, 0)),
        )
        .await;
        pages.into_iter().flatten().collect()
    }

    fn admits(&self, tag: &str) -> bool {
        self.category.is_none_or(|category| category.admits(tag))
    }
}

/// Looks up one merchant's profile and menu.
///
/// # Errors
///
/// - [`DiscoveryError::MerchantNotFound`] when the upstream has no profile
///   for `id`. The client collapses fetch failures into the same sentinel.
/// - [`DiscoveryError::MalformedProfile`] when a profile decodes but carries
///   no usable restaurant record.
pub async fn merchant_detail(
    client: &GoFoodClient,
    id: &str,
) -> Result<MerchantDetail, DiscoveryError> {
    let Some(profile) = client.fetch_profile(id).await else {
        return Err(DiscoveryError::MerchantNotFound { id: id.to_string() });
    };

    normalize::to_detail(&profile).ok_or_else(|| DiscoveryError::MalformedProfile {
        id: id.to_string(),
    })
}

/// Keeps one record per id. Insertion order feeds a map keyed by id, so the
/// last-seen record for an id wins; output order is unspecified.
fn dedupe_last_by_id<T>(items: Vec<T>, id_of: impl Fn(&T) -> &str) -> Vec<T> {
    let mut by_id: HashMap<String, T> = HashMap::with_capacity(items.len());
    for item in items {
        by_id.insert(id_of(&item).to_string(), item);
    }
    by_id.into_values().collect()
}

/// Uniform random subsample without replacement. Lists at or under the limit
/// come back whole; larger lists are cut to exactly the `pick_count` elements
/// the shuffle selected, in shuffle order.
fn pick_random<T>(mut items: Vec<T>, pick_count: usize) -> Vec<T> {
    if items.len() <= pick_count {
        return items;
    }
    let mut rng = rand::rng();
    // partial_shuffle gathers the selected elements at the tail of the slice.
    items.partial_shuffle(&mut rng, pick_count);
    items.split_off(items.len() - pick_count)
}
