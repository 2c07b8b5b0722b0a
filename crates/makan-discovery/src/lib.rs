//! Randomized GoFood merchant discovery.
//!
//! Samples points near a center coordinate, fans out concurrent "near me"
//! listing fetches, normalizes and deduplicates the merchants returned, and
//! exposes sorted views plus a single-merchant profile lookup.

pub mod client;
pub mod discover;
pub mod error;
pub mod geo;
pub mod normalize;
pub mod types;
pub mod views;

pub use client::GoFoodClient;
pub use discover::{merchant_detail, MerchantFinder, DEFAULT_PICK_COUNT, INTEL_PICK_COUNT};
pub use error::DiscoveryError;
pub use geo::Coordinate;
