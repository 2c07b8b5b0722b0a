//! HTTP client for the GoFood public discovery API.
//!
//! Listing calls deliberately trade correctness for availability: any
//! transport, status, or decode failure is logged and collapsed into an
//! empty page so a single bad sample point cannot fail a whole aggregation.
//! Profile calls collapse failures into `None` and leave interpretation to
//! the caller.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use uuid::Uuid;

use crate::error::DiscoveryError;
use crate::geo::Coordinate;
use crate::types::{ListingResponse, MerchantCard, MerchantProfile};

/// Client for the GoFood restaurant discovery API.
///
/// `base_url` is the listing endpoint; profile lookups append
/// `/{id}/profile`. Point it at a mock server in tests.
#[derive(Debug, Clone)]
pub struct GoFoodClient {
    client: Client,
    base_url: String,
}

impl GoFoodClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, DiscoveryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches one page of "near me" merchant cards around a point.
    ///
    /// Failures are logged at warn and yield an empty page.
    pub async fn fetch_listing(&self, point: Coordinate, page: u32) -> Vec<MerchantCard> {
        match self.try_fetch_listing(point, page).await {
            Ok(cards) => cards,
            Err(error) => {
                tracing::warn!(
                    latitude = point.latitude,
                    longitude = point.longitude,
                    page,
                    %error,
                    "listing fetch failed, treating page as empty"
                );
                Vec::new()
            }
        }
    }

    async fn try_fetch_listing(
        &self,
        point: Coordinate,
        page: u32,
    ) -> Result<Vec<MerchantCard>, DiscoveryError> {
        let response = self
            .client
            .get(&self.base_url)
            .header(
                "x-location",
                format!("{}, {}", point.latitude, point.longitude),
            )
            .query(&[
                ("page", page.to_string()),
                ("collection", "NEAR_ME".to_string()),
                ("search_id", Uuid::new_v4().to_string()),
                ("date", Utc::now().timestamp_millis().to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let listing: ListingResponse =
            serde_json::from_str(&body).map_err(|e| DiscoveryError::Deserialize {
                context: format!("listing(page={page})"),
                source: e,
            })?;
        Ok(listing.data.cards)
    }

    /// Fetches a merchant's profile, or `None` when the merchant does not
    /// exist upstream or the call fails.
    pub async fn fetch_profile(&self, id: &str) -> Option<MerchantProfile> {
        match self.try_fetch_profile(id).await {
            Ok(profile) => Some(profile),
            Err(error) => {
                tracing::debug!(merchant_id = id, %error, "profile fetch failed");
                None
            }
        }
    }

    async fn try_fetch_profile(&self, id: &str) -> Result<MerchantProfile, DiscoveryError> {
        let url = format!("{}/{id}/profile", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("date", Utc::now().timestamp_millis().to_string())])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| DiscoveryError::Deserialize {
            context: format!("profile(id={id})"),
            source: e,
        })
    }
}
