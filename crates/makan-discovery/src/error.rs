use thiserror::Error;

/// Errors surfaced by the GoFood discovery pipeline.
///
/// Listing fetches never return these: the client swallows per-point
/// failures so one bad sample point cannot fail an aggregation. They are
/// produced by the fallible request path internally and by profile lookups.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// upstream status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The upstream has no profile for the requested merchant id.
    #[error("No merchant with id:{id}")]
    MerchantNotFound { id: String },

    /// The profile decoded but carried no usable restaurant record.
    #[error("malformed profile for merchant {id}")]
    MalformedProfile { id: String },
}
