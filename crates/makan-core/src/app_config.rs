use std::net::SocketAddr;

/// Runtime configuration resolved from environment variables.
///
/// Every field has a default, so the service boots without a `.env` file.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the upstream restaurant listing endpoint. Profile lookups
    /// append `/{id}/profile` to this.
    pub gofood_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// How many nearby points to sample per discovery request.
    pub sample_points: usize,
}
