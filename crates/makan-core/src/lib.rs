use thiserror::Error;

pub mod app_config;
pub mod category;
pub mod config;
pub mod merchant;

pub use app_config::AppConfig;
pub use category::Category;
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_GOFOOD_URL};
pub use merchant::{MenuItem, MerchantDetail, MerchantIntel, MerchantSummary};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
