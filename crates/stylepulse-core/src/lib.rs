//! Shared configuration and domain constants for stylepulse.

mod app_config;
mod config;
pub mod topics;

pub use app_config::{AppConfig, Environment, TwitterCredentials};
pub use config::{load_app_config, load_app_config_from_env};
pub use topics::{
    is_fashion_keyword, search_query, ANALYSIS_WINDOW, FASHION_KEYWORDS, SEARCH_BATCH_SIZE,
    SEARCH_LANGUAGE, TOP_N,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
