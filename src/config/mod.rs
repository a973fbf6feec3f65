use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const RAPIDAPI_STOCK_HOST: &str = "real-time-finance-data.p.rapidapi.com";
pub const RAPIDAPI_NEWS_HOST: &str = "real-time-news-data.p.rapidapi.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

/// Process configuration, built once at startup and threaded through
/// `AppState`. Nothing reads the environment after this point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub auth: AuthConfig,
    pub rapidapi: RapidApiConfig,
}

/// External identity provider (Supabase-style auth service).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RapidApiConfig {
    pub key: String,
    pub news_key: String,
    pub stock_host: String,
    pub news_host: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("PORT", v))?,
            Err(_) => 5001,
        };

        Ok(Self {
            port,
            database_url: require("DATABASE_URL")?,
            auth: AuthConfig {
                url: require("SUPABASE_URL")?,
                anon_key: require("SUPABASE_ANON_KEY")?,
            },
            rapidapi: RapidApiConfig {
                key: require("RAPIDAPI_KEY")?,
                news_key: require("RAPIDAPI_NEWS_KEY")?,
                stock_host: RAPIDAPI_STOCK_HOST.to_string(),
                news_host: RAPIDAPI_NEWS_HOST.to_string(),
            },
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        // Placeholder values from a copied .env template count as missing
        Ok(v) if !v.is_empty() && !v.starts_with("YOUR_") => Ok(v),
        _ => Err(ConfigError::Missing(name)),
    }
}
