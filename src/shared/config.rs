use std::env;
use std::path::PathBuf;

use crate::portfolio::application::services::portfolio_store::{
    StoreSettings, DEFAULT_CONTENT_KEY, DEFAULT_THEME_KEY,
};
use crate::portfolio::domain::admin_gate::DEFAULT_ADMIN_SECRET;

pub const DEFAULT_DATA_DIR: &str = ".portfolio";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioConfig {
    pub data_dir: PathBuf,
    pub content_key: String,
    pub theme_key: String,
    pub admin_secret: String,
    /// Only honoured by the in-memory store.
    pub storage_quota_bytes: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("PORTFOLIO_ADMIN_SECRET is set but empty")]
    EmptyAdminSecret,

    #[error("PORTFOLIO_STORAGE_QUOTA_BYTES is not a valid byte count: {0}")]
    InvalidQuota(String),
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            content_key: DEFAULT_CONTENT_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            admin_secret: DEFAULT_ADMIN_SECRET.to_string(),
            storage_quota_bytes: None,
        }
    }
}

impl PortfolioConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`), then reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{}", rust_env)).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same rules as [`from_env`](Self::from_env) over an arbitrary source.
    /// Blank values count as unset, except for the admin secret.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let admin_secret = match lookup("PORTFOLIO_ADMIN_SECRET") {
            Some(secret) if secret.trim().is_empty() => return Err(ConfigError::EmptyAdminSecret),
            Some(secret) => secret,
            None => defaults.admin_secret,
        };

        let storage_quota_bytes = non_blank("PORTFOLIO_STORAGE_QUOTA_BYTES")
            .map(|raw| {
                raw.trim()
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidQuota(raw.clone()))
            })
            .transpose()?;

        Ok(Self {
            data_dir: non_blank("PORTFOLIO_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            content_key: non_blank("PORTFOLIO_CONTENT_KEY").unwrap_or(defaults.content_key),
            theme_key: non_blank("PORTFOLIO_THEME_KEY").unwrap_or(defaults.theme_key),
            admin_secret,
            storage_quota_bytes,
        })
    }

    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            content_key: self.content_key.clone(),
            theme_key: self.theme_key.clone(),
            admin_secret: self.admin_secret.clone(),
        }
    }
}
