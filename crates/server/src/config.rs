use std::time::Duration;

use axum::http::HeaderValue;
use moviepick_metadata::shape::DEFAULT_IMAGE_BASE;
use moviepick_metadata::tmdb::{DEFAULT_BASE_URL, DEFAULT_LANGUAGE, TmdbConfig};
use thiserror::Error;

pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_BIND: &str = "0.0.0.0:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Server configuration, built once at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub image_base_url: String,
    pub language: String,
    pub request_timeout: Duration,
    pub frontend_origin: HeaderValue,
    pub bind_addr: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var               | Default                               |
    /// |-----------------------|---------------------------------------|
    /// | `TMDB_API_KEY`        | required                              |
    /// | `TMDB_BASE_URL`       | `https://api.themoviedb.org/3`        |
    /// | `TMDB_IMAGE_BASE_URL` | `https://image.tmdb.org/t/p/original` |
    /// | `TMDB_LANGUAGE`       | `fr-FR`                               |
    /// | `TMDB_TIMEOUT_SECS`   | `10`                                  |
    /// | `FRONTEND_ORIGIN`     | `http://localhost:3000`               |
    /// | `MOVIEPICK_BIND`      | `0.0.0.0:8000`                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let tmdb_api_key = var("TMDB_API_KEY").ok_or(ConfigError::Missing("TMDB_API_KEY"))?;

        let tmdb_base_url = var("TMDB_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let image_base_url =
            var("TMDB_IMAGE_BASE_URL").unwrap_or_else(|| DEFAULT_IMAGE_BASE.to_string());
        let language = var("TMDB_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let timeout_secs: u64 = match var("TMDB_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::Invalid {
                name: "TMDB_TIMEOUT_SECS",
                reason: format!("{raw:?}: {e}"),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "TMDB_TIMEOUT_SECS",
                reason: "must be greater than zero".into(),
            });
        }

        let origin = var("FRONTEND_ORIGIN").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGIN.to_string());
        let frontend_origin = HeaderValue::from_str(&origin).map_err(|e| ConfigError::Invalid {
            name: "FRONTEND_ORIGIN",
            reason: format!("{origin:?}: {e}"),
        })?;

        let bind_addr = var("MOVIEPICK_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());

        Ok(Self {
            tmdb_api_key,
            tmdb_base_url,
            image_base_url,
            language,
            request_timeout: Duration::from_secs(timeout_secs),
            frontend_origin,
            bind_addr,
        })
    }

    pub fn tmdb(&self) -> TmdbConfig {
        TmdbConfig {
            api_key: self.tmdb_api_key.clone(),
            base_url: self.tmdb_base_url.clone(),
            language: self.language.clone(),
            timeout: self.request_timeout,
        }
    }
}
