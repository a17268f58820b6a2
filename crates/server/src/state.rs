use std::sync::Arc;

use axum::http::HeaderValue;
use moviepick_metadata::MetadataError;
use moviepick_metadata::provider::MovieProvider;
use moviepick_metadata::shape::ImageBase;
use moviepick_metadata::tmdb::TmdbClient;

use crate::config::AppConfig;

/// Shared application state passed to all handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MovieProvider>,
    pub images: Arc<ImageBase>,
    pub frontend_origin: HeaderValue,
}

impl AppState {
    /// Wire a TMDB client from the loaded configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, MetadataError> {
        let client = TmdbClient::new(config.tmdb())?;
        Ok(Self {
            provider: Arc::new(client),
            images: Arc::new(ImageBase::new(config.image_base_url.clone())),
            frontend_origin: config.frontend_origin.clone(),
        })
    }
}
