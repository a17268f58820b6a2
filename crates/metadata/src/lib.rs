pub mod lookup;
pub mod provider;
pub mod selector;
pub mod shape;
pub mod tmdb;
pub mod trailer;
pub mod truncate;

#[cfg(test)]
pub(crate) mod testing;

use moviepick_core::error::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("provider error: {0}")]
    Provider(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("provider returned 404")]
    NotFound,
    #[error("popular listing returned no results")]
    EmptyListing,
    #[error("no movie with a synopsis after {attempts} attempts")]
    NoSynopsis { attempts: u32 },
}

/// Default mapping onto API errors: selector outcomes are 404, everything else
/// is 500. Handlers override `NotFound` where an unknown id means a 404.
impl From<MetadataError> for ApiError {
    fn from(e: MetadataError) -> Self {
        match e {
            MetadataError::EmptyListing => ApiError::NotFound("Aucun film trouvé".into()),
            MetadataError::NoSynopsis { .. } => ApiError::NotFound(
                "Aucun film avec résumé trouvé après plusieurs tentatives".into(),
            ),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
