//! Single movie and actor lookups.

use moviepick_core::types::{ActorProfile, MovieSummary};

use crate::MetadataError;
use crate::provider::{MovieDetails, MovieProvider};
use crate::shape::{self, ImageBase, MISSING_OVERVIEW};
use crate::trailer::resolve_trailer;

/// Movie card for a known id. A missing synopsis is replaced by a placeholder.
pub async fn movie_by_id(
    provider: &dyn MovieProvider,
    images: &ImageBase,
    movie_id: u64,
) -> Result<MovieSummary, MetadataError> {
    let details = provider.movie_details(movie_id).await?;
    let overview = match details.trimmed_overview() {
        "" => MISSING_OVERVIEW.to_string(),
        text => text.to_string(),
    };
    summarize(provider, images, &details, &overview).await
}

/// Fetch credits and trailer for `details` and build the card.
pub(crate) async fn summarize(
    provider: &dyn MovieProvider,
    images: &ImageBase,
    details: &MovieDetails,
    overview: &str,
) -> Result<MovieSummary, MetadataError> {
    let credits = provider.movie_credits(details.id).await?;
    let trailer_url = resolve_trailer(provider, details.id).await;
    Ok(shape::movie_summary(
        details,
        overview,
        &credits,
        trailer_url,
        images,
    ))
}

/// Person detail plus filmography.
///
/// `NotFound` is only returned when the person itself is unknown; a missing
/// filmography is reported as a provider error.
pub async fn actor_profile(
    provider: &dyn MovieProvider,
    images: &ImageBase,
    person_id: u64,
) -> Result<ActorProfile, MetadataError> {
    let person = provider.person(person_id).await?;
    let credits = provider
        .person_movie_credits(person_id)
        .await
        .map_err(|e| match e {
            MetadataError::NotFound => {
                MetadataError::Provider(format!("no movie credits for person {person_id}"))
            }
            other => other,
        })?;
    Ok(shape::actor_profile(person, credits, images))
}
