//! Random movie suggestion.
//!
//! Samples a random popular page and a random entry on it, and keeps the
//! first candidate whose synopsis is not blank. Candidates without a synopsis
//! are retried up to [`MAX_ATTEMPTS`] times.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use moviepick_core::types::MovieSummary;

use crate::MetadataError;
use crate::lookup::summarize;
use crate::provider::{MovieDetails, MovieProvider};
use crate::shape::ImageBase;

pub const MAX_ATTEMPTS: u32 = 20;
/// Pages are drawn from `1..=MAX_PAGE`.
pub const MAX_PAGE: u32 = 10;

#[derive(Debug)]
enum SelectionState {
    Sampling,
    Evaluating(u64),
    Accepted(Box<MovieDetails>),
    Exhausted,
}

pub struct RandomMovieSelector<'a> {
    provider: &'a dyn MovieProvider,
    images: &'a ImageBase,
    max_attempts: u32,
}

impl<'a> RandomMovieSelector<'a> {
    pub fn new(provider: &'a dyn MovieProvider, images: &'a ImageBase) -> Self {
        Self {
            provider,
            images,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Run the selection. Provider errors abort immediately; an empty listing
    /// is [`MetadataError::EmptyListing`] and running out of attempts is
    /// [`MetadataError::NoSynopsis`].
    pub async fn select<R: Rng + Send>(&self, rng: &mut R) -> Result<MovieSummary, MetadataError> {
        let mut attempts = 0;
        let mut state = SelectionState::Sampling;

        loop {
            state = match state {
                SelectionState::Sampling => {
                    let page = rng.gen_range(1..=MAX_PAGE);
                    let listing = self.provider.popular_movies(page).await?;
                    let candidate = listing
                        .results
                        .choose(rng)
                        .ok_or(MetadataError::EmptyListing)?;
                    SelectionState::Evaluating(candidate.id)
                }
                SelectionState::Evaluating(movie_id) => {
                    let details = self.provider.movie_details(movie_id).await?;
                    if !details.trimmed_overview().is_empty() {
                        SelectionState::Accepted(Box::new(details))
                    } else {
                        attempts += 1;
                        debug!(movie_id, attempts, "candidate has no synopsis");
                        if attempts < self.max_attempts {
                            SelectionState::Sampling
                        } else {
                            SelectionState::Exhausted
                        }
                    }
                }
                SelectionState::Accepted(details) => {
                    debug!(movie_id = details.id, attempts, "candidate accepted");
                    let overview = details.trimmed_overview();
                    return summarize(self.provider, self.images, &details, overview).await;
                }
                SelectionState::Exhausted => {
                    warn!(attempts, "no movie with a synopsis found");
                    return Err(MetadataError::NoSynopsis { attempts });
                }
            };
        }
    }
}
