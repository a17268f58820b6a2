//! Mapping from raw provider records to the frontend response shapes.

use moviepick_core::types::{ActorProfile, ActorRef, FilmCredit, MovieSummary};

use crate::provider::{MovieCredits, MovieDetails, Person, PersonCredits};
use crate::truncate::truncate_overview;

pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/original";
pub const MOVIE_CAST_LIMIT: usize = 6;
pub const FILMOGRAPHY_LIMIT: usize = 30;
pub const UNKNOWN_RELEASE_DATE: &str = "Date inconnue";
pub const MISSING_OVERVIEW: &str = "Aucun résumé disponible";

/// Prefix that turns a provider-relative image path into an absolute URL.
#[derive(Debug, Clone)]
pub struct ImageBase(String);

impl ImageBase {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self(base.trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `None` and empty paths stay `None`.
    pub fn url(&self, path: Option<&str>) -> Option<String> {
        path.filter(|p| !p.is_empty())
            .map(|p| format!("{}{p}", self.0))
    }
}

impl Default for ImageBase {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE)
    }
}

/// Build a movie card. `overview` must already be trimmed; it is truncated here.
pub fn movie_summary(
    details: &MovieDetails,
    overview: &str,
    credits: &MovieCredits,
    trailer_url: Option<String>,
    images: &ImageBase,
) -> MovieSummary {
    MovieSummary {
        id: details.id,
        title: details.title.clone(),
        release_date: details
            .release_date
            .clone()
            .unwrap_or_else(|| UNKNOWN_RELEASE_DATE.to_string()),
        runtime: details.runtime.unwrap_or(0),
        vote_average: details.vote_average.unwrap_or(0.0),
        vote_count: details.vote_count.unwrap_or(0),
        overview: truncate_overview(overview),
        backdrop_path: images.url(details.backdrop_path.as_deref()),
        poster_path: images.url(details.poster_path.as_deref()),
        genres: genre_names(details),
        trailer_url,
        actors: actor_refs(credits, images),
    }
}

pub fn genre_names(details: &MovieDetails) -> Vec<String> {
    details.genres.iter().map(|g| g.name.clone()).collect()
}

/// Leading cast members in billing order.
pub fn actor_refs(credits: &MovieCredits, images: &ImageBase) -> Vec<ActorRef> {
    credits
        .cast
        .iter()
        .take(MOVIE_CAST_LIMIT)
        .map(|actor| ActorRef {
            id: actor.id,
            name: actor.name.clone(),
            character: actor.character.clone(),
            profile_path: images.url(actor.profile_path.as_deref()),
        })
        .collect()
}

/// Cast credits ordered by descending popularity, capped at [`FILMOGRAPHY_LIMIT`].
/// Ties keep provider order.
pub fn filmography(credits: PersonCredits, images: &ImageBase) -> Vec<FilmCredit> {
    let mut movies = credits.cast;
    movies.sort_by(|a, b| {
        b.popularity
            .unwrap_or(0.0)
            .total_cmp(&a.popularity.unwrap_or(0.0))
    });

    movies
        .into_iter()
        .take(FILMOGRAPHY_LIMIT)
        .map(|movie| FilmCredit {
            id: movie.id,
            title: movie.title.unwrap_or_default(),
            character: movie.character,
            release_date: movie.release_date.unwrap_or_default(),
            vote_average: movie.vote_average.unwrap_or(0.0),
            poster_path: images.url(movie.poster_path.as_deref()),
            backdrop_path: images.url(movie.backdrop_path.as_deref()),
            overview: truncate_overview(movie.overview.as_deref().unwrap_or_default()),
        })
        .collect()
}

pub fn actor_profile(person: Person, credits: PersonCredits, images: &ImageBase) -> ActorProfile {
    ActorProfile {
        id: person.id,
        name: person.name,
        biography: person.biography.unwrap_or_default(),
        birthday: person.birthday.unwrap_or_default(),
        place_of_birth: person.place_of_birth.unwrap_or_default(),
        profile_path: images.url(person.profile_path.as_deref()),
        filmography: filmography(credits, images),
    }
}
