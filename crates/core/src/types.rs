//! Response shapes served to the frontend.
//!
//! Every image field holds either `None` or an absolute URL; relative
//! provider paths never leave the metadata crate.

use serde::Serialize;

/// A movie as shown on the suggestion card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub release_date: String,
    pub runtime: u32,
    pub vote_average: f64,
    pub vote_count: u64,
    pub overview: String,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    pub genres: Vec<String>,
    pub trailer_url: Option<String>,
    pub actors: Vec<ActorRef>,
}

/// Cast member listed on a movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorRef {
    pub id: u64,
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

/// Person detail with a popularity-ordered filmography.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorProfile {
    pub id: u64,
    pub name: String,
    pub biography: String,
    pub birthday: String,
    pub place_of_birth: String,
    pub profile_path: Option<String>,
    pub filmography: Vec<FilmCredit>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmCredit {
    pub id: u64,
    pub title: String,
    pub character: Option<String>,
    pub release_date: String,
    pub vote_average: f64,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: String,
}
