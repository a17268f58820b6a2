use serde::Deserialize;

use crate::MetadataError;

/// Source of raw movie and person records.
///
/// All lookups use the provider's configured language unless an override is
/// passed explicitly.
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    fn name(&self) -> &str;

    /// One page of the popular-movies listing (pages start at 1).
    async fn popular_movies(&self, page: u32) -> Result<PopularPage, MetadataError>;

    async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails, MetadataError>;

    async fn movie_credits(&self, movie_id: u64) -> Result<MovieCredits, MetadataError>;

    /// Videos attached to a movie, optionally in a language other than the default.
    async fn movie_videos(
        &self,
        movie_id: u64,
        language: Option<&str>,
    ) -> Result<VideoList, MetadataError>;

    async fn person(&self, person_id: u64) -> Result<Person, MetadataError>;

    async fn person_movie_credits(&self, person_id: u64) -> Result<PersonCredits, MetadataError>;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PopularPage {
    #[serde(default)]
    pub results: Vec<MovieListing>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieListing {
    pub id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    pub overview: Option<String>,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl MovieDetails {
    /// Synopsis with surrounding whitespace removed; empty when absent.
    pub fn trimmed_overview(&self) -> &str {
        self.overview.as_deref().unwrap_or_default().trim()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieCredits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub biography: Option<String>,
    pub birthday: Option<String>,
    pub place_of_birth: Option<String>,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonCredits {
    #[serde(default)]
    pub cast: Vec<PersonCastCredit>,
}

/// A movie the person appeared in.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonCastCredit {
    pub id: u64,
    pub title: Option<String>,
    pub character: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: Option<String>,
    pub popularity: Option<f64>,
}
