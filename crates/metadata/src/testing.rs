//! In-memory provider for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::MetadataError;
use crate::provider::{
    MovieCredits, MovieDetails, MovieListing, MovieProvider, Person, PersonCredits, PopularPage,
    VideoList,
};

#[derive(Default)]
pub struct FakeProvider {
    listing: Vec<u64>,
    overviews: Vec<Option<String>>,
    credits: MovieCredits,
    videos: HashMap<Option<String>, VideoList>,
    fail_videos: bool,
    fail_details: bool,
    person: Option<(Person, PersonCredits)>,
    fail_person_credits: bool,
    pub pages: Mutex<Vec<u32>>,
    pub details_calls: AtomicUsize,
    pub credits_calls: AtomicUsize,
    video_languages: Mutex<Vec<Option<String>>>,
}

impl FakeProvider {
    /// Every popular page lists these ids.
    pub fn with_listing(mut self, ids: &[u64]) -> Self {
        self.listing = ids.to_vec();
        self
    }

    /// Overview returned by the n-th details call; the last entry repeats.
    pub fn with_overviews(mut self, overviews: &[Option<&str>]) -> Self {
        self.overviews = overviews.iter().map(|o| o.map(str::to_string)).collect();
        self
    }

    pub fn with_credits(mut self, credits: MovieCredits) -> Self {
        self.credits = credits;
        self
    }

    pub fn with_videos(mut self, language: Option<&str>, videos: VideoList) -> Self {
        self.videos.insert(language.map(str::to_string), videos);
        self
    }

    pub fn failing_videos(mut self) -> Self {
        self.fail_videos = true;
        self
    }

    pub fn failing_details(mut self) -> Self {
        self.fail_details = true;
        self
    }

    pub fn with_person(mut self, person: Person, credits: PersonCredits) -> Self {
        self.person = Some((person, credits));
        self
    }

    pub fn failing_person_credits(mut self) -> Self {
        self.fail_person_credits = true;
        self
    }

    pub fn details_calls(&self) -> usize {
        self.details_calls.load(Ordering::SeqCst)
    }

    pub fn video_languages(&self) -> Vec<Option<String>> {
        self.video_languages.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MovieProvider for FakeProvider {
    fn name(&self) -> &str {
        "fake"
    }

    async fn popular_movies(&self, page: u32) -> Result<PopularPage, MetadataError> {
        self.pages.lock().unwrap().push(page);
        Ok(PopularPage {
            results: self.listing.iter().map(|&id| MovieListing { id }).collect(),
        })
    }

    async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails, MetadataError> {
        let n = self.details_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_details {
            return Err(MetadataError::Provider("TMDB returned 500".into()));
        }
        let overview = self
            .overviews
            .get(n)
            .or(self.overviews.last())
            .cloned()
            .flatten();
        Ok(MovieDetails {
            id: movie_id,
            title: format!("Movie {movie_id}"),
            release_date: Some("2020-01-01".into()),
            runtime: Some(100),
            vote_average: Some(7.0),
            vote_count: Some(10),
            overview,
            backdrop_path: None,
            poster_path: Some("/poster.jpg".into()),
            genres: Vec::new(),
        })
    }

    async fn movie_credits(&self, _movie_id: u64) -> Result<MovieCredits, MetadataError> {
        self.credits_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.credits.clone())
    }

    async fn movie_videos(
        &self,
        _movie_id: u64,
        language: Option<&str>,
    ) -> Result<VideoList, MetadataError> {
        let language = language.map(str::to_string);
        self.video_languages.lock().unwrap().push(language.clone());
        if self.fail_videos {
            return Err(MetadataError::Network("connection reset".into()));
        }
        Ok(self.videos.get(&language).cloned().unwrap_or_default())
    }

    async fn person(&self, _person_id: u64) -> Result<Person, MetadataError> {
        self.person
            .as_ref()
            .map(|(p, _)| p.clone())
            .ok_or(MetadataError::NotFound)
    }

    async fn person_movie_credits(&self, _person_id: u64) -> Result<PersonCredits, MetadataError> {
        if self.fail_person_credits {
            return Err(MetadataError::NotFound);
        }
        Ok(self
            .person
            .as_ref()
            .map(|(_, c)| c.clone())
            .unwrap_or_default())
    }
}
