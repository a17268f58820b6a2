//! TMDB (The Movie Database) provider client.
//!
//! Uses TMDB API v3: https://developer.themoviedb.org/docs

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::MetadataError;
use crate::provider::{
    MovieCredits, MovieDetails, MovieProvider, Person, PersonCredits, PopularPage, VideoList,
};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "fr-FR";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`TmdbClient`].
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub language: String,
    pub timeout: Duration,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct TmdbClient {
    config: TmdbConfig,
    client: reqwest::Client,
}

impl TmdbClient {
    pub fn new(mut config: TmdbConfig) -> Result<Self, MetadataError> {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MetadataError::Network(format!("build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    /// GET `path` with the API key and language merged into `params`.
    /// Entries in `params` override the defaults.
    async fn get_json(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, MetadataError> {
        let mut all_params = vec![
            ("api_key", self.config.api_key.as_str()),
            ("language", self.config.language.as_str()),
        ];
        for &(key, value) in params {
            match all_params.iter_mut().find(|entry| entry.0 == key) {
                Some(existing) => existing.1 = value,
                None => all_params.push((key, value)),
            }
        }

        let url = format!("{}{path}", self.config.base_url);
        debug!(path = %path, "TMDB request");

        let resp = self
            .client
            .get(&url)
            .query(&all_params)
            .send()
            .await
            .map_err(|e| MetadataError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MetadataError::NotFound);
        }

        if !resp.status().is_success() {
            return Err(MetadataError::Provider(format!(
                "TMDB returned {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| MetadataError::Provider(format!("parse JSON: {e}")))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, MetadataError> {
        let data = self.get_json(path, params).await?;
        serde_json::from_value(data)
            .map_err(|e| MetadataError::Provider(format!("unexpected response for {path}: {e}")))
    }
}

#[async_trait::async_trait]
impl MovieProvider for TmdbClient {
    fn name(&self) -> &str {
        "tmdb"
    }

    async fn popular_movies(&self, page: u32) -> Result<PopularPage, MetadataError> {
        let page = page.to_string();
        self.get("/movie/popular", &[("page", page.as_str())]).await
    }

    async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails, MetadataError> {
        self.get(&format!("/movie/{movie_id}"), &[]).await
    }

    async fn movie_credits(&self, movie_id: u64) -> Result<MovieCredits, MetadataError> {
        self.get(&format!("/movie/{movie_id}/credits"), &[]).await
    }

    async fn movie_videos(
        &self,
        movie_id: u64,
        language: Option<&str>,
    ) -> Result<VideoList, MetadataError> {
        let path = format!("/movie/{movie_id}/videos");
        match language {
            Some(lang) => self.get(&path, &[("language", lang)]).await,
            None => self.get(&path, &[]).await,
        }
    }

    async fn person(&self, person_id: u64) -> Result<Person, MetadataError> {
        self.get(&format!("/person/{person_id}"), &[]).await
    }

    async fn person_movie_credits(&self, person_id: u64) -> Result<PersonCredits, MetadataError> {
        self.get(&format!("/person/{person_id}/movie_credits"), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TmdbClient {
        let mut config = TmdbConfig::new("test-key");
        config.base_url = format!("{}/", server.uri());
        TmdbClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn popular_movies_sends_key_language_and_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .and(query_param("api_key", "test-key"))
            .and(query_param("language", "fr-FR"))
            .and(query_param("page", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "page": 7,
                "results": [
                    { "id": 550, "title": "Fight Club" },
                    { "id": 680, "title": "Pulp Fiction" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = client_for(&server).popular_movies(7).await.unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].id, 680);
    }

    #[tokio::test]
    async fn videos_language_override_replaces_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/550/videos"))
            .and(query_param("language", "en-US"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{ "key": "abc", "site": "YouTube", "type": "Trailer" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let videos = client_for(&server)
            .movie_videos(550, Some("en-US"))
            .await
            .unwrap();
        assert_eq!(videos.results[0].kind, "Trailer");
    }

    #[tokio::test]
    async fn not_found_status_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/person/999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).person(999).await.unwrap_err();
        assert!(matches!(err, MetadataError::NotFound));
    }

    #[tokio::test]
    async fn server_error_maps_to_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/1"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).movie_details(1).await.unwrap_err();
        match err {
            MetadataError::Provider(msg) => assert!(msg.contains("503")),
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": 2 })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).movie_details(2).await.unwrap_err();
        assert!(matches!(err, MetadataError::Provider(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let mut config = TmdbConfig::new("k");
        config.base_url = "http://127.0.0.1:9".to_string();
        config.timeout = Duration::from_secs(2);
        let client = TmdbClient::new(config).unwrap();

        let err = client.popular_movies(1).await.unwrap_err();
        assert!(matches!(err, MetadataError::Network(_)));
    }
}
