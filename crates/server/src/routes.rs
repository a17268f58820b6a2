use axum::extract::{Path, State};
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use moviepick_core::error::ApiError;
use moviepick_core::types::{ActorProfile, MovieSummary};
use moviepick_metadata::MetadataError;
use moviepick_metadata::lookup;
use moviepick_metadata::selector::RandomMovieSelector;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::error::AppError;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(state.frontend_origin.clone());

    Router::new()
        .route("/", get(root))
        .nest("/api", api_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/random-movie", get(random_movie))
        .route("/actor/{actor_id}", get(get_actor))
        .route("/movie/{movie_id}", get(get_movie))
}

/// Single allowed origin with credentials. Methods and headers are mirrored
/// from the request since wildcards cannot be combined with credentials.
pub fn build_cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

// ---------------------------------------------------------------------------
// Root
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "API de suggestion de films aléatoires",
    })
}

// ---------------------------------------------------------------------------
// Movies
// ---------------------------------------------------------------------------

async fn random_movie(State(state): State<AppState>) -> Result<Json<MovieSummary>, AppError> {
    let mut rng = StdRng::from_entropy();
    let movie = RandomMovieSelector::new(state.provider.as_ref(), &state.images)
        .select(&mut rng)
        .await
        .map_err(|e| {
            log_failure("random movie", &e);
            ApiError::from(e)
        })?;
    Ok(Json(movie))
}

async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<u64>,
) -> Result<Json<MovieSummary>, AppError> {
    let movie = lookup::movie_by_id(state.provider.as_ref(), &state.images, movie_id)
        .await
        .map_err(|e| {
            log_failure("movie lookup", &e);
            ApiError::from(e)
        })?;
    Ok(Json(movie))
}

// ---------------------------------------------------------------------------
// Actors
// ---------------------------------------------------------------------------

async fn get_actor(
    State(state): State<AppState>,
    Path(actor_id): Path<u64>,
) -> Result<Json<ActorProfile>, AppError> {
    let profile = lookup::actor_profile(state.provider.as_ref(), &state.images, actor_id)
        .await
        .map_err(|e| match e {
            MetadataError::NotFound => ApiError::NotFound("Acteur non trouvé".into()),
            other => {
                log_failure("actor lookup", &other);
                ApiError::from(other)
            }
        })?;
    Ok(Json(profile))
}

fn log_failure(operation: &str, e: &MetadataError) {
    match e {
        MetadataError::EmptyListing | MetadataError::NoSynopsis { .. } => {
            warn!(operation, error = %e, "no movie to suggest")
        }
        _ => error!(operation, error = %e, "provider request failed"),
    }
}
