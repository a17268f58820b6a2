use tracing::debug;

use crate::provider::{MovieProvider, VideoList};

pub const TRAILER_SITE: &str = "YouTube";
pub const TRAILER_TYPE: &str = "Trailer";
pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Watch URL of the first YouTube trailer, in listing order.
pub fn find_trailer(videos: &VideoList) -> Option<String> {
    videos
        .results
        .iter()
        .find(|v| v.kind == TRAILER_TYPE && v.site == TRAILER_SITE)
        .map(|v| format!("https://www.youtube.com/watch?v={}", v.key))
}

/// Look up a trailer in the default language, then in [`FALLBACK_LANGUAGE`].
/// Failures are logged and yield `None`.
pub async fn resolve_trailer(provider: &dyn MovieProvider, movie_id: u64) -> Option<String> {
    let videos = match provider.movie_videos(movie_id, None).await {
        Ok(v) => v,
        Err(e) => {
            debug!(movie_id, error = %e, "video lookup failed");
            return None;
        }
    };
    if let Some(url) = find_trailer(&videos) {
        return Some(url);
    }

    debug!(movie_id, fallback = FALLBACK_LANGUAGE, "no trailer in default language");
    match provider
        .movie_videos(movie_id, Some(FALLBACK_LANGUAGE))
        .await
    {
        Ok(v) => find_trailer(&v),
        Err(e) => {
            debug!(movie_id, error = %e, "fallback video lookup failed");
            None
        }
    }
}
