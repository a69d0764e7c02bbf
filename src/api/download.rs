// GET /api/download-mp3?videoId=<string>
//
// Despite the route name nothing is transcoded: the response is a direct,
// time-limited URL for the best M4A audio stream.

use axum::{extract::State, Json};

use super::params::{required_param, QueryPairs};
use super::response::{ApiError, ApiResult, DownloadResponse, ResolveError};
use super::AppState;
use crate::extractor::{ExtractOptions, MediaInfoProvider};

const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Canonical watch URL for a video id. The id is not validated.
pub fn watch_url(video_id: &str) -> String {
    format!("{}{}", WATCH_URL_PREFIX, video_id)
}

/// Resolve the direct audio URL for `video_id`.
///
/// Only `bestaudio[ext=m4a]` is requested. Videos without an M4A track fail
/// in the provider; there is no fallback format.
pub async fn resolve_download_link(
    provider: &dyn MediaInfoProvider,
    video_id: &str,
) -> Result<String, ResolveError> {
    let info = provider
        .extract_info(&watch_url(video_id), &ExtractOptions::audio_m4a())
        .await?;

    info.url
        .filter(|url| !url.is_empty())
        .ok_or(ResolveError::NoDownloadLink)
}

pub async fn download_mp3(
    State(state): State<AppState>,
    query: QueryPairs,
) -> ApiResult<DownloadResponse> {
    let video_id = required_param(query, "videoId", "Missing video ID.")?;

    let download_url = resolve_download_link(state.provider.as_ref(), &video_id)
        .await
        .map_err(|e| {
            e.log("download-mp3", &video_id);
            ApiError::internal(format!("Failed to get download link: {}", e))
        })?;

    tracing::info!(video_id = %video_id, "resolved audio link");
    Ok(Json(DownloadResponse::ok(download_url)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(watch_url("abc123"), "https://www.youtube.com/watch?v=abc123");
        // Not validated or escaped
        assert_eq!(watch_url("a b"), "https://www.youtube.com/watch?v=a b");
    }
}
