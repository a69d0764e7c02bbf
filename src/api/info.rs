// GET /api/fetch-info?url=<string>

use axum::{extract::State, Json};

use super::duration::format_duration;
use super::params::{required_param, QueryPairs};
use super::response::{ApiError, ApiResult, InfoData, InfoResponse, MediaKind, ResolveError};
use super::AppState;
use crate::extractor::{ExtractOptions, MediaInfoProvider};

/// Look up metadata for `url` and normalize it.
///
/// The URL is passed through untouched; the provider decides whether it is
/// valid.
pub async fn resolve_info(
    provider: &dyn MediaInfoProvider,
    url: &str,
) -> Result<InfoData, ResolveError> {
    let info = provider.extract_info(url, &ExtractOptions::info()).await?;

    Ok(InfoData {
        kind: MediaKind::Video,
        id: info.id,
        title: info.title,
        thumbnail: info.thumbnail,
        duration: format_duration(info.duration),
    })
}

pub async fn fetch_info(
    State(state): State<AppState>,
    query: QueryPairs,
) -> ApiResult<InfoResponse> {
    let url = required_param(query, "url", "Missing YouTube URL.")?;

    let data = resolve_info(state.provider.as_ref(), &url)
        .await
        .map_err(|e| {
            e.log("fetch-info", &url);
            ApiError::internal(format!("Failed to get video info: {}", e))
        })?;

    tracing::info!(id = data.id.as_deref().unwrap_or("-"), "resolved video info");
    Ok(Json(InfoResponse::ok(data)))
}
