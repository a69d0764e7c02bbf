// HTTP surface: two stateless GET endpoints plus a liveness check

use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::extractor::MediaInfoProvider;

mod download;
mod duration;
mod info;
mod params;
mod response;

pub use download::{download_mp3, resolve_download_link, watch_url};
pub use duration::format_duration;
pub use info::{fetch_info, resolve_info};
pub use response::{
    ApiError, ApiResult, DownloadResponse, ErrorResponse, InfoData, InfoResponse, MediaKind,
    ResolveError,
};

/// Shared handler state. The provider is the only thing requests share and
/// it holds no per-request state.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MediaInfoProvider>,
}

/// Build the application router around a provider.
pub fn router(provider: Arc<dyn MediaInfoProvider>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/fetch-info", get(fetch_info))
        .route("/api/download-mp3", get(download_mp3))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { provider })
}
