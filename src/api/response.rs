// JSON envelopes and the handler-boundary error type

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extractor::{diagnose_error, ProviderError};

/// Kind of media described by an info payload. Only single videos are
/// resolved today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
}

/// Normalized metadata returned by `/api/fetch-info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoData {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub id: Option<String>,
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    /// `HH:MM:SS` or `"N/A"`
    pub duration: String,
}

/// `{"success": true, "data": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    pub success: bool,
    pub data: InfoData,
}

impl InfoResponse {
    pub fn ok(data: InfoData) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{"success": true, "downloadUrl": "..."}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    pub success: bool,
    pub download_url: String,
}

impl DownloadResponse {
    pub fn ok(download_url: String) -> Self {
        Self {
            success: true,
            download_url,
        }
    }
}

/// `{"success": false, "error": "..."}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Why a resolver could not produce a result
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The provider answered but without a direct media URL
    #[error("Could not find a suitable download link.")]
    NoDownloadLink,
}

impl ResolveError {
    /// Raw detail for the operational log
    pub fn detail(&self) -> String {
        match self {
            Self::Provider(e) => e.detail(),
            other => other.to_string(),
        }
    }

    /// Write the diagnostic log line for a failed request.
    pub fn log(&self, endpoint: &str, input: &str) {
        let detail = self.detail();
        let reason = diagnose_error(&detail);
        let reason_label = reason.map_or_else(|| "unknown".to_string(), |r| r.to_string());
        tracing::error!(
            endpoint,
            input,
            reason = %reason_label,
            transient = reason.map_or(false, |r| r.is_transient()),
            "request failed:\n{}",
            detail
        );
    }
}

/// Error returned from a handler, rendered as the failure envelope
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// 400 for a missing query parameter
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// 500 for any resolver failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_info_envelope_shape() {
        let body = InfoResponse::ok(InfoData {
            kind: MediaKind::Video,
            id: Some("abc123".into()),
            title: None,
            thumbnail: None,
            duration: "N/A".into(),
        });
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "success": true,
                "data": {"type": "video", "id": "abc123", "title": null, "thumbnail": null, "duration": "N/A"}
            })
        );
    }

    #[test]
    fn test_download_envelope_uses_camel_case() {
        let body = serde_json::to_value(DownloadResponse::ok("https://x/a.m4a".into())).unwrap();
        assert_eq!(body, json!({"success": true, "downloadUrl": "https://x/a.m4a"}));
    }

    #[test]
    fn test_no_download_link_message() {
        assert_eq!(
            ResolveError::NoDownloadLink.to_string(),
            "Could not find a suitable download link."
        );
    }

    #[test]
    fn test_provider_message_is_transparent() {
        let err = ResolveError::from(ProviderError::Timeout(30));
        assert_eq!(err.to_string(), "Timed out after 30s");
    }
}
