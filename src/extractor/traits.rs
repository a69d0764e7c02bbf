// MediaInfoProvider trait and common types

use async_trait::async_trait;
use serde::Deserialize;

use super::errors::ProviderError;

/// Format selector for the best audio-only stream in an M4A container.
pub const AUDIO_M4A_SELECTOR: &str = "bestaudio[ext=m4a]";

/// Options for a single extraction call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Suppress progress and warning output from the provider
    pub quiet: bool,
    /// yt-dlp format selector (e.g. "bestaudio[ext=m4a]"); `None` keeps the
    /// provider default and leaves `MediaInfo::url` unset for merged formats
    pub format_selector: Option<String>,
}

impl ExtractOptions {
    /// Metadata lookup with no format selection.
    pub fn info() -> Self {
        Self {
            quiet: true,
            format_selector: None,
        }
    }

    /// Resolve the best M4A audio-only stream.
    pub fn audio_m4a() -> Self {
        Self {
            quiet: true,
            format_selector: Some(AUDIO_M4A_SELECTOR.to_string()),
        }
    }
}

/// Subset of the yt-dlp info document this service reads.
///
/// Every field is optional: yt-dlp omits keys freely depending on the site
/// and on whether a single format was selected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MediaInfo {
    pub id: Option<String>,
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    /// Duration in seconds (yt-dlp reports floats for some extractors)
    pub duration: Option<f64>,
    /// Direct URL of the selected format
    pub url: Option<String>,
}

/// Trait for media info providers
#[async_trait]
pub trait MediaInfoProvider: Send + Sync {
    /// Name of the provider (for logging)
    fn name(&self) -> &'static str;

    /// Probe the backing tool, returning its version
    async fn version(&self) -> Result<String, ProviderError>;

    /// Extract metadata for `url` without downloading any media
    async fn extract_info(
        &self,
        url: &str,
        options: &ExtractOptions,
    ) -> Result<MediaInfo, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_option_sets() {
        assert!(ExtractOptions::info().quiet);
        assert_eq!(ExtractOptions::info().format_selector, None);
        assert_eq!(
            ExtractOptions::audio_m4a().format_selector.as_deref(),
            Some("bestaudio[ext=m4a]")
        );
    }

    #[test]
    fn test_media_info_tolerates_missing_and_extra_fields() {
        let json = r#"{"id":"abc123","duration":null,"view_count":10,"formats":[{"format_id":"140"}]}"#;
        let info: MediaInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.id.as_deref(), Some("abc123"));
        assert!(info.title.is_none());
        assert!(info.duration.is_none());
        assert!(info.url.is_none());
    }
}
