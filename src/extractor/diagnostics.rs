// Failure diagnostics - classifies raw yt-dlp error text
//
// Only used to tag the operational log line. The HTTP response always
// carries the provider message as-is.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

/// Likely cause of a provider failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockingReason {
    /// HTTP 403 Forbidden - general access denied
    Http403Forbidden,

    /// Rate limiting (429 or similar)
    RateLimited,

    /// "Sign in to confirm you're not a bot"
    BotDetection,

    /// Age-restricted content requiring login
    AgeRestricted,

    /// Geographic restriction
    GeoBlocked,

    /// Private video requiring authorization
    PrivateVideo,

    /// Video deleted or unavailable
    VideoUnavailable,

    /// The URL is not handled by any extractor
    UnsupportedUrl,

    /// The format selector matched nothing (e.g. no M4A audio track)
    FormatUnavailable,

    /// Network or process timeout
    NetworkTimeout,

    /// yt-dlp is not installed
    ToolMissing,
}

impl BlockingReason {
    /// Whether a retry later, from the same host, could plausibly succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Http403Forbidden | Self::RateLimited | Self::BotDetection | Self::NetworkTimeout
        )
    }
}

impl fmt::Display for BlockingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Http403Forbidden => "http_403",
            Self::RateLimited => "rate_limited",
            Self::BotDetection => "bot_detection",
            Self::AgeRestricted => "age_restricted",
            Self::GeoBlocked => "geo_blocked",
            Self::PrivateVideo => "private_video",
            Self::VideoUnavailable => "video_unavailable",
            Self::UnsupportedUrl => "unsupported_url",
            Self::FormatUnavailable => "format_unavailable",
            Self::NetworkTimeout => "timeout",
            Self::ToolMissing => "tool_missing",
        };
        f.write_str(s)
    }
}

lazy_static! {
    static ref HTTP_STATUS_RE: Regex = Regex::new(r"HTTP Error (\d{3})").unwrap();
}

/// Classify an error message. Order matters: the more specific patterns
/// are checked before generic ones like "unavailable".
pub fn diagnose_error(detail: &str) -> Option<BlockingReason> {
    let lower = detail.to_lowercase();

    if let Some(caps) = HTTP_STATUS_RE.captures(detail) {
        match &caps[1] {
            "403" => return Some(BlockingReason::Http403Forbidden),
            "429" => return Some(BlockingReason::RateLimited),
            _ => {}
        }
    }

    if lower.contains("too many requests") || lower.contains("rate limit") {
        return Some(BlockingReason::RateLimited);
    }

    if lower.contains("not a bot") || lower.contains("bot detection") {
        return Some(BlockingReason::BotDetection);
    }

    if lower.contains("confirm your age") || lower.contains("age-restricted") {
        return Some(BlockingReason::AgeRestricted);
    }

    if lower.contains("not available in your country") || lower.contains("geo restrict") {
        return Some(BlockingReason::GeoBlocked);
    }

    if lower.contains("private video") {
        return Some(BlockingReason::PrivateVideo);
    }

    if lower.contains("requested format is not available") {
        return Some(BlockingReason::FormatUnavailable);
    }

    if lower.contains("unsupported url") {
        return Some(BlockingReason::UnsupportedUrl);
    }

    if lower.contains("video unavailable") || lower.contains("has been removed") {
        return Some(BlockingReason::VideoUnavailable);
    }

    if lower.contains("timed out") || lower.contains("timeout") {
        return Some(BlockingReason::NetworkTimeout);
    }

    if lower.contains("tool not found") || lower.contains("no such file") {
        return Some(BlockingReason::ToolMissing);
    }

    None
}
