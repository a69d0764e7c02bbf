// Error types for the media info provider

use thiserror::Error;

/// Failure of a single provider call.
///
/// `Display` is what ends up in the user-visible `error` string, so it is
/// kept to the one-line summary; the full detail is available via
/// [`ProviderError::detail`] for the operational log.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// yt-dlp (or the python interpreter) could not be started
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// The child process outlived the configured timeout and was killed
    #[error("Timed out after {0}s")]
    Timeout(u64),

    /// yt-dlp exited non-zero
    #[error("{message}")]
    Failed { message: String, stderr: String },

    /// stdout was not a yt-dlp info JSON document
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Spawning or waiting on the process failed
    #[error("Execution error: {0}")]
    ExecutionError(String),
}

impl ProviderError {
    /// Build a `Failed` error from the captured stderr of a yt-dlp run.
    ///
    /// The summary is the last `ERROR:` line yt-dlp printed, falling back to
    /// the last non-empty line, then to the exit code.
    pub fn from_stderr(stderr: &str, exit_code: Option<i32>) -> Self {
        let stderr = stderr.trim();

        let message = stderr
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| line.starts_with("ERROR:"))
            .or_else(|| stderr.lines().rev().map(str::trim).find(|l| !l.is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| match exit_code {
                Some(code) => format!("yt-dlp exited with status {}", code),
                None => "yt-dlp was terminated by a signal".to_string(),
            });

        Self::Failed {
            message,
            stderr: stderr.to_string(),
        }
    }

    /// Raw detail for logging.
    pub fn detail(&self) -> String {
        match self {
            Self::Failed { stderr, .. } if !stderr.is_empty() => stderr.clone(),
            Self::Failed { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_uses_last_error_line() {
        let stderr = "WARNING: [youtube] falling back\n\
                      ERROR: [youtube] abc: Video unavailable\n";
        let err = ProviderError::from_stderr(stderr, Some(1));
        assert_eq!(err.to_string(), "ERROR: [youtube] abc: Video unavailable");
        assert!(err.detail().contains("WARNING"));
    }

    #[test]
    fn test_summary_falls_back_to_last_line() {
        let err = ProviderError::from_stderr("something odd\nreally odd\n", Some(2));
        assert_eq!(err.to_string(), "really odd");
    }

    #[test]
    fn test_summary_empty_stderr() {
        let err = ProviderError::from_stderr("   ", Some(2));
        assert_eq!(err.to_string(), "yt-dlp exited with status 2");

        let err = ProviderError::from_stderr("", None);
        assert_eq!(err.to_string(), "yt-dlp was terminated by a signal");
    }
}
