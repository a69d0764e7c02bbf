// yt-dlp provider
//
// Runs yt-dlp in metadata-only mode (`--dump-json`) and parses the info
// document it prints. Two launchers are supported:
// - Binary: native `yt-dlp` executable
// - Python: `python3 -m yt_dlp` (for yt-dlp installed into a virtualenv)

use async_trait::async_trait;
use std::path::Path;
use std::process::Command as StdCommand;

use super::errors::ProviderError;
use super::traits::{ExtractOptions, MediaInfo, MediaInfoProvider};
use super::utils::run_output_with_timeout;

/// How yt-dlp is launched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launcher {
    /// Path to a `yt-dlp` executable
    Binary(String),
    /// Python interpreter with the `yt_dlp` module installed
    Python(String),
}

impl Launcher {
    /// Locate the yt-dlp binary in common install locations, then PATH.
    pub fn detect_binary() -> Self {
        let common_paths = [
            "/opt/homebrew/bin/yt-dlp", // Homebrew on Apple Silicon
            "/usr/local/bin/yt-dlp",    // Homebrew on Intel Mac / pip --user
            "/usr/bin/yt-dlp",          // System installation
        ];

        for path in common_paths {
            if Path::new(path).exists() {
                return Self::Binary(path.to_string());
            }
        }

        if let Ok(output) = StdCommand::new("which").arg("yt-dlp").output() {
            if output.status.success() {
                let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !path.is_empty() {
                    return Self::Binary(path);
                }
            }
        }

        Self::Binary("yt-dlp".to_string())
    }

    fn program(&self) -> &str {
        match self {
            Self::Binary(path) => path,
            Self::Python(python) => python,
        }
    }

    fn base_args(&self) -> Vec<String> {
        match self {
            Self::Binary(_) => Vec::new(),
            Self::Python(_) => vec!["-m".to_string(), "yt_dlp".to_string()],
        }
    }
}

/// Settings shared by every call a provider makes
#[derive(Debug, Clone)]
pub struct YtDlpConfig {
    pub launcher: Launcher,
    /// Hard limit on one yt-dlp run, in seconds
    pub timeout_seconds: u64,
    /// SOCKS5/HTTP proxy URL
    pub proxy: Option<String>,
    /// Path to a cookies.txt file
    pub cookies_path: Option<String>,
}

/// Provider backed by a yt-dlp child process
pub struct YtDlpProvider {
    config: YtDlpConfig,
}

impl YtDlpProvider {
    pub fn new(config: YtDlpConfig) -> Self {
        Self { config }
    }

    /// Build command arguments for one extraction
    fn build_args(&self, url: &str, options: &ExtractOptions) -> Vec<String> {
        let mut args = self.config.launcher.base_args();
        args.extend([
            "--dump-json".to_string(),
            "--no-playlist".to_string(),
            "--skip-download".to_string(),
        ]);

        if options.quiet {
            args.push("--quiet".to_string());
            args.push("--no-warnings".to_string());
        }

        if let Some(selector) = &options.format_selector {
            args.push("--format".to_string());
            args.push(selector.clone());
        }

        // yt-dlp's socket timeout mirrors the process timeout
        args.push("--socket-timeout".to_string());
        args.push(self.config.timeout_seconds.max(1).to_string());

        if let Some(path) = &self.config.cookies_path {
            args.push("--cookies".to_string());
            args.push(path.clone());
        }

        if let Some(proxy) = &self.config.proxy {
            args.push("--proxy".to_string());
            args.push(proxy.clone());
        }

        // `--` so an identifier starting with '-' is never read as a flag
        args.push("--".to_string());
        args.push(url.to_string());
        args
    }

    /// Log-safe description of one call. Proxy and cookie settings are
    /// left out since they can carry credentials.
    fn call_summary(url: &str, options: &ExtractOptions) -> String {
        format!(
            "url={} format={}",
            url,
            options.format_selector.as_deref().unwrap_or("default")
        )
    }

    /// Parse yt-dlp's JSON output
    fn parse_json(stdout: &[u8]) -> Result<MediaInfo, ProviderError> {
        let json_str = String::from_utf8_lossy(stdout);
        // With --no-playlist there is one document, but be lenient about
        // stray lines some extractors print before it
        let document = json_str
            .lines()
            .map(str::trim)
            .rfind(|line| line.starts_with('{'))
            .ok_or_else(|| ProviderError::ParseError("yt-dlp printed no JSON".to_string()))?;

        serde_json::from_str(document)
            .map_err(|e| ProviderError::ParseError(format!("Invalid JSON: {}", e)))
    }
}

#[async_trait]
impl MediaInfoProvider for YtDlpProvider {
    fn name(&self) -> &'static str {
        match self.config.launcher {
            Launcher::Binary(_) => "yt-dlp",
            Launcher::Python(_) => "python-yt_dlp",
        }
    }

    async fn version(&self) -> Result<String, ProviderError> {
        let mut args = self.config.launcher.base_args();
        args.push("--version".to_string());

        let out = run_output_with_timeout(self.config.launcher.program(), &args, 10).await?;
        if !out.status.success() {
            return Err(ProviderError::from_stderr(
                &String::from_utf8_lossy(&out.stderr),
                out.status.code(),
            ));
        }

        Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
    }

    async fn extract_info(
        &self,
        url: &str,
        options: &ExtractOptions,
    ) -> Result<MediaInfo, ProviderError> {
        let program = self.config.launcher.program();
        let args = self.build_args(url, options);
        tracing::debug!(provider = self.name(), "running yt-dlp: {}", Self::call_summary(url, options));

        let out = run_output_with_timeout(program, &args, self.config.timeout_seconds).await?;

        if !out.status.success() {
            return Err(ProviderError::from_stderr(
                &String::from_utf8_lossy(&out.stderr),
                out.status.code(),
            ));
        }

        Self::parse_json(&out.stdout)
    }
}
