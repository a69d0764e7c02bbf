use std::net::SocketAddr;

use clap::Parser;

use crate::extractor::{Launcher, YtDlpConfig};

/// Command line / environment configuration for the server binary
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Resolve video info and direct audio links via yt-dlp")]
pub struct Cli {
    /// Address to listen on
    #[arg(long, env = "YTLINK_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Path to the yt-dlp binary (auto-detected when omitted)
    #[arg(long, env = "YTDLP_PATH", conflicts_with = "python")]
    pub ytdlp_path: Option<String>,

    /// Run yt-dlp as `<python> -m yt_dlp` instead of the binary
    #[arg(long, env = "YTDLP_PYTHON")]
    pub python: Option<String>,

    /// Upper bound on one yt-dlp run, in seconds
    #[arg(long, env = "YTLINK_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,

    /// Proxy passed to yt-dlp (e.g. socks5://127.0.0.1:1080)
    #[arg(long, env = "YTLINK_PROXY")]
    pub proxy: Option<String>,

    /// cookies.txt passed to yt-dlp
    #[arg(long, env = "YTLINK_COOKIES")]
    pub cookies: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn launcher(&self) -> Launcher {
        match (&self.python, &self.ytdlp_path) {
            (Some(python), _) => Launcher::Python(python.clone()),
            (None, Some(path)) => Launcher::Binary(path.clone()),
            (None, None) => Launcher::detect_binary(),
        }
    }

    pub fn ytdlp_config(&self) -> YtDlpConfig {
        YtDlpConfig {
            launcher: self.launcher(),
            timeout_seconds: self.timeout_secs,
            proxy: self.proxy.clone(),
            cookies_path: self.cookies.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ytlink", "--ytdlp-path", "/usr/bin/yt-dlp"]).unwrap();
        assert_eq!(cli.timeout_secs, 60);
        assert_eq!(cli.bind.port(), 3000);

        let config = cli.ytdlp_config();
        assert_eq!(config.launcher, Launcher::Binary("/usr/bin/yt-dlp".into()));
        assert!(config.proxy.is_none());
    }

    #[test]
    fn test_python_launcher() {
        let cli = Cli::try_parse_from([
            "ytlink",
            "--python",
            "/venv/bin/python",
            "--timeout-secs",
            "15",
            "--proxy",
            "socks5://127.0.0.1:1080",
        ])
        .unwrap();

        let config = cli.ytdlp_config();
        assert_eq!(config.launcher, Launcher::Python("/venv/bin/python".into()));
        assert_eq!(config.timeout_seconds, 15);
        assert_eq!(config.proxy.as_deref(), Some("socks5://127.0.0.1:1080"));
    }

    #[test]
    fn test_launchers_conflict() {
        let res = Cli::try_parse_from(["ytlink", "--python", "python3", "--ytdlp-path", "yt-dlp"]);
        assert!(res.is_err());
    }
}
