// Extractor module - the media info provider seam
//
// `MediaInfoProvider` is the only thing the HTTP layer talks to. The
// production implementation shells out to yt-dlp; tests plug in stubs.

mod diagnostics;
mod errors;
mod traits;
mod utils;
mod ytdlp;

pub use diagnostics::{diagnose_error, BlockingReason};
pub use errors::ProviderError;
pub use traits::{ExtractOptions, MediaInfo, MediaInfoProvider, AUDIO_M4A_SELECTOR};
pub use ytdlp::{Launcher, YtDlpConfig, YtDlpProvider};
