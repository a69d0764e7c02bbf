pub mod api;
pub mod config;
pub mod extractor;

pub use api::router;
pub use extractor::{ExtractOptions, MediaInfo, MediaInfoProvider, ProviderError, YtDlpProvider};
