//! Logo resolution with deterministic text fallback.

use std::path::Path;
use std::sync::Arc;

use super::fetcher::{AssetFetcher, DefaultFetcher};
use super::models::{LogoAsset, LogoSource, SourceKind};
use super::LogoError;

/// Turns a `LogoSource` into a `LogoAsset`.
///
/// `resolve` is total: every acquisition failure is logged once at `warn`
/// level and replaced by `LogoAsset::placeholder()`.
pub struct LogoResolver {
    source: LogoSource,
    fetcher: Arc<dyn AssetFetcher>,
}

impl LogoResolver {
    /// Resolver backed by the filesystem/HTTP `DefaultFetcher`.
    pub fn new(source: LogoSource) -> Self {
        Self::with_fetcher(source, Arc::new(DefaultFetcher::new()))
    }

    pub fn with_fetcher(source: LogoSource, fetcher: Arc<dyn AssetFetcher>) -> Self {
        Self { source, fetcher }
    }

    pub fn source(&self) -> &LogoSource {
        &self.source
    }

    pub async fn resolve(&self) -> LogoAsset {
        if self.source.force_text_fallback() {
            log::info!("Logo text fallback forced, skipping acquisition");
            return LogoAsset::placeholder();
        }

        match self.acquire().await {
            Ok(bytes) => LogoAsset::Image {
                bytes,
                width: self.source.width(),
                height: self.source.height(),
            },
            Err(e) => {
                log::warn!(
                    "Failed to load logo from {} ({:?}), using text fallback instead: {}",
                    self.source.location(),
                    e.kind(),
                    e
                );
                LogoAsset::placeholder()
            }
        }
    }

    async fn acquire(&self) -> Result<Vec<u8>, LogoError> {
        let location = self.source.location();
        match self.source.kind() {
            SourceKind::Local => self.fetcher.read_local(Path::new(location)).await,
            SourceKind::Remote => self.fetcher.fetch_remote(location).await,
        }
    }
}
