//! Fallible acquisition sub-steps.
//!
//! The resolver talks to an `AssetFetcher` so the read/download steps can be
//! swapped out in tests. `DefaultFetcher` reads with `tokio::fs` and downloads
//! with `reqwest`.

use async_trait::async_trait;
use futures_util::stream::StreamExt;
use std::path::Path;
use tokio::sync::OnceCell;

use super::LogoError;

/// Reads logo bytes from a local path or a remote URL.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Read the whole file at `path`.
    async fn read_local(&self, path: &Path) -> Result<Vec<u8>, LogoError>;

    /// GET `url` and return the whole body of a success response.
    async fn fetch_remote(&self, url: &str) -> Result<Vec<u8>, LogoError>;
}

/// Filesystem and HTTP(S) fetcher.
///
/// Redirects are not followed: a 3xx answer counts as a rejection. No retry
/// and no timeout beyond the transport defaults. The HTTP client is built on
/// the first remote fetch, so local reads never touch it.
#[derive(Debug, Default)]
pub struct DefaultFetcher {
    http_client: OnceCell<reqwest::Client>,
}

impl DefaultFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a remote fetch has built the HTTP client yet.
    pub fn has_http_client(&self) -> bool {
        self.http_client.initialized()
    }

    async fn http_client(&self) -> Result<&reqwest::Client, reqwest::Error> {
        self.http_client
            .get_or_try_init(|| async {
                reqwest::Client::builder()
                    .redirect(reqwest::redirect::Policy::none())
                    .user_agent(concat!("resimix-offer/", env!("CARGO_PKG_VERSION")))
                    .build()
            })
            .await
    }
}

#[async_trait]
impl AssetFetcher for DefaultFetcher {
    async fn read_local(&self, path: &Path) -> Result<Vec<u8>, LogoError> {
        tokio::fs::read(path)
            .await
            .map_err(|source| LogoError::FileUnavailable {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<u8>, LogoError> {
        let unavailable = |source| LogoError::NetworkUnavailable {
            url: url.to_string(),
            source,
        };

        let response = self
            .http_client()
            .await
            .map_err(unavailable)?
            .get(url)
            .send()
            .await
            .map_err(unavailable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LogoError::SourceRejected {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(unavailable)?;
            bytes.extend_from_slice(&chunk);
        }

        log::debug!("Downloaded {} logo bytes from {}", bytes.len(), url);
        Ok(bytes)
    }
}
