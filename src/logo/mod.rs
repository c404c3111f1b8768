//! Logo module - acquisition of the brand logo with a text fallback.
//!
//! This module is split into submodules:
//! - `models` - `LogoSource` configuration and the resolved `LogoAsset`
//! - `fetcher` - the fallible read/download sub-steps behind `AssetFetcher`
//! - `resolver` - `LogoResolver`, which reduces every failure to the placeholder

pub mod fetcher;
pub mod models;
pub mod resolver;


pub use fetcher::{AssetFetcher, DefaultFetcher};
pub use models::{LogoAsset, LogoSource, SourceKind, TextStyle};
pub use resolver::LogoResolver;

use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of logo acquisition failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoErrorKind {
    /// File missing or unreadable, or connection/DNS failure.
    SourceUnavailable,
    /// The remote endpoint answered with a non-success status.
    SourceRejected,
}

/// Errors raised by the acquisition sub-steps. Never escapes `LogoResolver`.
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("failed to read logo file {}: {source}", path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to download logo from {url}: {source}")]
    NetworkUnavailable {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to download logo from {url}: status {status}")]
    SourceRejected { url: String, status: u16 },
}

impl LogoError {
    pub fn kind(&self) -> LogoErrorKind {
        match self {
            Self::FileUnavailable { .. } | Self::NetworkUnavailable { .. } => {
                LogoErrorKind::SourceUnavailable
            }
            Self::SourceRejected { .. } => LogoErrorKind::SourceRejected,
        }
    }
}
