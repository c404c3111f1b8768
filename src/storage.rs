//! Output storage for generated documents.

use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("storage task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Destination for generated documents.
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    /// Store `data` under `filename` and return where it ended up.
    async fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf, StorageError>;
}

/// Writes documents into a local directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    output_dir: PathBuf,
}

impl LocalStorage {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn get_document_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(sanitize_filename::sanitize(filename))
    }
}

#[async_trait]
impl DocumentStorage for LocalStorage {
    async fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf, StorageError> {
        let dir = self.output_dir.clone();
        let path = self.get_document_path(filename);
        let data = data.to_vec();

        tokio::task::spawn_blocking(move || write_atomically(&dir, &path, &data).map(|_| path))
            .await?
    }
}

/// Write through a temporary file in `dir`, then rename it onto `path`.
fn write_atomically(dir: &Path, path: &Path, data: &[u8]) -> Result<(), StorageError> {
    std::fs::create_dir_all(dir).map_err(|source| StorageError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let write_err = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(data).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    log::debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}
