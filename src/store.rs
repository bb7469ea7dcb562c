//! Snapshot persistence.
//!
//! The snapshot is a single pretty-printed JSON array of [`NewsRecord`]s.
//! Every save replaces the whole file in place: there is no history, no
//! temp-file-and-rename, and no lock. Two overlapping collection runs race
//! with last-write-wins, and a failure mid-write can leave a truncated file,
//! which the next [`Store::load`] reports as an empty snapshot.

use crate::error::StoreError;
use crate::models::NewsRecord;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `records` and overwrite the snapshot.
    ///
    /// Creates the parent directory if needed.
    ///
    /// # Errors
    ///
    /// [`StoreError`] if serialization or any filesystem step fails.
    #[instrument(
        level = "info",
        skip_all,
        fields(path = %self.path.display(), count = records.len())
    )]
    pub async fn save(&self, records: &[NewsRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&self.path, json).await.map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!("Wrote snapshot");
        Ok(())
    }

    /// Read the snapshot, distinguishing "never written" from "unreadable".
    ///
    /// Returns `Ok(None)` when no snapshot file exists.
    #[instrument(level = "info", skip_all, fields(path = %self.path.display()))]
    pub async fn try_load(&self) -> Result<Option<Vec<NewsRecord>>, StoreError> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let records: Vec<NewsRecord> = serde_json::from_str(&text)?;
        info!(count = records.len(), "Loaded snapshot");
        Ok(Some(records))
    }

    /// Read the snapshot; a missing or unreadable snapshot is empty.
    pub async fn load(&self) -> Vec<NewsRecord> {
        match self.try_load().await {
            Ok(Some(records)) => records,
            Ok(None) => {
                info!(path = %self.path.display(), "No snapshot yet");
                Vec::new()
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Snapshot unreadable; treating as empty"
                );
                Vec::new()
            }
        }
    }
}
