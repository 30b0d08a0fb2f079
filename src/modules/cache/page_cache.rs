use std::path::PathBuf;

use serde_json::Value;

use crate::core::error::{AppError, Result};

/// On-disk cache for raw listing pages, one file per pagination offset.
///
/// Files are named deterministically from the offset and hold the raw
/// `[batch, total]` response as pretty-printed JSON. One request reads or
/// writes a given file at a time; no locking is needed.
pub struct PageCache {
    dir: PathBuf,
}

impl PageCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_path(&self, skip: usize) -> PathBuf {
        self.dir.join(format!("agencies_response_skip_{}.json", skip))
    }

    /// Load the cached page for an offset.
    ///
    /// Returns `Ok(None)` when the entry is missing or cannot be read; the
    /// caller falls back to the network either way. Content that reads
    /// successfully but is not valid JSON is a hard error.
    pub async fn load(&self, skip: usize) -> Result<Option<Value>> {
        let path = self.file_path(skip);

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                tracing::warn!("Unreadable cache entry {}: {}", path.display(), e);
                return Ok(None);
            }
        };

        let value: Value = serde_json::from_str(&raw).map_err(|e| {
            AppError::Cache(format!(
                "Invalid cached agency list response in {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(Some(value))
    }

    /// Persist a raw page, creating the cache directory on demand.
    ///
    /// Callers decide what a write failure means; the fetch pipeline logs it
    /// and keeps the in-memory page.
    pub async fn store(&self, skip: usize, page: &Value) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let pretty = serde_json::to_string_pretty(page).map_err(std::io::Error::other)?;
        tokio::fs::write(self.file_path(skip), pretty).await
    }
}
