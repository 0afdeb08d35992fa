use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::model::Event;

/// Single-document cache for the fully-resolved event dataset.
///
/// The file is either absent or holds every event with every character;
/// nothing partial is ever written. A present cache substitutes for the
/// network entirely.
pub struct EventCache {
    path: PathBuf,
}

impl EventCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing, unreadable or undeserializable cache is a miss, not an
    /// error: a miss is the expected trigger for going to the network.
    pub async fn load(&self) -> Option<Vec<Event>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no cache file");
                return None;
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "cache unreadable; treating as a miss");
                return None;
            }
        };
        if bytes.is_empty() {
            return None;
        }

        match serde_json::from_slice(&bytes) {
            Ok(events) => Some(events),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "cache did not deserialize; treating as a miss");
                None
            }
        }
    }

    /// Atomically replaces the cache with a complete dataset: temp file in
    /// the same directory, fsync, rename over the destination.
    pub async fn save(&self, events: &[Event]) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.temp_path();
        let json = serde_json::to_vec_pretty(events).context("serializing event dataset")?;

        let mut file = fs::File::create(&tmp_path)
            .await
            .with_context(|| format!("creating {}", tmp_path.display()))?;
        file.write_all(&json)
            .await
            .with_context(|| format!("writing {}", tmp_path.display()))?;
        file.sync_all()
            .await
            .with_context(|| format!("syncing {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path)
            .await
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            // A bare relative filename has an empty parent.
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .await
                    .with_context(|| format!("creating cache directory {}", dir.display()))?;
            }
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone();
        let file_name = self
            .path
            .file_name()
            .map(|name| format!("{}.tmp", name.to_string_lossy()))
            .unwrap_or_else(|| "tmp.json".to_string());
        tmp.set_file_name(file_name);
        tmp
    }
}
