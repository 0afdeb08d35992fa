use std::collections::HashMap;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::marvel::MarvelClient;
use crate::model::Event;
use crate::storage::EventCache;

/// Where a loaded dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    Cache,
    Network,
}

/// Cache-first dataset loader. The cache substitutes for the API entirely
/// when present, and is written back exactly once after a complete fetch.
pub struct Pipeline {
    cache: EventCache,
    client: MarvelClient,
}

impl Pipeline {
    pub fn new(cache: EventCache, client: MarvelClient) -> Self {
        Self { cache, client }
    }

    /// The dataset, from cache when possible, from the network otherwise.
    /// A network load that fails leaves the cache untouched; only a
    /// complete dataset is ever persisted.
    pub async fn load_events(&self, limit: usize) -> Result<(Vec<Event>, DatasetSource)> {
        if let Some(events) = self.cache.load().await {
            info!(
                events = events.len(),
                path = %self.cache.path().display(),
                "loaded dataset from cache"
            );
            return Ok((events, DatasetSource::Cache));
        }

        info!("cache miss; fetching from the API");
        let events = self.client.fetch_dataset(limit).await?;
        self.cache.save(&events).await?;
        info!(
            events = events.len(),
            path = %self.cache.path().display(),
            "dataset saved to cache"
        );
        Ok((events, DatasetSource::Network))
    }

    /// Prefetches thumbnail bytes per event id, in memory only. A failed
    /// image leaves its event untextured; the pass itself never fails.
    pub async fn fetch_textures(&self, events: &[Event]) -> HashMap<u64, Vec<u8>> {
        let mut textures = HashMap::new();
        for event in events {
            let Some(thumbnail) = &event.thumbnail else {
                continue;
            };
            let Some(image_url) = self.client.thumbnail_url(thumbnail) else {
                warn!(title = %event.title, "thumbnail URL did not resolve; leaving untextured");
                continue;
            };
            match self.client.fetch_thumbnail(&image_url).await {
                Ok(bytes) => {
                    debug!(title = %event.title, bytes = bytes.len(), "texture loaded");
                    textures.insert(event.id, bytes);
                }
                Err(err) => {
                    warn!(title = %event.title, error = %err, "texture fetch failed; leaving untextured");
                }
            }
        }
        textures
    }
}
