//! Dataset loading and caching.
//!
//! The whole document is a single cache entry. A refresh swaps in a new
//! `Arc<DataStructure>`; readers keep whatever handle they already hold, so no
//! one ever sees a partially replaced tree.

mod lookup;
mod source;

pub use lookup::*;
pub use source::*;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;

use crate::models::DataStructure;

/// Default time a loaded dataset is served before the source is read again.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Default)]
struct CacheState {
    data: Option<Arc<DataStructure>>,
    loaded_at: Option<Instant>,
    /// Completed reload attempts, successful or not.
    attempts: u64,
}

impl CacheState {
    fn fresh(&self, ttl: Duration) -> Option<Arc<DataStructure>> {
        match (&self.data, self.loaded_at) {
            (Some(data), Some(loaded_at)) if loaded_at.elapsed() < ttl => Some(data.clone()),
            _ => None,
        }
    }
}

/// Owner of the live dataset.
///
/// Failures to read the source never reach callers: the previous dataset is
/// served if there is one, otherwise an empty one.
pub struct DataLoader<S> {
    source: S,
    ttl: Duration,
    cache: RwLock<CacheState>,
    /// Serialises reloads so overlapping callers share one fetch.
    reload: Mutex<()>,
}

impl<S: DataSource> DataLoader<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            cache: RwLock::new(CacheState::default()),
            reload: Mutex::new(()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Return the live dataset, reading the source when the cache is stale,
    /// empty, or `force_refresh` is set.
    pub async fn load(&self, force_refresh: bool) -> Arc<DataStructure> {
        let observed = {
            let cache = self.cache.read().await;
            if !force_refresh {
                if let Some(data) = cache.fresh(self.ttl) {
                    tracing::debug!("Serving cached dataset");
                    return data;
                }
            }
            cache.attempts
        };

        let _guard = self.reload.lock().await;

        {
            let cache = self.cache.read().await;
            if cache.attempts != observed {
                // Another caller completed a reload while this one waited.
                tracing::debug!("Reusing result of concurrent reload");
                return cache
                    .data
                    .clone()
                    .unwrap_or_else(|| Arc::new(DataStructure::empty()));
            }
        }

        let result = self.source.fetch().await;

        let mut cache = self.cache.write().await;
        cache.attempts += 1;

        match result {
            Ok(data) => {
                tracing::info!(
                    source = %self.source.describe(),
                    regions = data.regions.len(),
                    "Dataset loaded"
                );
                let data = Arc::new(data);
                cache.data = Some(data.clone());
                cache.loaded_at = Some(Instant::now());
                data
            }
            Err(e) => match &cache.data {
                Some(previous) => {
                    tracing::warn!(
                        source = %self.source.describe(),
                        error = %e,
                        "Failed to reload dataset, serving previous copy"
                    );
                    previous.clone()
                }
                None => {
                    tracing::warn!(
                        source = %self.source.describe(),
                        error = %e,
                        "Failed to load dataset, serving empty dataset"
                    );
                    Arc::new(DataStructure::empty())
                }
            },
        }
    }
}
