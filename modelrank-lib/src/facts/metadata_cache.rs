use super::{FetchError, FetchResult, MetadataProvider};
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const LOG_TARGET: &str = "     cache";

type SharedFetch = Shared<BoxFuture<'static, FetchResult>>;

/// De-duplicates concurrent metadata fetches within one run.
///
/// The first caller asking for an identifier launches a detached fetch; every later caller
/// awaits the same shared result. Dropping a caller's future abandons only that caller's wait,
/// the fetch itself keeps going for the others. Nothing is persisted past the cache's lifetime.
pub struct MetadataCache {
    provider: Arc<dyn MetadataProvider>,
    fetches: Mutex<HashMap<Arc<str>, SharedFetch>>,
}

impl core::fmt::Debug for MetadataCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let in_flight = self.fetches.lock().map_or(0, |fetches| fetches.len());
        f.debug_struct("MetadataCache")
            .field("provider", &self.provider)
            .field("entries", &in_flight)
            .finish()
    }
}

impl MetadataCache {
    #[must_use]
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self {
            provider,
            fetches: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch metadata for `identifier`, sharing any fetch already under way.
    pub async fn get(&self, identifier: &Arc<str>) -> FetchResult {
        let fetch = {
            let mut fetches = self.fetches.lock().expect("lock not poisoned");
            fetches
                .entry(Arc::clone(identifier))
                .or_insert_with(|| self.launch(Arc::clone(identifier)))
                .clone()
        };

        fetch.await
    }

    /// Forget the shared result for `identifier` once nobody needs it anymore.
    pub fn evict(&self, identifier: &str) {
        let _ = self.fetches.lock().expect("lock not poisoned").remove(identifier);
    }

    fn launch(&self, identifier: Arc<str>) -> SharedFetch {
        let provider = Arc::clone(&self.provider);
        let handle = tokio::spawn(async move { provider.fetch(&identifier).await });

        async move {
            handle.await.unwrap_or_else(|e| {
                log::error!(target: LOG_TARGET, "Metadata fetch task failed: {e}");
                Err(FetchError::network(format!("metadata fetch task failed: {e}")))
            })
        }
        .boxed()
        .shared()
    }
}
