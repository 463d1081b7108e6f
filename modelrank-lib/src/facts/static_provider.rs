use super::{FetchError, FetchResult, MetadataProvider, ModelMetadata};
use core::time::Duration;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
struct Entry {
    result: FetchResult,
    delay: Duration,
}

/// An in-memory metadata provider with canned answers.
///
/// Each identifier maps to a fixed result and an optional artificial delay. Identifiers with
/// no entry fail with [`FetchError::NotFound`]. Every call is counted, which lets callers check
/// how many fetches a run actually made.
#[derive(Debug, Default)]
pub struct StaticProvider {
    entries: HashMap<String, Entry>,
    fetch_counts: Mutex<HashMap<String, usize>>,
}

impl StaticProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer fetches for `identifier` with `metadata`.
    #[must_use]
    pub fn with_model(self, identifier: impl Into<String>, metadata: ModelMetadata) -> Self {
        self.with_result(identifier, Ok(metadata))
    }

    /// Answer fetches for `identifier` with `error`.
    #[must_use]
    pub fn with_error(self, identifier: impl Into<String>, error: FetchError) -> Self {
        self.with_result(identifier, Err(error))
    }

    /// Delay every answer for `identifier` by `delay`. Has no effect on unknown identifiers.
    #[must_use]
    pub fn with_delay(mut self, identifier: &str, delay: Duration) -> Self {
        if let Some(entry) = self.entries.get_mut(identifier) {
            entry.delay = delay;
        }
        self
    }

    fn with_result(mut self, identifier: impl Into<String>, result: FetchResult) -> Self {
        let _ = self.entries.insert(
            identifier.into(),
            Entry {
                result,
                delay: Duration::ZERO,
            },
        );
        self
    }

    /// Number of fetches issued for `identifier` so far.
    #[must_use]
    pub fn fetch_count(&self, identifier: &str) -> usize {
        self.fetch_counts
            .lock()
            .expect("lock not poisoned")
            .get(identifier)
            .copied()
            .unwrap_or_default()
    }

    /// Number of fetches issued so far, across all identifiers.
    #[must_use]
    pub fn total_fetches(&self) -> usize {
        self.fetch_counts.lock().expect("lock not poisoned").values().sum()
    }
}

impl MetadataProvider for StaticProvider {
    fn fetch<'a>(&'a self, identifier: &'a str) -> BoxFuture<'a, FetchResult> {
        async move {
            *self
                .fetch_counts
                .lock()
                .expect("lock not poisoned")
                .entry(identifier.to_string())
                .or_default() += 1;

            let Some(entry) = self.entries.get(identifier) else {
                return Err(FetchError::NotFound);
            };

            if !entry.delay.is_zero() {
                tokio::time::sleep(entry.delay).await;
            }

            entry.result.clone()
        }
        .boxed()
    }
}
