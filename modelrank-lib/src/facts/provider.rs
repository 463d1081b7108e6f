use super::{FetchError, ModelMetadata};
use futures::future::BoxFuture;

/// Outcome of a single metadata fetch.
pub type FetchResult = Result<ModelMetadata, FetchError>;

/// A source of model metadata.
///
/// Implementations must be safe to call concurrently; one instance is shared by every
/// metric task of a run. A fetch is attempted exactly once per call and is never retried.
pub trait MetadataProvider: Send + Sync + core::fmt::Debug {
    fn fetch<'a>(&'a self, identifier: &'a str) -> BoxFuture<'a, FetchResult>;
}
