//! Facts about models and where they come from
//!
//! This module turns input URLs into [`Artifact`]s and gathers the [`ModelMetadata`] the
//! evaluators score. Metadata is supplied by a [`MetadataProvider`]: [`HubProvider`] talks
//! to the Hugging Face hub, while [`StaticProvider`] answers from memory.
//!
//! During a run, every metric task goes through a [`MetadataCache`] so that the metrics of
//! one model share a single fetch, and through a [`Throttler`] which bounds how much work
//! runs at once. A rate-limited fetch is not retried; it only degrades that model's scores.
//!
//! Fetch failures are reported as a [`FetchError`] rather than an application error, since
//! they only ever degrade a score and never abort a run.

mod artifact;
mod category;
mod fetch_error;
pub mod hub;
mod metadata_cache;
mod model_metadata;
mod provider;
mod static_provider;
mod throttler;

pub use artifact::{Artifact, classify, extract_identifier};
pub use category::Category;
pub use fetch_error::FetchError;
pub use hub::HubProvider;
pub use metadata_cache::MetadataCache;
pub use model_metadata::{ModelMetadata, RepoFile};
pub use provider::{FetchResult, MetadataProvider};
pub use static_provider::StaticProvider;
pub use throttler::Throttler;
