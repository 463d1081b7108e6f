use super::{MetricName, Score};
use crate::Result;
use crate::facts::ModelMetadata;
use chrono::{DateTime, Utc};
use core::fmt::Debug;

/// A single metric's scoring function.
///
/// Implementations are pure: the same metadata and clock produce the same score. Anything
/// that can go wrong is returned as an error, which the caller turns into a failed outcome.
pub trait Evaluator: Send + Sync + Debug {
    /// The metric this evaluator produces.
    fn metric(&self) -> MetricName;

    /// Score a model from its metadata.
    fn score(&self, metadata: &ModelMetadata, now: DateTime<Utc>) -> Result<Score>;

    /// Neutral score used when the model's metadata could not be fetched.
    fn fallback(&self) -> Score {
        Score::scalar(0.0)
    }
}
