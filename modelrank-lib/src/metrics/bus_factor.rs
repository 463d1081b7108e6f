use super::{Evaluator, MetricName, Score, capped_ratio, freshness, indicator};
use crate::Result;
use crate::facts::ModelMetadata;
use chrono::{DateTime, Utc};

const LIKES_CAP: u64 = 100;

/// How likely the model is to keep being maintained.
#[derive(Debug, Clone, Copy, Default)]
pub struct BusFactor;

impl Evaluator for BusFactor {
    fn metric(&self) -> MetricName {
        MetricName::BusFactor
    }

    fn score(&self, metadata: &ModelMetadata, now: DateTime<Utc>) -> Result<Score> {
        let has_author = metadata.author.as_deref().is_some_and(|author| !author.trim().is_empty());

        Ok(Score::scalar(
            0.5 * freshness(metadata.last_modified.as_deref(), now)
                + 0.3 * capped_ratio(metadata.likes, LIKES_CAP)
                + 0.2 * indicator(has_author),
        ))
    }
}
