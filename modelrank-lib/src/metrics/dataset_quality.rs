use super::{Evaluator, MetricName, Score, freshness};
use crate::Result;
use crate::facts::ModelMetadata;
use chrono::{DateTime, Utc};

const DATASETS_CAP: usize = 3;

/// How well documented the model's training data is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetQuality;

impl Evaluator for DatasetQuality {
    fn metric(&self) -> MetricName {
        MetricName::DatasetQuality
    }

    fn score(&self, metadata: &ModelMetadata, now: DateTime<Utc>) -> Result<Score> {
        let datasets = metadata.declared_datasets().len();
        if datasets == 0 {
            return Ok(Score::scalar(0.0));
        }

        #[expect(clippy::cast_precision_loss, reason = "dataset counts are tiny")]
        let coverage = datasets.min(DATASETS_CAP) as f64 / DATASETS_CAP as f64;

        Ok(Score::scalar(0.7 * coverage + 0.3 * freshness(metadata.last_modified.as_deref(), now)))
    }
}
