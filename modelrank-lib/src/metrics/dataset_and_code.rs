use super::{Evaluator, MetricName, Score, indicator};
use crate::Result;
use crate::facts::ModelMetadata;
use chrono::{DateTime, Utc};

/// Whether the repository ships runnable code.
pub(super) fn has_code(metadata: &ModelMetadata) -> bool {
    metadata.has_file(|name| {
        let path = std::path::Path::new(name);
        name == "requirements.txt"
            || path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("py") || ext.eq_ignore_ascii_case("ipynb"))
    })
}

/// Whether the training data and code behind the model are available.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetAndCode;

impl Evaluator for DatasetAndCode {
    fn metric(&self) -> MetricName {
        MetricName::DatasetAndCodeScore
    }

    fn score(&self, metadata: &ModelMetadata, _now: DateTime<Utc>) -> Result<Score> {
        let has_datasets = !metadata.declared_datasets().is_empty();
        Ok(Score::scalar(0.5 * indicator(has_datasets) + 0.5 * indicator(has_code(metadata))))
    }
}
