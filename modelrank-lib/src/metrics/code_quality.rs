use super::dataset_and_code::has_code;
use super::{Evaluator, MetricName, Score, freshness, indicator};
use crate::Result;
use crate::facts::ModelMetadata;
use chrono::{DateTime, Utc};

const PREPROCESSING_CONFIGS: &[&str] = &["tokenizer_config.json", "tokenizer.json", "preprocessor_config.json"];

/// How well the model repository is put together.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeQuality;

impl Evaluator for CodeQuality {
    fn metric(&self) -> MetricName {
        MetricName::CodeQuality
    }

    fn score(&self, metadata: &ModelMetadata, now: DateTime<Utc>) -> Result<Score> {
        let has_config = metadata.has_file(|name| name == "config.json");
        let has_preprocessing = metadata.has_file(|name| PREPROCESSING_CONFIGS.contains(&name));

        Ok(Score::scalar(
            0.3 * indicator(has_config)
                + 0.2 * indicator(has_preprocessing)
                + 0.2 * indicator(has_code(metadata))
                + 0.3 * freshness(metadata.last_modified.as_deref(), now),
        ))
    }
}
