use super::{Evaluator, MetricName, Score, indicator};
use crate::Result;
use crate::facts::ModelMetadata;
use chrono::{DateTime, Utc};

/// How well the model backs up claims about its performance.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceClaims;

fn has_results_file(metadata: &ModelMetadata) -> bool {
    metadata.has_file(|name| name.starts_with("eval") || name.contains("results") || name.contains("benchmark"))
}

impl Evaluator for PerformanceClaims {
    fn metric(&self) -> MetricName {
        MetricName::PerformanceClaims
    }

    fn score(&self, metadata: &ModelMetadata, _now: DateTime<Utc>) -> Result<Score> {
        let has_paper = metadata.tag_values("arxiv").next().is_some();

        Ok(Score::scalar(
            0.6 * indicator(metadata.has_eval_results) + 0.2 * indicator(has_paper) + 0.2 * indicator(has_results_file(metadata)),
        ))
    }
}
