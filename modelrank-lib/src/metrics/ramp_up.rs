use super::{Evaluator, MetricName, Score, capped_ratio, indicator};
use crate::Result;
use crate::facts::ModelMetadata;
use chrono::{DateTime, Utc};

const README_WEIGHT: f64 = 0.30;
const EXAMPLES_WEIGHT: f64 = 0.25;
const DOWNLOADS_WEIGHT: f64 = 0.25;
const LIKES_WEIGHT: f64 = 0.20;

const DOWNLOADS_CAP: u64 = 50_000;
const LIKES_CAP: u64 = 500;

const EXAMPLE_MARKERS: &[&str] = &["example", "usage", "demo", "notebook", ".ipynb"];

/// How quickly a newcomer can get going with the model.
#[derive(Debug, Clone, Copy, Default)]
pub struct RampUp;

impl Evaluator for RampUp {
    fn metric(&self) -> MetricName {
        MetricName::RampUpTime
    }

    fn score(&self, metadata: &ModelMetadata, _now: DateTime<Utc>) -> Result<Score> {
        let has_readme = metadata.has_file(|name| name.starts_with("readme"));
        let has_examples = metadata.files.iter().any(|file| {
            let path = file.name.to_ascii_lowercase();
            EXAMPLE_MARKERS.iter().any(|marker| path.contains(marker))
        });

        Ok(Score::scalar(
            README_WEIGHT * indicator(has_readme)
                + EXAMPLES_WEIGHT * indicator(has_examples)
                + DOWNLOADS_WEIGHT * capped_ratio(metadata.downloads, DOWNLOADS_CAP)
                + LIKES_WEIGHT * capped_ratio(metadata.likes, LIKES_CAP),
        ))
    }
}
