use super::{Evaluator, MetricName, Score};
use crate::Result;
use crate::facts::ModelMetadata;
use chrono::{DateTime, Utc};

const UNRECOGNIZED: f64 = 0.5;
const MISSING: f64 = 0.0;

/// Compatibility of known licenses with LGPL-2.1 downstream use.
///
/// Matched by prefix against the lower-cased license id, first match wins, so more specific
/// ids must come before the ids they start with.
const LICENSE_SCORES: &[(&str, f64)] = &[
    ("apache-2.0", 1.0),
    ("mit", 1.0),
    ("bsd", 1.0),
    ("isc", 1.0),
    ("zlib", 1.0),
    ("unlicense", 1.0),
    ("cc0", 1.0),
    ("cc-by-sa", 0.8),
    ("cc-by-nc", 0.1),
    ("cc-by-nd", 0.3),
    ("cc-by", 1.0),
    ("lgpl", 1.0),
    ("mpl", 0.8),
    ("epl", 0.6),
    ("openrail", 0.6),
    ("creativeml-openrail", 0.6),
    ("bigscience-openrail", 0.6),
    ("bigscience-bloom-rail", 0.5),
    ("llama", 0.3),
    ("gemma", 0.3),
    ("agpl", 0.0),
    ("gpl", 0.2),
    ("other", 0.2),
    ("unknown", 0.2),
];

/// How freely the model's license allows it to be reused.
#[derive(Debug, Clone, Copy, Default)]
pub struct License;

fn license_score(license: &str) -> f64 {
    let license = license.trim().to_ascii_lowercase();
    LICENSE_SCORES
        .iter()
        .find(|(prefix, _)| license.starts_with(prefix))
        .map_or(UNRECOGNIZED, |(_, score)| *score)
}

impl Evaluator for License {
    fn metric(&self) -> MetricName {
        MetricName::License
    }

    fn score(&self, metadata: &ModelMetadata, _now: DateTime<Utc>) -> Result<Score> {
        Ok(Score::scalar(metadata.declared_license().map_or(MISSING, license_score)))
    }
}
