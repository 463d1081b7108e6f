use super::{Evaluator, HardwareTargets, MetricName, Score};
use crate::Result;
use crate::facts::ModelMetadata;
use chrono::{DateTime, Utc};

const WEIGHT_EXTENSIONS: &[&str] = &[".safetensors", ".bin", ".pt", ".pth", ".h5", ".onnx", ".gguf", ".ckpt", ".msgpack"];

/// How well the model fits on each configured hardware target.
#[derive(Debug, Clone)]
pub struct Size {
    targets: HardwareTargets,
}

impl Size {
    #[must_use]
    pub const fn new(targets: HardwareTargets) -> Self {
        Self { targets }
    }
}

/// Best estimate of the model's deployed size in bytes.
///
/// Sums the sizes of weight files when any is known, otherwise uses the repository's
/// total storage.
fn model_size(metadata: &ModelMetadata) -> Option<u64> {
    let sizes: Vec<u64> = metadata
        .files
        .iter()
        .filter(|file| {
            let name = file.base_name();
            WEIGHT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
        })
        .filter_map(|file| file.size)
        .collect();

    if sizes.is_empty() {
        metadata.used_storage
    } else {
        Some(sizes.into_iter().fold(0, u64::saturating_add))
    }
}

impl Evaluator for Size {
    fn metric(&self) -> MetricName {
        MetricName::SizeScore
    }

    fn score(&self, metadata: &ModelMetadata, _now: DateTime<Utc>) -> Result<Score> {
        let targets = model_size(metadata).map_or_else(|| self.targets.default_scores(), |size| self.targets.scores_for_size(size));
        Ok(Score::per_target(targets))
    }

    fn fallback(&self) -> Score {
        Score::per_target(self.targets.default_scores())
    }
}
