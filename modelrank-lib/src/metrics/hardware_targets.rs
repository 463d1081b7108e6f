use super::unit_clamp;
use crate::Result;
use ohno::bail;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::sync::Arc;

const BYTES_PER_GB: f64 = 1_000_000_000.0;

/// A class of machine a model might be deployed on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HardwareTarget {
    pub name: String,

    /// Model size at which this target's score drops to zero
    pub capacity_gb: f64,

    /// Score reported when the model's size is unknown
    pub default_score: f64,
}

/// The validated, ordered set of hardware targets scored for every model.
///
/// Targets are ordered by increasing capacity, and default scores never decrease along
/// that order, so a bigger machine never scores an unknown model lower than a smaller one.
#[derive(Debug, Clone, PartialEq)]
pub struct HardwareTargets {
    targets: Arc<[HardwareTarget]>,
}

impl HardwareTargets {
    pub fn new(targets: Vec<HardwareTarget>) -> Result<Self> {
        if targets.is_empty() {
            bail!("at least one hardware target must be configured");
        }

        for (i, target) in targets.iter().enumerate() {
            if target.name.trim().is_empty() {
                bail!("hardware target #{} has an empty name", i + 1);
            }

            if targets[..i].iter().any(|earlier| earlier.name == target.name) {
                bail!("hardware target '{}' is listed more than once", target.name);
            }

            if !target.capacity_gb.is_finite() || target.capacity_gb <= 0.0 {
                bail!("hardware target '{}' must have a positive capacity", target.name);
            }

            if !(0.0..=1.0).contains(&target.default_score) {
                bail!("hardware target '{}' must have a default score between 0 and 1", target.name);
            }

            if let Some(previous) = i.checked_sub(1).map(|p| &targets[p]) {
                if target.capacity_gb <= previous.capacity_gb {
                    bail!(
                        "hardware target '{}' must have a larger capacity than '{}'",
                        target.name,
                        previous.name
                    );
                }

                if target.default_score < previous.default_score {
                    bail!(
                        "hardware target '{}' must not have a lower default score than '{}'",
                        target.name,
                        previous.name
                    );
                }
            }
        }

        Ok(Self { targets: targets.into() })
    }

    pub fn iter(&self) -> impl Iterator<Item = &HardwareTarget> {
        self.targets.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(|target| target.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Scores to report when a model's size is unknown.
    #[must_use]
    pub fn default_scores(&self) -> TargetScores {
        TargetScores {
            entries: self
                .targets
                .iter()
                .map(|target| (Arc::from(target.name.as_str()), target.default_score))
                .collect(),
        }
    }

    /// Score a model of `size_bytes` against every target.
    ///
    /// Each score falls linearly from 1 for an empty model to 0 at the target's capacity.
    #[must_use]
    pub fn scores_for_size(&self, size_bytes: u64) -> TargetScores {
        #[expect(clippy::cast_precision_loss, reason = "model sizes fit comfortably in f64")]
        let size_gb = size_bytes as f64 / BYTES_PER_GB;

        TargetScores {
            entries: self
                .targets
                .iter()
                .map(|target| (Arc::from(target.name.as_str()), unit_clamp(1.0 - size_gb / target.capacity_gb)))
                .collect(),
        }
    }
}

/// One score per hardware target, in configured order.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetScores {
    entries: Vec<(Arc<str>, f64)>,
}

impl TargetScores {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|(n, _)| &**n == name).map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, score)| (&**name, *score))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| &**name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mean over all targets, zero when there are none.
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }

        #[expect(clippy::cast_precision_loss, reason = "target counts are tiny")]
        let count = self.entries.len() as f64;
        unit_clamp(self.entries.iter().map(|(_, score)| score).sum::<f64>() / count)
    }
}

impl Serialize for TargetScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, score) in &self.entries {
            map.serialize_entry(&**name, score)?;
        }
        map.end()
    }
}

#[cfg(test)]
pub(crate) fn standard_targets() -> HardwareTargets {
    let target = |name: &str, capacity_gb: f64, default_score: f64| HardwareTarget {
        name: name.to_string(),
        capacity_gb,
        default_score,
    };

    HardwareTargets::new(vec![
        target("raspberry_pi", 1.0, 0.0),
        target("jetson_nano", 4.0, 0.0),
        target("desktop_pc", 16.0, 0.5),
        target("aws_server", 64.0, 1.0),
    ])
    .unwrap()
}
