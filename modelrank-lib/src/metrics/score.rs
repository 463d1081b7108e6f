use super::TargetScores;

/// Clamp a value into `[0, 1]`, mapping NaN to zero.
#[must_use]
pub fn unit_clamp(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

/// `count / cap`, capped at 1. A missing count contributes nothing.
#[must_use]
pub fn capped_ratio(count: Option<u64>, cap: u64) -> f64 {
    #[expect(clippy::cast_precision_loss, reason = "popularity counters fit in f64")]
    let ratio = count.map_or(0.0, |count| count as f64 / cap.max(1) as f64);
    unit_clamp(ratio)
}

/// 1 when `present`, else 0.
#[must_use]
pub const fn indicator(present: bool) -> f64 {
    if present { 1.0 } else { 0.0 }
}

/// The value an evaluator produces for one model.
///
/// Scalar metrics carry a single value. Per-target metrics carry one value per hardware
/// target plus their mean as the scalar. Every value is clamped to `[0, 1]` on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    value: f64,
    targets: Option<TargetScores>,
}

impl Score {
    #[must_use]
    pub fn scalar(value: f64) -> Self {
        Self {
            value: unit_clamp(value),
            targets: None,
        }
    }

    #[must_use]
    pub fn per_target(targets: TargetScores) -> Self {
        Self {
            value: targets.mean(),
            targets: Some(targets),
        }
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub const fn targets(&self) -> Option<&TargetScores> {
        self.targets.as_ref()
    }

    #[must_use]
    pub fn into_targets(self) -> Option<TargetScores> {
        self.targets
    }
}
