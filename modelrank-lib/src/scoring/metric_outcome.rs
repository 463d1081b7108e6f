use crate::metrics::{MetricName, Score, TargetScores};
use core::time::Duration;

/// The result of running one metric once for one model.
///
/// A failed outcome always carries a zero score; its latency is the time spent before
/// failing. Per-target metrics keep their full target key set even when failed.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricOutcome {
    metric: MetricName,
    score: f64,
    latency_ms: u64,
    ok: bool,
    targets: Option<TargetScores>,
}

impl MetricOutcome {
    #[must_use]
    pub fn succeeded(metric: MetricName, score: Score, latency: Duration) -> Self {
        Self {
            metric,
            score: score.value(),
            latency_ms: millis(latency),
            ok: true,
            targets: score.into_targets(),
        }
    }

    /// A failed outcome, reporting `targets` for per-target metrics.
    #[must_use]
    pub fn failed(metric: MetricName, latency: Duration, targets: Option<TargetScores>) -> Self {
        Self {
            metric,
            score: 0.0,
            latency_ms: millis(latency),
            ok: false,
            targets,
        }
    }

    #[must_use]
    pub const fn metric(&self) -> MetricName {
        self.metric
    }

    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub const fn latency_ms(&self) -> u64 {
        self.latency_ms
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.ok
    }

    #[must_use]
    pub const fn targets(&self) -> Option<&TargetScores> {
        self.targets.as_ref()
    }
}

pub(crate) fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
