use super::MetricOutcome;
use super::metric_outcome::millis;
use crate::facts::{Artifact, Category};
use crate::metrics::MetricName;
use core::time::Duration;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Everything computed for one model.
///
/// Serializes to a flat object with a fixed key order: `name`, `category`, `net_score`,
/// `net_score_latency`, then each metric's score followed by its `_latency`, in canonical
/// metric order. Per-target metrics serialize their score as an object keyed by target name.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    name: Arc<str>,
    category: Category,
    net_score: f64,
    net_score_latency_ms: u64,
    outcomes: Vec<MetricOutcome>,
}

impl ScoreRecord {
    #[must_use]
    pub fn new(artifact: &Artifact, net_score: f64, net_score_latency: Duration, mut outcomes: Vec<MetricOutcome>) -> Self {
        outcomes.sort_by_key(MetricOutcome::metric);

        Self {
            name: artifact.name_arc(),
            category: artifact.category(),
            net_score,
            net_score_latency_ms: millis(net_score_latency),
            outcomes,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub const fn net_score(&self) -> f64 {
        self.net_score
    }

    #[must_use]
    pub const fn net_score_latency_ms(&self) -> u64 {
        self.net_score_latency_ms
    }

    #[must_use]
    pub fn outcome(&self, metric: MetricName) -> Option<&MetricOutcome> {
        self.outcomes.iter().find(|outcome| outcome.metric() == metric)
    }

    #[must_use]
    pub fn outcomes(&self) -> &[MetricOutcome] {
        &self.outcomes
    }
}

impl Serialize for ScoreRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4 + 2 * self.outcomes.len()))?;
        map.serialize_entry("name", &*self.name)?;
        map.serialize_entry("category", &self.category)?;
        map.serialize_entry("net_score", &self.net_score)?;
        map.serialize_entry("net_score_latency", &self.net_score_latency_ms)?;

        for outcome in &self.outcomes {
            let metric = outcome.metric();
            match outcome.targets() {
                Some(targets) => map.serialize_entry(metric.key(), targets)?,
                None => map.serialize_entry(metric.key(), &outcome.score())?,
            }
            map.serialize_entry(metric.latency_key(), &outcome.latency_ms())?;
        }

        map.end()
    }
}
