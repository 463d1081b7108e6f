use super::{MetricDefinition, MetricOutcome};
use crate::metrics::unit_clamp;

/// Weighted average of the successful outcomes' scores.
///
/// Failed outcomes and metrics without a definition take no part. Zero when nothing is
/// left to average, either because every metric failed or because the weights sum to zero.
#[must_use]
pub fn net_score(outcomes: &[MetricOutcome], definitions: &[MetricDefinition]) -> f64 {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;

    for outcome in outcomes.iter().filter(|outcome| outcome.is_ok()) {
        if let Some(definition) = definitions.iter().find(|d| d.name() == outcome.metric()) {
            weighted += outcome.score() * definition.weight();
            total_weight += definition.weight();
        }
    }

    if total_weight > 0.0 {
        unit_clamp(weighted / total_weight)
    } else {
        0.0
    }
}
