//! Metric evaluators
//!
//! Every model is scored on a fixed set of metrics, named by [`MetricName`]. Each metric has
//! one [`Evaluator`], a pure function from a model's metadata to a [`Score`] in `[0, 1]`.
//! Evaluators never fetch anything themselves; the scoring layer fetches metadata once per
//! model and hands the same snapshot to every evaluator.
//!
//! # Implementation Model
//!
//! The [`Registry`] holds the evaluators for a run and is checked when it is built: a
//! missing or duplicated metric is a configuration error, caught before any model is scored.
//!
//! Most metrics produce a single value. The size metric instead scores the model against
//! each configured [`HardwareTargets`] entry, producing [`TargetScores`] whose mean serves as
//! its scalar value. Several metrics fold in [`freshness`], a bucketed measure of how
//! recently the model was modified.
//!
//! When metadata cannot be fetched, the scoring layer uses [`Evaluator::fallback`] instead,
//! which is zero for every metric except size, where it reports each target's configured
//! default.

mod bus_factor;
mod code_quality;
mod dataset_and_code;
mod dataset_quality;
mod evaluator;
mod freshness;
mod hardware_targets;
mod license;
mod metric_name;
mod performance_claims;
mod ramp_up;
mod registry;
mod score;
mod size;

pub use bus_factor::BusFactor;
pub use code_quality::CodeQuality;
pub use dataset_and_code::DatasetAndCode;
pub use dataset_quality::DatasetQuality;
pub use evaluator::Evaluator;
pub use freshness::freshness;
pub use hardware_targets::{HardwareTarget, HardwareTargets, TargetScores};
pub use license::License;
pub use metric_name::MetricName;
pub use performance_claims::PerformanceClaims;
pub use ramp_up::RampUp;
pub use registry::Registry;
pub use score::{Score, capped_ratio, indicator, unit_clamp};
pub use size::Size;
