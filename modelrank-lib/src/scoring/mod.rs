//! Concurrent scoring of models
//!
//! The [`Orchestrator`] takes a batch of model [`Artifact`](crate::facts::Artifact)s and runs
//! every registered evaluator for each of them, producing one [`ScoreRecord`] per model.
//!
//! # Implementation Model
//!
//! Each metric of each model runs as its own tokio task. Tasks take a permit from a shared
//! throttler before starting, then fetch the model's metadata (shared by all metrics of that
//! model) and score it, all under a per-metric timeout. Whatever happens inside a task ends
//! up as a [`MetricOutcome`]: a fetch failure, an evaluator error, or a timeout each produce
//! a failed outcome with a zero score, leaving the model's other metrics untouched.
//!
//! Once all of a model's outcomes are in, the [`net_score`] is computed as the weighted
//! average of the successful ones, using the [`MetricDefinition`] weights supplied at
//! construction. Records are tagged with their input position and released strictly in
//! input order.

mod metric_definition;
mod metric_outcome;
mod net_score;
mod orchestrator;
mod score_record;

pub use metric_definition::MetricDefinition;
pub use metric_outcome::MetricOutcome;
pub use net_score::net_score;
pub use orchestrator::{BatchSummary, Orchestrator};
pub use score_record::ScoreRecord;
