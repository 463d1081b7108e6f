use super::{MetricDefinition, MetricOutcome, ScoreRecord, net_score};
use crate::Result;
use crate::facts::{Artifact, FetchError, MetadataCache, MetadataProvider, Throttler};
use crate::metrics::{Evaluator, Registry, TargetScores};
use chrono::{DateTime, Utc};
use core::time::Duration;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use ohno::{app_err, bail};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

const LOG_TARGET: &str = "   scoring";

/// Outcome of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Models scored and handed to the sink
    pub scored: usize,

    /// Models never admitted because the batch was shut down first
    pub skipped: usize,
}

/// Runs every metric for every model and assembles the results.
///
/// All metric tasks of a batch share one [`Throttler`], so at most `concurrency` metrics run
/// at any time, whichever models they belong to. Each metric runs under its own timeout and
/// never affects its siblings: a failed fetch, a failed evaluator, or a timeout only turns
/// that metric's outcome into a failed one.
#[derive(Debug)]
pub struct Orchestrator {
    registry: Registry,
    definitions: Arc<[MetricDefinition]>,
    cache: Arc<MetadataCache>,
    throttler: Arc<Throttler>,
    metric_timeout: Duration,
    concurrency: usize,
}

impl Orchestrator {
    /// Create an orchestrator.
    ///
    /// Every metric in `registry` needs a definition, otherwise the net score would silently
    /// ignore it.
    pub fn new(
        registry: Registry,
        definitions: Vec<MetricDefinition>,
        provider: Arc<dyn MetadataProvider>,
        concurrency: usize,
        metric_timeout: Duration,
    ) -> Result<Self> {
        for evaluator in registry.iter() {
            let metric = evaluator.metric();
            if !definitions.iter().any(|d| d.name() == metric) {
                bail!("no weight defined for metric '{metric}'");
            }
        }

        if metric_timeout.is_zero() {
            bail!("the metric timeout must be greater than zero");
        }

        let concurrency = concurrency.max(1);
        let throttler = Throttler::new(concurrency);

        Ok(Self {
            registry,
            definitions: definitions.into(),
            cache: Arc::new(MetadataCache::new(provider)),
            throttler,
            metric_timeout,
            concurrency,
        })
    }

    /// The throttler shared by this orchestrator's tasks. Close it to stop admitting models.
    #[must_use]
    pub fn throttler(&self) -> Arc<Throttler> {
        Arc::clone(&self.throttler)
    }

    /// Score every model, handing records to `sink` in input order.
    ///
    /// Up to `concurrency` models are in flight at once. A record is passed on as soon as every
    /// record before it has been, so output streams while later models are still scoring.
    /// Once the throttler is closed, no further models are admitted; those already admitted
    /// finish and are emitted, the rest are counted as skipped.
    ///
    /// # Errors
    ///
    /// Fails when a metric task panics or when `sink` fails. Nothing after the failure is emitted.
    pub async fn score_batch<F>(&self, artifacts: Vec<Artifact>, mut sink: F) -> Result<BatchSummary>
    where
        F: FnMut(ScoreRecord) -> Result<()>,
    {
        let total = artifacts.len();
        let mut pending = artifacts.into_iter().enumerate();
        let mut in_flight = FuturesUnordered::new();
        let mut ready = BTreeMap::new();
        let mut next_index = 0;

        loop {
            while in_flight.len() < self.concurrency && !self.throttler.is_closed() {
                let Some((index, artifact)) = pending.next() else {
                    break;
                };

                in_flight.push(async move { (index, self.score_artifact(&artifact).await) });
            }

            let Some((index, result)) = in_flight.next().await else {
                break;
            };

            let _ = ready.insert(index, result?);

            while let Some(record) = ready.remove(&next_index) {
                sink(record)?;
                next_index += 1;
            }
        }

        let summary = BatchSummary {
            scored: next_index,
            skipped: total - next_index,
        };

        if summary.skipped > 0 {
            log::warn!(target: LOG_TARGET, "Shut down before scoring {} model(s)", summary.skipped);
        }

        Ok(summary)
    }

    /// Score every model and collect the records in input order.
    pub async fn score_all(&self, artifacts: Vec<Artifact>) -> Result<Vec<ScoreRecord>> {
        let mut records = Vec::with_capacity(artifacts.len());
        let _ = self
            .score_batch(artifacts, |record| {
                records.push(record);
                Ok(())
            })
            .await?;

        Ok(records)
    }

    /// Run every metric for one model and assemble its record.
    ///
    /// # Errors
    ///
    /// Fails only when a metric task panics.
    pub async fn score_artifact(&self, artifact: &Artifact) -> Result<ScoreRecord> {
        let now = Utc::now();
        log::debug!(target: LOG_TARGET, "Scoring model '{artifact}'");

        let tasks: Vec<_> = self
            .registry
            .iter()
            .map(|evaluator| {
                let task = MetricTask {
                    evaluator: Arc::clone(evaluator),
                    name: artifact.name_arc(),
                    identifier: artifact.identifier_arc(),
                    cache: Arc::clone(&self.cache),
                    throttler: Arc::clone(&self.throttler),
                    timeout: self.metric_timeout,
                    now,
                };

                (evaluator.metric(), tokio::spawn(task.run()))
            })
            .collect();

        let mut outcomes = Vec::with_capacity(tasks.len());
        for (metric, handle) in tasks {
            let outcome = handle
                .await
                .map_err(|e| app_err!("metric '{metric}' for model '{artifact}' crashed: {e}"))?;
            outcomes.push(outcome);
        }

        if let Some(identifier) = artifact.identifier() {
            self.cache.evict(identifier);
        }

        let start = Instant::now();
        let net = net_score(&outcomes, &self.definitions);
        let net_latency = start.elapsed();

        log::debug!(target: LOG_TARGET, "Model '{artifact}' scored {net:.3}");

        Ok(ScoreRecord::new(artifact, net, net_latency, outcomes))
    }
}

/// One metric's evaluation of one model, run as its own task.
struct MetricTask {
    evaluator: Arc<dyn Evaluator>,
    name: Arc<str>,
    identifier: Option<Arc<str>>,
    cache: Arc<MetadataCache>,
    throttler: Arc<Throttler>,
    timeout: Duration,
    now: DateTime<Utc>,
}

enum Failure {
    Fetch(FetchError),
    Evaluate(ohno::AppError),
}

impl MetricTask {
    async fn run(self) -> MetricOutcome {
        let _permit = self.throttler.acquire().await;

        let metric = self.evaluator.metric();
        let start = Instant::now();

        let evaluation = async {
            let identifier = self.identifier.as_ref().ok_or(Failure::Fetch(FetchError::NotFound))?;
            let metadata = self.cache.get(identifier).await.map_err(Failure::Fetch)?;
            self.evaluator.score(&metadata, self.now).map_err(Failure::Evaluate)
        };

        match tokio::time::timeout(self.timeout, evaluation).await {
            Ok(Ok(score)) => MetricOutcome::succeeded(metric, score, start.elapsed()),

            Ok(Err(Failure::Fetch(e))) => {
                log::debug!(target: LOG_TARGET, "Using the fallback {metric} score for '{}': {e}", self.name);
                MetricOutcome::failed(metric, start.elapsed(), self.fallback_targets())
            }

            Ok(Err(Failure::Evaluate(e))) => {
                log::error!(target: LOG_TARGET, "Could not compute {metric} for '{}': {e}", self.name);
                MetricOutcome::failed(metric, start.elapsed(), self.fallback_targets())
            }

            Err(_) => {
                log::warn!(
                    target: LOG_TARGET,
                    "Timed out computing {metric} for '{}' after {}ms",
                    self.name,
                    self.timeout.as_millis()
                );
                MetricOutcome::failed(metric, self.timeout, self.fallback_targets())
            }
        }
    }

    /// Per-target scores reported by a failed outcome: the same defaults used for an unknown size.
    fn fallback_targets(&self) -> Option<TargetScores> {
        self.evaluator.fallback().into_targets()
    }
}
