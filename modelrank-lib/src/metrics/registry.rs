use super::{
    BusFactor, CodeQuality, DatasetAndCode, DatasetQuality, Evaluator, HardwareTargets, License, MetricName, PerformanceClaims,
    RampUp, Size,
};
use crate::Result;
use ohno::bail;
use std::sync::Arc;
use strum::IntoEnumIterator;

/// The evaluators run for every model, one per metric, in canonical metric order.
#[derive(Debug, Clone)]
pub struct Registry {
    evaluators: Arc<[Arc<dyn Evaluator>]>,
}

impl Registry {
    /// Build a registry, checking that every metric has exactly one evaluator.
    pub fn new(mut evaluators: Vec<Arc<dyn Evaluator>>) -> Result<Self> {
        for name in MetricName::iter() {
            match evaluators.iter().filter(|e| e.metric() == name).count() {
                0 => bail!("no evaluator registered for metric '{name}'"),
                1 => {}
                n => bail!("{n} evaluators registered for metric '{name}', expected exactly one"),
            }
        }

        evaluators.sort_by_key(|e| e.metric());

        Ok(Self {
            evaluators: evaluators.into(),
        })
    }

    /// The standard evaluator set, scoring size against `targets`.
    pub fn standard(targets: &HardwareTargets) -> Result<Self> {
        Self::new(vec![
            Arc::new(RampUp),
            Arc::new(BusFactor),
            Arc::new(PerformanceClaims),
            Arc::new(License),
            Arc::new(Size::new(targets.clone())),
            Arc::new(DatasetAndCode),
            Arc::new(DatasetQuality),
            Arc::new(CodeQuality),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Evaluator>> {
        self.evaluators.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }
}
