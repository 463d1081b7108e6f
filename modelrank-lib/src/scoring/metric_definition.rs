use crate::Result;
use crate::metrics::MetricName;
use ohno::bail;

/// A metric's weight in the net score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDefinition {
    name: MetricName,
    weight: f64,
}

impl MetricDefinition {
    /// Weights must be finite and non-negative.
    pub fn new(name: MetricName, weight: f64) -> Result<Self> {
        if !weight.is_finite() || weight < 0.0 {
            bail!("weight for metric '{name}' must be a non-negative number, got {weight}");
        }

        Ok(Self { name, weight })
    }

    #[must_use]
    pub const fn name(&self) -> MetricName {
        self.name
    }

    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}
