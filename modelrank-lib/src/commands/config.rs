use crate::Result;
use crate::metrics::{HardwareTarget, HardwareTargets, MetricName};
use crate::scoring::MetricDefinition;
use camino::Utf8Path;
use core::time::Duration;
use ohno::{IntoAppError, app_err, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use strum::IntoEnumIterator;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

const MAX_DEFAULT_CONCURRENCY: usize = 8;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum number of models in flight, and of metric tasks running at once
    #[serde(default)]
    pub concurrency: Option<usize>,

    /// Time allowed for one metric of one model, including its metadata fetch
    #[serde(with = "humantime_serde")]
    pub metric_timeout: Duration,

    /// Time allowed for a single request to the hub
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Base URL of the hub
    pub hub_endpoint: String,

    /// Weight of each metric in the net score
    pub weights: BTreeMap<MetricName, f64>,

    /// Machines the size score is computed for, smallest first
    pub hardware_targets: Vec<HardwareTarget>,
}

impl Config {
    /// Load configuration from a file, or use the built-in defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(config_path: Option<&Utf8Path>) -> Result<Self> {
        let Some(path) = config_path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{path}'"))?;
        config.validate().map_err(|e| app_err!("invalid configuration file '{path}': {e}"))?;

        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value found
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == Some(0) {
            bail!("concurrency must be at least 1");
        }

        if self.metric_timeout.is_zero() {
            bail!("metric_timeout must be greater than zero");
        }

        if self.request_timeout.is_zero() {
            bail!("request_timeout must be greater than zero");
        }

        let _ = self.hub_endpoint()?;
        let _ = self.metric_definitions()?;
        let _ = self.hardware_targets()?;

        Ok(())
    }

    /// The configured concurrency, or the number of available CPUs capped at 8.
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.concurrency.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map_or(1, core::num::NonZeroUsize::get)
                .min(MAX_DEFAULT_CONCURRENCY)
        })
    }

    pub fn hub_endpoint(&self) -> Result<Url> {
        let url = Url::parse(&self.hub_endpoint).into_app_err_with(|| format!("parsing hub_endpoint '{}'", self.hub_endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("hub_endpoint must be an http or https URL, got '{}'", self.hub_endpoint);
        }

        Ok(url)
    }

    /// One definition per metric, in canonical metric order.
    pub fn metric_definitions(&self) -> Result<Vec<MetricDefinition>> {
        MetricName::iter()
            .map(|name| {
                let weight = self
                    .weights
                    .get(&name)
                    .ok_or_else(|| app_err!("no weight configured for metric '{name}'"))?;
                MetricDefinition::new(name, *weight)
            })
            .collect()
    }

    pub fn hardware_targets(&self) -> Result<HardwareTargets> {
        HardwareTargets::new(self.hardware_targets.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
