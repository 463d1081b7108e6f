use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The closed set of metrics computed for every model.
///
/// Declaration order is the canonical order used for record fields.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MetricName {
    RampUpTime,
    BusFactor,
    PerformanceClaims,
    License,
    SizeScore,
    DatasetAndCodeScore,
    DatasetQuality,
    CodeQuality,
}

impl MetricName {
    /// Record key holding this metric's latency.
    #[must_use]
    pub const fn latency_key(self) -> &'static str {
        match self {
            Self::RampUpTime => "ramp_up_time_latency",
            Self::BusFactor => "bus_factor_latency",
            Self::PerformanceClaims => "performance_claims_latency",
            Self::License => "license_latency",
            Self::SizeScore => "size_score_latency",
            Self::DatasetAndCodeScore => "dataset_and_code_score_latency",
            Self::DatasetQuality => "dataset_quality_latency",
            Self::CodeQuality => "code_quality_latency",
        }
    }

    /// Record key holding this metric's score.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.into()
    }
}
