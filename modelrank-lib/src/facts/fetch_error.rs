use core::fmt::{Display, Formatter};
use core::time::Duration;
use std::sync::Arc;

/// Why a metadata fetch did not produce metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The registry has no model under this identifier.
    NotFound,

    /// The registry refused the request's credentials.
    Unauthorized,

    /// The registry throttled the request, optionally saying when to come back.
    RateLimited { retry_after: Option<Duration> },

    /// The request failed in transport or returned an unexpected response.
    Network(Arc<str>),

    /// The request did not complete within its time bound.
    Timeout,
}

impl FetchError {
    pub fn network(message: impl AsRef<str>) -> Self {
        Self::Network(Arc::from(message.as_ref()))
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "model not found"),
            Self::Unauthorized => write!(f, "request unauthorized"),
            Self::RateLimited { retry_after: Some(delay) } => write!(f, "rate limited, retry after {}s", delay.as_secs()),
            Self::RateLimited { retry_after: None } => write!(f, "rate limited"),
            Self::Network(message) => write!(f, "network error: {message}"),
            Self::Timeout => write!(f, "request timed out"),
        }
    }
}

impl core::error::Error for FetchError {}
