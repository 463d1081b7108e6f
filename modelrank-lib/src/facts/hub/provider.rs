use super::client::Client;
use crate::Result;
use crate::facts::{FetchResult, MetadataProvider, ModelMetadata};
use core::time::Duration;
use futures::FutureExt;
use futures::future::BoxFuture;
use url::Url;

const LOG_TARGET: &str = "       hub";

/// Fetches model metadata from a Hugging Face compatible hub.
///
/// Each call issues exactly one request and nothing is retried. A throttled request surfaces
/// as [`FetchError::RateLimited`](crate::facts::FetchError::RateLimited).
#[derive(Debug, Clone)]
pub struct HubProvider {
    client: Client,
}

impl HubProvider {
    /// Create a provider talking to `endpoint`, authenticating with `token` when given.
    pub fn new(token: Option<&str>, endpoint: Url, request_timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::new(token, endpoint, request_timeout)?,
        })
    }
}

impl MetadataProvider for HubProvider {
    fn fetch<'a>(&'a self, identifier: &'a str) -> BoxFuture<'a, FetchResult> {
        async move {
            log::debug!(target: LOG_TARGET, "Querying the hub for model '{identifier}'");

            match self.client.get_model(identifier).await {
                Ok(info) => Ok(ModelMetadata::from(info)),
                Err(e) => {
                    log::debug!(target: LOG_TARGET, "Could not fetch metadata for model '{identifier}': {e}");
                    Err(e)
                }
            }
        }
        .boxed()
    }
}
