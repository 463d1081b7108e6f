//! Hugging Face hub API client
//!
//! Minimal client for the model-info endpoint, classifying every response into either
//! decoded model info or a [`FetchError`].

use crate::facts::{FetchError, ModelMetadata, RepoFile};
use core::time::Duration;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// Model info as returned by `GET /api/models/{owner}/{name}?blobs=true`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub author: Option<String>,
    pub downloads: Option<u64>,
    pub likes: Option<u64>,
    pub last_modified: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub card_data: Option<CardData>,
    #[serde(default)]
    pub siblings: Vec<Sibling>,
    pub used_storage: Option<u64>,
    #[serde(rename = "model-index")]
    pub model_index: Option<Value>,
}

/// The subset of the model card's front matter we care about
#[derive(Debug, Default, Deserialize)]
pub struct CardData {
    pub license: Option<OneOrMany>,
    pub datasets: Option<OneOrMany>,
    #[serde(rename = "model-index")]
    pub model_index: Option<Value>,
}

/// Card fields that may hold a single string or a list of strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

/// A file in the model repository
#[derive(Debug, Deserialize)]
pub struct Sibling {
    pub rfilename: String,
    pub size: Option<u64>,
}

impl From<ModelInfo> for ModelMetadata {
    fn from(info: ModelInfo) -> Self {
        let card = info.card_data.unwrap_or_default();
        let has_eval_results = [info.model_index.as_ref(), card.model_index.as_ref()]
            .into_iter()
            .flatten()
            .any(index_has_results);

        Self {
            downloads: info.downloads,
            likes: info.likes,
            last_modified: info.last_modified,
            author: info.author,
            license: card.license.and_then(|license| license.into_vec().into_iter().next()),
            datasets: card.datasets.map(OneOrMany::into_vec).unwrap_or_default(),
            tags: info.tags,
            has_eval_results,
            files: info
                .siblings
                .into_iter()
                .map(|sibling| RepoFile {
                    name: sibling.rfilename,
                    size: sibling.size,
                })
                .collect(),
            used_storage: info.used_storage,
        }
    }
}

/// Whether a model-index lists at least one entry with non-empty results.
fn index_has_results(index: &Value) -> bool {
    index.as_array().is_some_and(|entries| {
        entries
            .iter()
            .any(|entry| entry.get("results").and_then(Value::as_array).is_some_and(|results| !results.is_empty()))
    })
}

/// Hub API client
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    endpoint: Url,
}

impl Client {
    /// Create a new hub client with optional bearer token
    pub fn new(token: Option<&str>, endpoint: Url, request_timeout: Duration) -> crate::Result<Self> {
        use reqwest::header::{AUTHORIZATION, HeaderValue};

        let mut client_builder = reqwest::Client::builder().user_agent("modelrank").timeout(request_timeout);

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("Bearer {t}"))?;
            auth_val.set_sensitive(true);

            let mut headers = HeaderMap::new();
            let _ = headers.insert(AUTHORIZATION, auth_val);

            client_builder = client_builder.default_headers(headers);
        }

        Ok(Self {
            client: client_builder.build()?,
            endpoint,
        })
    }

    #[must_use]
    pub fn model_url(&self, identifier: &str) -> String {
        format!("{}/api/models/{identifier}?blobs=true", self.endpoint.as_str().trim_end_matches('/'))
    }

    /// Fetch and decode model info, making exactly one request
    pub async fn get_model(&self, identifier: &str) -> Result<ModelInfo, FetchError> {
        let resp = self
            .client
            .get(self.model_url(identifier))
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        if let Some(error) = status_error(resp.status(), resp.headers()) {
            return Err(error);
        }

        resp.json::<ModelInfo>().await.map_err(|e| transport_error(&e))
    }
}

/// Map a non-success status to the matching fetch error
fn status_error(status: StatusCode, headers: &HeaderMap) -> Option<FetchError> {
    if status.is_success() {
        return None;
    }

    Some(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FetchError::Unauthorized,
        StatusCode::NOT_FOUND => FetchError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => FetchError::RateLimited {
            retry_after: parse_retry_after(headers),
        },
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => FetchError::Timeout,
        other => FetchError::network(format!("unexpected HTTP status {other}")),
    })
}

fn transport_error(error: &reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_decode() {
        FetchError::network(format!("invalid response body: {error}"))
    } else {
        FetchError::network(error.to_string())
    }
}

/// Parse the `Retry-After` header value as seconds.
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    let s = headers.get(RETRY_AFTER).and_then(|h| h.to_str().ok())?;
    s.trim().parse::<u64>().ok().map(Duration::from_secs)
}
