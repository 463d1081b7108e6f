use super::Category;
use core::fmt::{Display, Formatter};
use std::sync::Arc;
use url::Url;

/// Hosts serving the model registry.
const REGISTRY_DOMAINS: &[&str] = &["huggingface.co", "hf.co"];

/// Hosts serving source code repositories.
const CODE_DOMAINS: &[&str] = &["github.com", "gitlab.com", "codeberg.org"];

/// A registry path containing this segment addresses a dataset rather than a model.
const DATASETS_SEGMENT: &str = "datasets";

/// Leading registry path segments that carry no part of a model identifier.
const MODEL_PREFIXES: &[&str] = &["models"];

/// A single model scheduled for evaluation.
///
/// The name is what the model is reported under. It is the registry identifier when one could
/// be extracted from the URL, otherwise the URL itself; such a model can't be fetched and
/// scores as a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artifact {
    name: Arc<str>,
    identifier: Option<Arc<str>>,
    category: Category,
}

impl Artifact {
    /// Create a model artifact from its registry identifier.
    #[must_use]
    pub fn model(identifier: impl AsRef<str>) -> Self {
        let identifier: Arc<str> = Arc::from(identifier.as_ref());
        Self {
            name: Arc::clone(&identifier),
            identifier: Some(identifier),
            category: Category::Model,
        }
    }

    /// Create a model artifact for a model URL that names no model, reported under the URL.
    #[must_use]
    pub fn unidentified_model(url: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(url.as_ref().trim()),
            identifier: None,
            category: Category::Model,
        }
    }

    /// Build an artifact for any URL classified as a model.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        if classify(url) != Category::Model {
            return None;
        }

        Some(extract_identifier(url).map_or_else(|| Self::unidentified_model(url), Self::model))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a clone of the name Arc
    #[must_use]
    pub fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// The registry identifier, if the URL named one.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    #[must_use]
    pub fn identifier_arc(&self) -> Option<Arc<str>> {
        self.identifier.clone()
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }
}

impl Display for Artifact {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Classify a URL into the kind of artifact it points at.
///
/// Empty or unparseable input is [`Category::Unknown`]. Registry URLs are datasets when any
/// path segment is `datasets` and models otherwise. Known source hosts are code.
#[must_use]
pub fn classify(url: &str) -> Category {
    parse(url).map_or(Category::Unknown, |parsed| classify_parsed(&parsed))
}

/// Extract the registry identifier from a model URL.
///
/// The identifier is `owner/name` when the path carries two non-empty segments after any
/// reserved prefix, and the lone segment for root-level models such as `gpt2`. Returns `None`
/// for anything that is not a model URL or has no segment left.
#[must_use]
pub fn extract_identifier(url: &str) -> Option<String> {
    let parsed = parse(url)?;
    if classify_parsed(&parsed) != Category::Model {
        return None;
    }

    let mut segments = non_empty_segments(&parsed).peekable();
    if segments
        .peek()
        .is_some_and(|first| MODEL_PREFIXES.iter().any(|prefix| first.eq_ignore_ascii_case(prefix)))
    {
        let _ = segments.next();
    }

    let first = segments.next()?;
    Some(segments.next().map_or_else(|| first.to_string(), |name| format!("{first}/{name}")))
}

fn parse(url: &str) -> Option<Url> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }

    Url::parse(trimmed).ok()
}

fn classify_parsed(url: &Url) -> Category {
    let Some(host) = url.host_str().map(str::to_ascii_lowercase) else {
        return Category::Unknown;
    };

    if host_matches(&host, REGISTRY_DOMAINS) {
        if non_empty_segments(url).any(|segment| segment.eq_ignore_ascii_case(DATASETS_SEGMENT)) {
            Category::Dataset
        } else {
            Category::Model
        }
    } else if host_matches(&host, CODE_DOMAINS) {
        Category::Code
    } else {
        Category::Unknown
    }
}

fn host_matches(host: &str, domains: &[&str]) -> bool {
    domains
        .iter()
        .any(|domain| host == *domain || host.strip_suffix(domain).is_some_and(|prefix| prefix.ends_with('.')))
}

fn non_empty_segments(url: &Url) -> impl Iterator<Item = &str> {
    url.path_segments().into_iter().flatten().filter(|segment| !segment.is_empty())
}
