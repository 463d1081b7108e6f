/// A file stored in a model repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoFile {
    /// Path relative to the repository root
    pub name: String,
    /// Size in bytes, when the registry reports it
    pub size: Option<u64>,
}

impl RepoFile {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), size: None }
    }

    #[must_use]
    pub fn with_size(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size: Some(size),
        }
    }

    /// Lower-cased final path component.
    #[must_use]
    pub fn base_name(&self) -> String {
        self.name.rsplit('/').next().unwrap_or_default().to_ascii_lowercase()
    }
}

/// Lightweight facts about a model, as reported by the registry.
///
/// Every field is optional in spirit: the registry omits fields freely and evaluators
/// treat a missing value as contributing nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelMetadata {
    pub downloads: Option<u64>,
    pub likes: Option<u64>,
    /// Last modification time as reported, unparsed
    pub last_modified: Option<String>,
    pub author: Option<String>,
    /// License declared in the model card
    pub license: Option<String>,
    /// Datasets declared in the model card
    pub datasets: Vec<String>,
    pub tags: Vec<String>,
    /// Whether the model card's model-index carries evaluation results
    pub has_eval_results: bool,
    pub files: Vec<RepoFile>,
    /// Total bytes stored by the repository
    pub used_storage: Option<u64>,
}

impl ModelMetadata {
    /// Whether any file's lower-cased base name satisfies `predicate`.
    pub fn has_file(&self, predicate: impl Fn(&str) -> bool) -> bool {
        self.files.iter().any(|file| predicate(&file.base_name()))
    }

    /// Values of `prefix:value` style tags, e.g. `license:mit` yields `mit` for prefix `license`.
    pub fn tag_values<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.tags.iter().filter_map(move |tag| {
            tag.split_once(':')
                .filter(|(key, value)| key.eq_ignore_ascii_case(prefix) && !value.is_empty())
                .map(|(_, value)| value)
        })
    }

    /// License from the model card, falling back to a `license:` tag.
    #[must_use]
    pub fn declared_license(&self) -> Option<&str> {
        self.license
            .as_deref()
            .map(str::trim)
            .filter(|license| !license.is_empty())
            .or_else(|| self.tag_values("license").next())
    }

    /// Distinct datasets named by the model card or by `dataset:` tags.
    #[must_use]
    pub fn declared_datasets(&self) -> Vec<&str> {
        let mut datasets: Vec<&str> = self
            .datasets
            .iter()
            .map(|dataset| dataset.trim())
            .filter(|dataset| !dataset.is_empty())
            .chain(self.tag_values("dataset"))
            .collect();

        datasets.sort_unstable();
        datasets.dedup();
        datasets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name() {
        assert_eq!(RepoFile::new("onnx/Model.ONNX").base_name(), "model.onnx");
        assert_eq!(RepoFile::new("README.md").base_name(), "readme.md");
    }

    #[test]
    fn test_has_file() {
        let metadata = ModelMetadata {
            files: vec![RepoFile::new("README.md"), RepoFile::new("examples/Demo.ipynb")],
            ..ModelMetadata::default()
        };

        assert!(metadata.has_file(|name| name == "readme.md"));
        assert!(metadata.has_file(|name| name.ends_with(".ipynb")));
        assert!(!metadata.has_file(|name| name == "config.json"));
    }

    #[test]
    fn test_tag_values() {
        let metadata = ModelMetadata {
            tags: vec!["license:mit".into(), "pytorch".into(), "dataset:squad".into(), "license:".into()],
            ..ModelMetadata::default()
        };

        assert_eq!(metadata.tag_values("license").collect::<Vec<_>>(), vec!["mit"]);
        assert_eq!(metadata.tag_values("dataset").collect::<Vec<_>>(), vec!["squad"]);
        assert_eq!(metadata.tag_values("arxiv").count(), 0);
    }

    #[test]
    fn test_declared_license_prefers_card() {
        let metadata = ModelMetadata {
            license: Some("apache-2.0".into()),
            tags: vec!["license:mit".into()],
            ..ModelMetadata::default()
        };
        assert_eq!(metadata.declared_license(), Some("apache-2.0"));
    }

    #[test]
    fn test_declared_license_falls_back_to_tag() {
        let metadata = ModelMetadata {
            license: Some("  ".into()),
            tags: vec!["license:mit".into()],
            ..ModelMetadata::default()
        };
        assert_eq!(metadata.declared_license(), Some("mit"));
    }

    #[test]
    fn test_declared_license_missing() {
        assert_eq!(ModelMetadata::default().declared_license(), None);
    }

    #[test]
    fn test_declared_datasets_are_deduplicated() {
        let metadata = ModelMetadata {
            datasets: vec!["squad".into(), "glue".into()],
            tags: vec!["dataset:squad".into(), "dataset:wikitext".into()],
            ..ModelMetadata::default()
        };
        assert_eq!(metadata.declared_datasets(), vec!["glue", "squad", "wikitext"]);
    }
}
