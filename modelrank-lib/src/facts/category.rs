use serde::Serialize;
use strum::{Display, EnumIter, IntoStaticStr};

/// The kind of artifact a URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, IntoStaticStr, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Model,
    Dataset,
    Code,
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_is_upper_case() {
        assert_eq!(Category::Model.to_string(), "MODEL");
        assert_eq!(Category::Dataset.to_string(), "DATASET");
        assert_eq!(Category::Code.to_string(), "CODE");
        assert_eq!(Category::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_serialize_matches_display() {
        for category in Category::iter() {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }
}
