//! Schema keys and their variable-name tokens.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{ENV_SEGMENT_SEPARATOR, NAMESPACE_QUALIFIER, QUALIFIED_SEPARATOR};

/// One key in a schema path.
///
/// A key containing `::` is a qualified identifier (for example
/// `::my_app::Repo`). Qualified keys keep their raw text as the tree key but
/// collapse to a single underscore-joined token when a variable name is
/// derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    /// A plain field name such as `server_count`.
    Name(String),
    /// A namespaced identifier such as `::my_app::Repo`.
    Qualified(String),
}

impl Segment {
    /// Classify a raw key.
    pub fn parse(raw: &str) -> Self {
        if raw.contains(QUALIFIED_SEPARATOR) {
            Segment::Qualified(raw.to_string())
        } else {
            Segment::Name(raw.to_string())
        }
    }

    /// The raw key text, used as the key in resolved trees.
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Name(name) | Segment::Qualified(name) => name,
        }
    }

    /// The token this segment contributes to a variable name, before upper-casing.
    pub fn env_token(&self) -> String {
        match self {
            Segment::Name(name) => name.clone(),
            Segment::Qualified(name) => name
                .strip_prefix(NAMESPACE_QUALIFIER)
                .unwrap_or(name)
                .replace(QUALIFIED_SEPARATOR, ENV_SEGMENT_SEPARATOR),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl Default for Segment {
    fn default() -> Self {
        Segment::Name(String::new())
    }
}

impl From<&str> for Segment {
    fn from(raw: &str) -> Self {
        Segment::parse(raw)
    }
}

impl From<String> for Segment {
    fn from(raw: String) -> Self {
        Segment::parse(&raw)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Segment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Segment::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_key_is_name() {
        let segment = Segment::parse("server_count");
        assert_eq!(segment, Segment::Name("server_count".to_string()));
        assert_eq!(segment.env_token(), "server_count");
    }

    #[test]
    fn test_qualified_key_strips_root_and_joins_with_underscore() {
        let segment = Segment::parse("::my_app::Repo");
        assert!(matches!(segment, Segment::Qualified(_)));
        assert_eq!(segment.as_str(), "::my_app::Repo");
        assert_eq!(segment.env_token(), "my_app_Repo");
    }

    #[test]
    fn test_relative_qualified_key_keeps_first_part() {
        let segment = Segment::parse("my_app::sys_logger");
        assert_eq!(segment.env_token(), "my_app_sys_logger");
    }

    #[test]
    fn test_default_segment_is_empty() {
        assert!(Segment::default().is_empty());
    }
}
