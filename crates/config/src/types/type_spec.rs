//! Type descriptors for schema leaves.
//!
//! Responsibilities:
//! - Define the closed set of value types a leaf can declare.
//! - Decode and encode the JSON form used in schema files.
//!
//! Does NOT handle:
//! - Parsing raw strings into values (see `loader::convert`).
//!
//! Invariants:
//! - Collection separators are non-empty literal strings.
//! - Collections nest arbitrarily, though one element level is the common case.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SEPARATOR;

/// Declared type of a schema leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TypeSpecRepr", into = "TypeSpecRepr")]
pub enum TypeSpec {
    String,
    Integer,
    Float,
    Boolean,
    /// Fixed-size ordered collection split on `separator`.
    Tuple {
        element: Box<TypeSpec>,
        separator: String,
    },
    /// Variable-length ordered collection split on `separator`.
    List {
        element: Box<TypeSpec>,
        separator: String,
    },
}

impl TypeSpec {
    /// Tuple of `element` separated by commas.
    pub fn tuple(element: TypeSpec) -> Self {
        Self::tuple_with_separator(element, DEFAULT_SEPARATOR)
    }

    pub fn tuple_with_separator(element: TypeSpec, separator: impl Into<String>) -> Self {
        TypeSpec::Tuple {
            element: Box::new(element),
            separator: separator.into(),
        }
    }

    /// List of `element` separated by commas.
    pub fn list(element: TypeSpec) -> Self {
        Self::list_with_separator(element, DEFAULT_SEPARATOR)
    }

    pub fn list_with_separator(element: TypeSpec, separator: impl Into<String>) -> Self {
        TypeSpec::List {
            element: Box::new(element),
            separator: separator.into(),
        }
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpec::String => f.write_str("string"),
            TypeSpec::Integer => f.write_str("integer"),
            TypeSpec::Float => f.write_str("float"),
            TypeSpec::Boolean => f.write_str("boolean"),
            TypeSpec::Tuple { element, separator } => {
                write_collection(f, "tuple", element, separator)
            }
            TypeSpec::List { element, separator } => write_collection(f, "list", element, separator),
        }
    }
}

fn write_collection(
    f: &mut fmt::Formatter<'_>,
    kind: &str,
    element: &TypeSpec,
    separator: &str,
) -> fmt::Result {
    if separator == DEFAULT_SEPARATOR {
        write!(f, "{kind}<{element}>")
    } else {
        write!(f, "{kind}<{element}, {separator:?}>")
    }
}

/// JSON shape of a type descriptor.
#[derive(Serialize, Deserialize)]
#[serde(
    untagged,
    expecting = "a type name (string, integer, float, boolean) or a {\"tuple\"|\"list\": <type>, \"separator\"?: <string>} object"
)]
enum TypeSpecRepr {
    Scalar(ScalarName),
    Tuple {
        tuple: Box<TypeSpec>,
        #[serde(default = "default_separator")]
        separator: String,
    },
    List {
        list: Box<TypeSpec>,
        #[serde(default = "default_separator")]
        separator: String,
    },
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ScalarName {
    String,
    Integer,
    Float,
    Boolean,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl TryFrom<TypeSpecRepr> for TypeSpec {
    type Error = String;

    fn try_from(repr: TypeSpecRepr) -> Result<Self, Self::Error> {
        match repr {
            TypeSpecRepr::Scalar(ScalarName::String) => Ok(TypeSpec::String),
            TypeSpecRepr::Scalar(ScalarName::Integer) => Ok(TypeSpec::Integer),
            TypeSpecRepr::Scalar(ScalarName::Float) => Ok(TypeSpec::Float),
            TypeSpecRepr::Scalar(ScalarName::Boolean) => Ok(TypeSpec::Boolean),
            TypeSpecRepr::Tuple { tuple, separator } => {
                ensure_separator(&separator)?;
                Ok(TypeSpec::Tuple {
                    element: tuple,
                    separator,
                })
            }
            TypeSpecRepr::List { list, separator } => {
                ensure_separator(&separator)?;
                Ok(TypeSpec::List {
                    element: list,
                    separator,
                })
            }
        }
    }
}

fn ensure_separator(separator: &str) -> Result<(), String> {
    if separator.is_empty() {
        Err("collection separator must not be empty".to_string())
    } else {
        Ok(())
    }
}

impl From<TypeSpec> for TypeSpecRepr {
    fn from(spec: TypeSpec) -> Self {
        match spec {
            TypeSpec::String => TypeSpecRepr::Scalar(ScalarName::String),
            TypeSpec::Integer => TypeSpecRepr::Scalar(ScalarName::Integer),
            TypeSpec::Float => TypeSpecRepr::Scalar(ScalarName::Float),
            TypeSpec::Boolean => TypeSpecRepr::Scalar(ScalarName::Boolean),
            TypeSpec::Tuple { element, separator } => TypeSpecRepr::Tuple {
                tuple: element,
                separator,
            },
            TypeSpec::List { element, separator } => TypeSpecRepr::List {
                list: element,
                separator,
            },
        }
    }
}
