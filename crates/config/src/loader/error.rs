//! Error types for option validation, conversion, and loading.
//!
//! Responsibilities:
//! - Define one error type per failure kind so callers can tell them apart:
//!   `OptionsError` (bad `init` options), `ConversionError` (malformed value),
//!   `LoadError` (missing required variable or failed conversion during a load).
//! - Provide the crate-level `ConfigError` that unifies them for `?` chains,
//!   plus `.env` loading failures.
//!
//! Does NOT handle:
//! - Schema decoding errors (see `types::SchemaError`).
//! - File errors (see `persistence::ConfigFileError`).
//!
//! Invariants:
//! - Load errors always carry the derived environment variable name.
//! - Option errors always carry the option name and the received value.
//! - Dotenv errors never include raw `.env` line contents.
//! - Nothing here is retried or recovered; every variant is fatal to a load.

use thiserror::Error;

use crate::persistence::ConfigFileError;
use crate::types::{SchemaError, TypeSpec};

/// Invalid options passed to `EnvProvider::init_from_value`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    #[error("missing required option `{option}`")]
    MissingOption { option: &'static str },

    #[error("invalid value for option `{option}`: expected {expected}, got {received}")]
    InvalidOption {
        option: &'static str,
        expected: &'static str,
        received: String,
    },

    #[error("unknown schema function `{0}` in option `env_map`")]
    UnknownSchemaFunction(String),

    #[error("invalid schema in option `env_map`: {0}")]
    InvalidSchema(#[from] SchemaError),
}

/// A raw string that does not parse as its declared type.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("cannot convert {value:?} to {expected}")]
pub struct ConversionError {
    pub value: String,
    pub expected: TypeSpec,
}

impl ConversionError {
    pub fn new(value: &str, expected: &TypeSpec) -> Self {
        Self {
            value: value.to_string(),
            expected: expected.clone(),
        }
    }
}

/// Failure while resolving a schema against the environment.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Missing required environment variable: {var} (no value and no default)")]
    MissingRequired { var: String },

    #[error("Invalid value for {var}: {source}")]
    Conversion {
        var: String,
        #[source]
        source: ConversionError,
    },

    #[error("schema function `{function}` failed: {message}")]
    SchemaFunction { function: String, message: String },
}

impl LoadError {
    /// Name of the environment variable involved, if any.
    pub fn var(&self) -> Option<&str> {
        match self {
            LoadError::MissingRequired { var } | LoadError::Conversion { var, .. } => Some(var),
            LoadError::SchemaFunction { .. } => None,
        }
    }
}

/// Any error produced by this crate.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    File(#[from] ConfigFileError),

    /// Invalid `.env` syntax. Only the byte index is kept so line contents
    /// never reach logs or terminals.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: std::io::ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
