//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map envmap-config error variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.
//! - The first typed error found walking the anyhow chain decides the code.

use envmap_config::{ConfigError, ConfigFileError, ConversionError, LoadError, OptionsError};

/// Invalid combinations of CLI arguments that clap cannot express.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error(
        "No schema given. Pass --schema <FILE> or --options <FILE> (or set ENVMAP_SCHEMA / ENVMAP_OPTIONS)"
    )]
    MissingSchema,

    #[error("Invalid output format: {0}. Valid options: text, json, yaml")]
    InvalidOutputFormat(String),
}

/// Structured exit codes for envmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Validation error - invalid arguments, options, or schema.
    ///
    /// Scripts should fix the input; rerunning will not help.
    ValidationError = 2,

    /// Conversion error - a variable is set but does not parse as its type.
    ConversionError = 3,

    /// Missing variable - a required variable is unset and has no default.
    ///
    /// Scripts should export the named variable and rerun.
    MissingVariable = 4,

    /// File error - a schema, options, or tree file could not be read or parsed.
    FileError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&LoadError> for ExitCode {
    fn from(err: &LoadError) -> Self {
        match err {
            LoadError::MissingRequired { .. } => ExitCode::MissingVariable,
            LoadError::Conversion { .. } => ExitCode::ConversionError,
            LoadError::SchemaFunction { .. } => ExitCode::GeneralError,
        }
    }
}

impl From<&OptionsError> for ExitCode {
    fn from(_: &OptionsError) -> Self {
        ExitCode::ValidationError
    }
}

impl From<&ConfigFileError> for ExitCode {
    fn from(err: &ConfigFileError) -> Self {
        match err {
            // Readable file, invalid schema.
            ConfigFileError::Schema { .. } => ExitCode::ValidationError,
            ConfigFileError::Read { .. }
            | ConfigFileError::Parse { .. }
            | ConfigFileError::Serialize { .. }
            | ConfigFileError::NotATable { .. }
            | ConfigFileError::Write { .. } => ExitCode::FileError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::Options(e) => Self::from(e),
            ConfigError::Load(e) => Self::from(e),
            ConfigError::File(e) => Self::from(e),
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no envmap-config error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| {
                if let Some(e) = cause.downcast_ref::<ConfigError>() {
                    Some(ExitCode::from(e))
                } else if let Some(e) = cause.downcast_ref::<LoadError>() {
                    Some(ExitCode::from(e))
                } else if let Some(e) = cause.downcast_ref::<OptionsError>() {
                    Some(ExitCode::from(e))
                } else if let Some(e) = cause.downcast_ref::<ConfigFileError>() {
                    Some(ExitCode::from(e))
                } else if cause.is::<UsageError>() {
                    Some(ExitCode::ValidationError)
                } else if cause.is::<ConversionError>() {
                    Some(ExitCode::ConversionError)
                } else {
                    None
                }
            })
            .unwrap_or(ExitCode::GeneralError)
    }
}
