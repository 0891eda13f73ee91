//! Environment configuration loader.
//!
//! Responsibilities:
//! - Derive variable names from schema paths (`naming`).
//! - Convert raw variable values into typed values (`convert`).
//! - Walk a schema against an environment and build a tree (`walker`).
//! - Deep-merge resolved trees into existing configuration (`merge`).
//! - Validate provider options and run `init`/`load` (`options`, `provider`).
//! - Load an optional `.env` file into the process (`dotenv`).
//!
//! Does NOT handle:
//! - Owning the host configuration between loads (see `store`).
//! - Reading or writing files (see `persistence`).
//!
//! Invariants / Assumptions:
//! - Loads are synchronous, single pass, and eager; nothing is cached.
//! - Every failure aborts the load; there are no retries.
//! - Conversion and enforcement errors carry the derived variable name.

mod convert;
mod dotenv;
mod env;
mod error;
mod merge;
mod naming;
mod options;
mod provider;
mod walker;

#[cfg(test)]
mod tests;

pub use convert::{convert, convert_str};
pub use dotenv::{dotenv_disabled, load_dotenv};
pub use env::{EnvSource, MapEnv, ProcessEnv, env_var_or_none, lookup};
pub use error::{ConfigError, ConversionError, LoadError, OptionsError};
pub use merge::{merge, merge_into};
pub use naming::{env_var_names, resolve};
pub use options::{Options, SchemaCall, SchemaFn, SchemaRegistry, SchemaSource};
pub use provider::EnvProvider;
pub use walker::{SchemaWalker, walk};
