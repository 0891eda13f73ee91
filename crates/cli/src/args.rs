//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build the provider (see `provider_context` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envmap")]
#[command(about = "Resolve schema-driven configuration from environment variables", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envmap --schema schema.json --prefix beowulf vars\n  envmap --schema schema.json --prefix beowulf resolve --existing config.json\n  envmap --options options.json resolve --no-enforce -o yaml\n"
)]
pub struct Cli {
    /// Path to a JSON schema file
    #[arg(
        long,
        global = true,
        env = "ENVMAP_SCHEMA",
        value_name = "FILE",
        conflicts_with = "options"
    )]
    pub schema: Option<PathBuf>,

    /// Prefix prepended to every derived variable name
    #[arg(
        long,
        global = true,
        env = "ENVMAP_PREFIX",
        default_value = "",
        conflicts_with = "options"
    )]
    pub prefix: String,

    /// Path to a JSON options document (prefix, env_map, enforce)
    #[arg(long, global = true, env = "ENVMAP_OPTIONS", value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Log line format on stderr
    #[arg(
        long,
        global = true,
        env = "ENVMAP_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every environment variable the schema reads
    Vars,

    /// Resolve configuration from the environment and print the merged tree
    Resolve {
        /// Omit unset variables instead of failing
        #[arg(long)]
        no_enforce: bool,

        /// Existing configuration tree (JSON) to merge into
        #[arg(long, value_name = "FILE")]
        existing: Option<PathBuf>,
    },
}

impl Commands {
    /// Output format used when `--output` is not given.
    pub fn default_output(&self) -> &'static str {
        match self {
            Commands::Vars => "text",
            Commands::Resolve { .. } => "json",
        }
    }
}
