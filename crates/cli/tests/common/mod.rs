//! Shared test utilities for envmap integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write schema and tree fixtures into temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `ENVMAP_*` variables from the host never reach the command.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Schema used across CLI tests.
pub const CLUSTER_SCHEMA: &str = r#"{
    "mycluster": {
        "server_count": { "type": "integer", "default": "123" },
        "hosts": { "type": { "list": "string" } },
        "sys_logger": {
            "metadata": { "environment": { "type": "string" } }
        }
    }
}"#;

/// Returns a hermetic `envmap` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `ENVMAP_*` and `BEOWULF_*` variables are cleared to avoid host leakage.
pub fn envmap_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envmap");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("ENVMAP_SCHEMA")
        .env_remove("ENVMAP_PREFIX")
        .env_remove("ENVMAP_OPTIONS")
        .env_remove("ENVMAP_LOG_FORMAT")
        .env_remove("RUST_LOG")
        .env_remove("BEOWULF_MYCLUSTER_SERVER_COUNT")
        .env_remove("BEOWULF_MYCLUSTER_HOSTS")
        .env_remove("BEOWULF_MYCLUSTER_SYS_LOGGER_METADATA_ENVIRONMENT");

    cmd
}

/// Write `contents` to `name` inside `dir` and return the path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// An `envmap` command pointed at the cluster schema with prefix `beowulf`.
pub fn cluster_cmd(dir: &Path) -> Command {
    let schema = write_fixture(dir, "schema.json", CLUSTER_SCHEMA);
    let mut cmd = envmap_cmd();
    cmd.arg("--schema").arg(schema).args(["--prefix", "beowulf"]);
    cmd
}
