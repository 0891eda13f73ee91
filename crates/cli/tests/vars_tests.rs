//! Integration tests for `envmap vars`.

mod common;

use common::{CLUSTER_SCHEMA, cluster_cmd, envmap_cmd, write_fixture};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_vars_lists_names_in_schema_order() {
    let dir = TempDir::new().unwrap();
    cluster_cmd(dir.path())
        .arg("vars")
        .assert()
        .success()
        .stdout(
            "BEOWULF_MYCLUSTER_SERVER_COUNT\n\
             BEOWULF_MYCLUSTER_HOSTS\n\
             BEOWULF_MYCLUSTER_SYS_LOGGER_METADATA_ENVIRONMENT\n",
        );
}

#[test]
fn test_vars_without_prefix() {
    let dir = TempDir::new().unwrap();
    let schema = write_fixture(dir.path(), "schema.json", CLUSTER_SCHEMA);
    envmap_cmd()
        .arg("--schema")
        .arg(schema)
        .arg("vars")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("MYCLUSTER_SERVER_COUNT\n"));
}

#[test]
fn test_vars_json_output() {
    let dir = TempDir::new().unwrap();
    let output = cluster_cmd(dir.path())
        .args(["vars", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let vars: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(vars.len(), 3);
    assert_eq!(vars[0], "BEOWULF_MYCLUSTER_SERVER_COUNT");
}

#[test]
fn test_vars_reads_schema_from_env() {
    let dir = TempDir::new().unwrap();
    let schema = write_fixture(dir.path(), "schema.json", CLUSTER_SCHEMA);
    envmap_cmd()
        .env("ENVMAP_SCHEMA", &schema)
        .env("ENVMAP_PREFIX", "svc")
        .arg("vars")
        .assert()
        .success()
        .stdout(predicate::str::contains("SVC_MYCLUSTER_HOSTS"));
}

#[test]
fn test_vars_from_options_file() {
    let dir = TempDir::new().unwrap();
    let options = write_fixture(
        dir.path(),
        "options.json",
        r#"{ "prefix": "", "env_map": { "::my_app::Repo": { "pool_size": { "type": "integer" } } } }"#,
    );
    envmap_cmd()
        .arg("--options")
        .arg(options)
        .arg("vars")
        .assert()
        .success()
        .stdout("MY_APP_REPO_POOL_SIZE\n");
}

#[test]
fn test_vars_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out").join("vars.txt");
    cluster_cmd(dir.path())
        .arg("vars")
        .arg("--output-file")
        .arg(&out)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Results written to"));

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("BEOWULF_MYCLUSTER_HOSTS"));
}
