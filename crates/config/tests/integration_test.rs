//! Integration tests for the public loading API.
//!
//! These tests drive `EnvProvider` and `ConfigStore` through the crate root
//! with injected environments, the way a host application would.

use envmap_config::{
    ConfigError, ConfigStore, EnvProvider, LoadError, MapEnv, Options, OptionsError, Schema,
    SchemaNode, SchemaRegistry, Segment, Table, TypeSpec, Value, env_var_names, get_path,
    read_options_file, write_tree_file,
};
use serde_json::json;

fn cluster_schema() -> Schema {
    Schema::new().with_app(
        "mycluster",
        SchemaNode::interior([
            (
                "server_count",
                SchemaNode::leaf_with_default(TypeSpec::Integer, "123"),
            ),
            ("hosts", SchemaNode::leaf(TypeSpec::list(TypeSpec::String))),
            (
                "sys_logger",
                SchemaNode::interior([(
                    "metadata",
                    SchemaNode::interior([("environment", SchemaNode::leaf(TypeSpec::String))]),
                )]),
            ),
        ]),
    )
}

fn existing() -> Table {
    match Value::from_json(json!({
        "mycluster": {
            "sys_logger": { "metadata": { "environment": "dev", "name": "foo" } }
        }
    })) {
        Some(Value::Table(table)) => table,
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn test_full_load_merges_env_over_existing() {
    let provider = EnvProvider::init(Options::new("beowulf", cluster_schema()));
    let env = MapEnv::from_pairs([
        ("BEOWULF_MYCLUSTER_HOSTS", "alpha,beta"),
        ("BEOWULF_MYCLUSTER_SYS_LOGGER_METADATA_ENVIRONMENT", "prod"),
    ]);

    let tree = provider.load_with_env(existing(), &env).unwrap();

    assert_eq!(
        get_path(&tree, &["mycluster", "server_count"]),
        Some(&Value::Integer(123))
    );
    assert_eq!(
        get_path(&tree, &["mycluster", "hosts"]),
        Some(&Value::List(vec![Value::from("alpha"), Value::from("beta")]))
    );
    assert_eq!(
        get_path(&tree, &["mycluster", "sys_logger", "metadata", "environment"]),
        Some(&Value::from("prod"))
    );
    assert_eq!(
        get_path(&tree, &["mycluster", "sys_logger", "metadata", "name"]),
        Some(&Value::from("foo"))
    );
}

#[test]
fn test_missing_required_names_variable() {
    let provider = EnvProvider::init(Options::new("beowulf", cluster_schema()));
    let env = MapEnv::from_pairs([("BEOWULF_MYCLUSTER_HOSTS", "alpha")]);

    let err = provider.load_with_env(existing(), &env).unwrap_err();
    assert_eq!(
        err,
        LoadError::MissingRequired {
            var: "BEOWULF_MYCLUSTER_SYS_LOGGER_METADATA_ENVIRONMENT".to_string()
        }
    );
}

#[test]
fn test_conversion_error_is_distinct_from_missing() {
    let provider =
        EnvProvider::init(Options::new("beowulf", cluster_schema()).with_enforce(false));
    let env = MapEnv::from_pairs([("BEOWULF_MYCLUSTER_SERVER_COUNT", "many")]);

    let err = provider.load_with_env(Table::new(), &env).unwrap_err();
    match err {
        LoadError::Conversion { var, source } => {
            assert_eq!(var, "BEOWULF_MYCLUSTER_SERVER_COUNT");
            assert_eq!(source.value, "many");
            assert_eq!(source.expected, TypeSpec::Integer);
        }
        other => panic!("expected conversion error, got {other:?}"),
    }
}

#[test]
fn test_invalid_options_are_rejected_at_init() {
    let err = EnvProvider::init_from_value(
        &json!({ "prefix": "beowulf", "env_map": {}, "enforce": "yes" }),
        &SchemaRegistry::new(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        OptionsError::InvalidOption { option: "enforce", .. }
    ));
}

#[test]
fn test_qualified_keys_resolve_to_underscored_names() {
    let schema = Schema::new().with_app(
        "::my_app::Repo",
        SchemaNode::interior([("pool_size", SchemaNode::leaf(TypeSpec::Integer))]),
    );
    assert_eq!(
        env_var_names(&schema, &Segment::from("")),
        vec!["MY_APP_REPO_POOL_SIZE".to_string()]
    );

    let provider = EnvProvider::init(Options::new("", schema));
    let env = MapEnv::from_pairs([("MY_APP_REPO_POOL_SIZE", "10")]);
    let tree = provider.load_with_env(Table::new(), &env).unwrap();
    assert_eq!(
        get_path(&tree, &["::my_app::Repo", "pool_size"]),
        Some(&Value::Integer(10))
    );
}

#[test]
fn test_store_apply_from_options_file() {
    let dir = tempfile::tempdir().unwrap();
    let options_path = dir.path().join("options.json");
    std::fs::write(
        &options_path,
        r#"{
            "prefix": "beowulf",
            "env_map": { "mycluster": { "server_count": { "type": "integer", "default": "5" } } }
        }"#,
    )
    .unwrap();

    let provider = read_options_file(&options_path, &SchemaRegistry::new()).unwrap();
    let mut store = ConfigStore::from_tree(existing());
    store
        .apply_with_env(&provider, &MapEnv::from_pairs([("BEOWULF_MYCLUSTER_SERVER_COUNT", "9")]))
        .unwrap();

    assert_eq!(
        store.get_path(&["mycluster", "server_count"]),
        Some(&Value::Integer(9))
    );

    let tree_path = dir.path().join("tree.json");
    write_tree_file(&tree_path, store.tree()).unwrap();
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&tree_path).unwrap()).unwrap();
    assert_eq!(written["mycluster"]["server_count"], json!(9));
}

#[test]
fn test_options_file_errors_unify_under_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_options_file(&dir.path().join("absent.json"), &SchemaRegistry::new())
        .unwrap_err();
    assert!(matches!(err, ConfigError::File(_)));
}
