//! Provider options and their validation.
//!
//! Responsibilities:
//! - Define typed `Options` (prefix, schema source, enforcement flag).
//! - Validate loosely typed option documents (JSON) eagerly, naming the bad
//!   option and the value received.
//! - Resolve deferred schemas produced by registered schema functions.
//!
//! Does NOT handle:
//! - Walking or merging (see walker.rs and merge.rs).
//!
//! Invariants:
//! - `enforce` defaults to true.
//! - A schema function is looked up at validation time but only invoked
//!   when a load (or variable listing) starts, once per call.
//!
//! Options document shape:
//!
//! ```json
//! { "prefix": "beowulf", "env_map": { "mycluster": { ... } }, "enforce": false }
//! { "prefix": "beowulf", "env_map": ["cluster_schema", ["eu-west"]] }
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use serde_json::Value as JsonValue;
use tracing::warn;

use super::error::{LoadError, OptionsError};
use crate::constants::{DEFAULT_ENFORCE, OPTION_ENFORCE, OPTION_ENV_MAP, OPTION_PREFIX};
use crate::types::{Schema, Segment, describe};

/// A function that computes a schema from arguments.
pub type SchemaFn = fn(&[JsonValue]) -> Result<Schema, String>;

/// Named schema functions available to option documents.
#[derive(Clone, Default)]
pub struct SchemaRegistry {
    functions: HashMap<String, SchemaFn>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `function` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, function: SchemaFn) -> &mut Self {
        self.functions.insert(name.into(), function);
        self
    }

    pub fn with(mut self, name: impl Into<String>, function: SchemaFn) -> Self {
        self.register(name, function);
        self
    }

    pub fn get(&self, name: &str) -> Option<SchemaFn> {
        self.functions.get(name).copied()
    }

    /// Build a call to a registered function.
    pub fn call(&self, name: &str, args: Vec<JsonValue>) -> Result<SchemaCall, OptionsError> {
        let function = self
            .get(name)
            .ok_or_else(|| OptionsError::UnknownSchemaFunction(name.to_string()))?;
        Ok(SchemaCall {
            name: name.to_string(),
            args,
            function,
        })
    }
}

impl fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("SchemaRegistry")
            .field("functions", &names)
            .finish()
    }
}

/// A deferred schema: a function plus the arguments to call it with.
#[derive(Clone)]
pub struct SchemaCall {
    name: String,
    args: Vec<JsonValue>,
    function: SchemaFn,
}

impl SchemaCall {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[JsonValue] {
        &self.args
    }

    fn invoke(&self) -> Result<Schema, LoadError> {
        (self.function)(&self.args).map_err(|message| LoadError::SchemaFunction {
            function: self.name.clone(),
            message,
        })
    }
}

impl fmt::Debug for SchemaCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaCall")
            .field("name", &self.name)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// Where the schema for a load comes from.
#[derive(Debug, Clone)]
pub enum SchemaSource {
    Inline(Schema),
    Call(SchemaCall),
}

impl SchemaSource {
    /// The schema to walk, computing it if deferred.
    pub fn resolve(&self) -> Result<Cow<'_, Schema>, LoadError> {
        match self {
            SchemaSource::Inline(schema) => Ok(Cow::Borrowed(schema)),
            SchemaSource::Call(call) => call.invoke().map(Cow::Owned),
        }
    }
}

impl From<Schema> for SchemaSource {
    fn from(schema: Schema) -> Self {
        SchemaSource::Inline(schema)
    }
}

impl From<SchemaCall> for SchemaSource {
    fn from(call: SchemaCall) -> Self {
        SchemaSource::Call(call)
    }
}

/// Options for `EnvProvider::init`.
#[derive(Debug, Clone)]
pub struct Options {
    pub prefix: Segment,
    pub env_map: SchemaSource,
    pub enforce: bool,
}

impl Options {
    /// Options with enforcement on.
    pub fn new(prefix: impl Into<Segment>, env_map: impl Into<SchemaSource>) -> Self {
        Self {
            prefix: prefix.into(),
            env_map: env_map.into(),
            enforce: DEFAULT_ENFORCE,
        }
    }

    pub fn with_enforce(mut self, enforce: bool) -> Self {
        self.enforce = enforce;
        self
    }

    /// Validate an options document.
    ///
    /// # Errors
    ///
    /// - `MissingOption` when `prefix` or `env_map` is absent.
    /// - `InvalidOption` when a value has the wrong shape, with the value received.
    /// - `UnknownSchemaFunction` when `env_map` names an unregistered function.
    /// - `InvalidSchema` when an inline `env_map` is not a valid schema.
    pub fn from_value(value: &JsonValue, registry: &SchemaRegistry) -> Result<Self, OptionsError> {
        let map = value.as_object().ok_or_else(|| OptionsError::InvalidOption {
            option: "options",
            expected: "an object",
            received: describe(value),
        })?;

        for key in map.keys() {
            if ![OPTION_PREFIX, OPTION_ENV_MAP, OPTION_ENFORCE].contains(&key.as_str()) {
                warn!(option = %key, "ignoring unknown option");
            }
        }

        let prefix = match map.get(OPTION_PREFIX) {
            None => return Err(OptionsError::MissingOption { option: OPTION_PREFIX }),
            Some(JsonValue::String(prefix)) => Segment::parse(prefix),
            Some(other) => {
                return Err(OptionsError::InvalidOption {
                    option: OPTION_PREFIX,
                    expected: "a string",
                    received: describe(other),
                });
            }
        };

        let env_map = match map.get(OPTION_ENV_MAP) {
            None => return Err(OptionsError::MissingOption { option: OPTION_ENV_MAP }),
            Some(schema @ JsonValue::Object(_)) => SchemaSource::Inline(Schema::from_json(schema)?),
            Some(JsonValue::Array(call)) => SchemaSource::Call(parse_call(call, registry)?),
            Some(other) => return Err(invalid_env_map(other)),
        };

        let enforce = match map.get(OPTION_ENFORCE) {
            None => DEFAULT_ENFORCE,
            Some(JsonValue::Bool(enforce)) => *enforce,
            Some(other) => {
                return Err(OptionsError::InvalidOption {
                    option: OPTION_ENFORCE,
                    expected: "a boolean",
                    received: describe(other),
                });
            }
        };

        Ok(Self {
            prefix,
            env_map,
            enforce,
        })
    }
}

/// `[name]` or `[name, [args...]]`.
fn parse_call(call: &[JsonValue], registry: &SchemaRegistry) -> Result<SchemaCall, OptionsError> {
    match call {
        [JsonValue::String(name)] => registry.call(name, Vec::new()),
        [JsonValue::String(name), JsonValue::Array(args)] => registry.call(name, args.clone()),
        _ => Err(invalid_env_map(&JsonValue::Array(call.to_vec()))),
    }
}

fn invalid_env_map(received: &JsonValue) -> OptionsError {
    OptionsError::InvalidOption {
        option: OPTION_ENV_MAP,
        expected: "a schema object or a [function, [args]] call",
        received: describe(received),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SchemaNode, TypeSpec};
    use serde_json::json;

    fn regional_schema(args: &[JsonValue]) -> Result<Schema, String> {
        let region = args
            .first()
            .and_then(JsonValue::as_str)
            .ok_or_else(|| "expected a region name".to_string())?;
        Ok(Schema::new().with_app(
            region,
            SchemaNode::interior([("replicas", SchemaNode::leaf(TypeSpec::Integer))]),
        ))
    }

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new().with("regional_schema", regional_schema)
    }

    #[test]
    fn test_inline_schema_with_default_enforce() {
        let doc = json!({
            "prefix": "beowulf",
            "env_map": { "mycluster": { "server_count": { "type": "integer" } } }
        });
        let options = Options::from_value(&doc, &registry()).unwrap();
        assert_eq!(options.prefix, Segment::from("beowulf"));
        assert!(options.enforce);
        assert!(matches!(options.env_map, SchemaSource::Inline(_)));
    }

    #[test]
    fn test_enforce_can_be_disabled() {
        let doc = json!({ "prefix": "", "env_map": {}, "enforce": false });
        let options = Options::from_value(&doc, &registry()).unwrap();
        assert!(!options.enforce);
    }

    #[test]
    fn test_prefix_must_be_string() {
        let doc = json!({ "prefix": 42, "env_map": {} });
        let err = Options::from_value(&doc, &registry()).unwrap_err();
        assert_eq!(
            err,
            OptionsError::InvalidOption {
                option: "prefix",
                expected: "a string",
                received: "number 42".to_string(),
            }
        );
    }

    #[test]
    fn test_env_map_must_be_map_or_call() {
        let doc = json!({ "prefix": "p", "env_map": "mycluster" });
        let err = Options::from_value(&doc, &registry()).unwrap_err();
        assert!(matches!(
            err,
            OptionsError::InvalidOption { option: "env_map", ref received, .. }
                if received == "string \"mycluster\""
        ));
    }

    #[test]
    fn test_enforce_must_be_boolean() {
        let doc = json!({ "prefix": "p", "env_map": {}, "enforce": "yes" });
        let err = Options::from_value(&doc, &registry()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("`enforce`"), "got: {msg}");
        assert!(msg.contains("\"yes\""), "got: {msg}");
    }

    #[test]
    fn test_missing_options_are_reported() {
        let err = Options::from_value(&json!({ "env_map": {} }), &registry()).unwrap_err();
        assert_eq!(err, OptionsError::MissingOption { option: "prefix" });
        let err = Options::from_value(&json!({ "prefix": "p" }), &registry()).unwrap_err();
        assert_eq!(err, OptionsError::MissingOption { option: "env_map" });
    }

    #[test]
    fn test_options_document_must_be_object() {
        let err = Options::from_value(&json!(["p"]), &registry()).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidOption { option: "options", .. }));
    }

    #[test]
    fn test_invalid_inline_schema_is_an_options_error() {
        let doc = json!({ "prefix": "p", "env_map": { "app": { "port": 1 } } });
        let err = Options::from_value(&doc, &registry()).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidSchema(_)));
    }

    #[test]
    fn test_schema_call_resolves_lazily() {
        let doc = json!({ "prefix": "p", "env_map": ["regional_schema", ["eu"]] });
        let options = Options::from_value(&doc, &registry()).unwrap();
        let SchemaSource::Call(ref call) = options.env_map else {
            panic!("expected a schema call");
        };
        assert_eq!(call.name(), "regional_schema");
        assert_eq!(call.args(), &[json!("eu")]);

        let schema = options.env_map.resolve().unwrap();
        assert!(schema.apps().contains_key(&Segment::from("eu")));
    }

    #[test]
    fn test_schema_call_without_args() {
        let doc = json!({ "prefix": "p", "env_map": ["regional_schema"] });
        let options = Options::from_value(&doc, &registry()).unwrap();
        let err = options.env_map.resolve().unwrap_err();
        assert_eq!(
            err,
            LoadError::SchemaFunction {
                function: "regional_schema".to_string(),
                message: "expected a region name".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_schema_function() {
        let doc = json!({ "prefix": "p", "env_map": ["nope", []] });
        let err = Options::from_value(&doc, &registry()).unwrap_err();
        assert_eq!(err, OptionsError::UnknownSchemaFunction("nope".to_string()));
    }

    #[test]
    fn test_malformed_schema_call() {
        let doc = json!({ "prefix": "p", "env_map": [1, 2, 3] });
        let err = Options::from_value(&doc, &registry()).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidOption { option: "env_map", .. }));
    }

    #[test]
    fn test_typed_options_builder() {
        let options = Options::new("beowulf", Schema::new()).with_enforce(false);
        assert_eq!(options.prefix, Segment::from("beowulf"));
        assert!(!options.enforce);
    }
}
