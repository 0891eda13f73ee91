//! Environment variable sources.
//!
//! Responsibilities:
//! - Abstract variable lookup behind `EnvSource` so loads can run against the
//!   real process environment or an in-memory map.
//! - Apply the "empty means unset" rule in one place.
//!
//! Does NOT handle:
//! - Deriving variable names (see naming.rs).
//! - .env file loading (see dotenv.rs).
//!
//! Invariants:
//! - Unset and empty-string variables are both treated as absent.
//! - Values are returned verbatim; whitespace is not trimmed, so `" "` reaches
//!   the converter and fails numeric types instead of silently defaulting.
//! - Variables that are not valid Unicode are treated as unset.

use std::collections::HashMap;

/// A read-only view of environment variables.
pub trait EnvSource {
    /// Raw value of `name`, or `None` when unset.
    fn get(&self, name: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// An environment backed by a map, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// Look up `name` in `source`, treating the empty string as unset.
pub fn lookup(source: &dyn EnvSource, name: &str) -> Option<String> {
    source.get(name).filter(|value| !value.is_empty())
}

/// Read a process environment variable, returning None if unset or empty.
pub fn env_var_or_none(key: &str) -> Option<String> {
    lookup(&ProcessEnv, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_unset_and_empty() {
        let key = "_ENVMAP_TEST_UNSET_VAR";
        assert!(env_var_or_none(key).is_none(), "Unset env var should return None");

        temp_env::with_vars([(key, Some(""))], || {
            assert!(env_var_or_none(key).is_none(), "Empty env var should return None");
        });

        temp_env::with_vars([(key, Some(" padded "))], || {
            assert_eq!(
                env_var_or_none(key),
                Some(" padded ".to_string()),
                "Values are returned verbatim"
            );
        });
    }

    #[test]
    fn test_map_env_lookup() {
        let mut env = MapEnv::from_pairs([("A", "1"), ("EMPTY", "")]);
        env.set("B", "2");
        assert_eq!(lookup(&env, "A"), Some("1".to_string()));
        assert_eq!(lookup(&env, "B"), Some("2".to_string()));
        assert_eq!(lookup(&env, "EMPTY"), None);
        assert_eq!(lookup(&env, "MISSING"), None);
    }
}
