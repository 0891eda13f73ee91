//! Schema-driven configuration from environment variables.
//!
//! This crate derives environment variable names from a schema tree, converts
//! the values it finds into typed configuration, and deep-merges the result
//! into an existing application configuration.

pub mod constants;
mod loader;
pub mod persistence;
mod store;
pub mod types;

pub use loader::{
    ConfigError, ConversionError, EnvProvider, EnvSource, LoadError, MapEnv, Options,
    OptionsError, ProcessEnv, SchemaCall, SchemaFn, SchemaRegistry, SchemaSource, SchemaWalker,
    convert, convert_str, dotenv_disabled, env_var_names, env_var_or_none, load_dotenv, lookup,
    merge, merge_into, resolve, walk,
};
pub use persistence::{
    ConfigFileError, read_options_file, read_schema_file, read_tree_file, write_tree_file,
};
pub use store::ConfigStore;
pub use types::{
    LeafSpec, Schema, SchemaError, SchemaNode, Segment, Table, TypeSpec, Value, get_path,
};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
