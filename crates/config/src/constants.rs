//! Centralized constants for the envmap workspace.
//!
//! Naming and parsing constants live here so the resolver, the converter,
//! and the CLI agree on the exact wire format of variable names and values.

// =============================================================================
// Variable Naming
// =============================================================================

/// Separator placed between upper-cased segments of a variable name.
pub const ENV_SEGMENT_SEPARATOR: &str = "_";

/// Separator between the parts of a qualified schema key (`my_app::Repo`).
pub const QUALIFIED_SEPARATOR: &str = "::";

/// Root namespace qualifier stripped from qualified keys before naming.
pub const NAMESPACE_QUALIFIER: &str = "::";

// =============================================================================
// Type Conversion
// =============================================================================

/// Default separator for tuple and list values.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Literal strings accepted as boolean `true`.
pub const TRUE_LITERALS: &[&str] = &["1", "true"];

/// Literal strings accepted as boolean `false`.
pub const FALSE_LITERALS: &[&str] = &["0", "false"];

// =============================================================================
// Schema & Options Documents
// =============================================================================

/// Key marking a schema node as a leaf descriptor.
pub const LEAF_TYPE_KEY: &str = "type";

/// Key holding a leaf's default value.
pub const LEAF_DEFAULT_KEY: &str = "default";

/// Options document key for the variable-name prefix.
pub const OPTION_PREFIX: &str = "prefix";

/// Options document key for the schema (or schema function call).
pub const OPTION_ENV_MAP: &str = "env_map";

/// Options document key for the enforcement flag.
pub const OPTION_ENFORCE: &str = "enforce";

/// Enforcement is on unless an options document says otherwise.
pub const DEFAULT_ENFORCE: bool = true;

/// Set to `1` or `true` to skip `.env` loading.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";
