//! Environment variable name derivation.
//!
//! A variable name is the prefix followed by every path segment, each
//! upper-cased and joined with `_`:
//!
//! ```text
//! prefix "beowulf", path [mycluster, server_count] -> BEOWULF_MYCLUSTER_SERVER_COUNT
//! prefix "",        path [mycluster, server_count] -> MYCLUSTER_SERVER_COUNT
//! ```
//!
//! Qualified keys collapse to underscore-joined tokens first, so
//! `::my_app::Repo` contributes `MY_APP_REPO`.

use crate::constants::ENV_SEGMENT_SEPARATOR;
use crate::types::{Schema, Segment};

/// Derive the variable name for `path` under `prefix`.
///
/// An empty prefix is dropped entirely rather than producing a leading `_`.
pub fn resolve(prefix: &Segment, path: &[Segment]) -> String {
    let prefix = prefix.env_token();
    let head = (!prefix.is_empty()).then_some(prefix);
    head.into_iter()
        .chain(path.iter().map(Segment::env_token))
        .map(|token| token.to_uppercase())
        .collect::<Vec<_>>()
        .join(ENV_SEGMENT_SEPARATOR)
}

/// Every variable name a schema reads, in schema order.
///
/// Performs no lookups and no conversion.
pub fn env_var_names(schema: &Schema, prefix: &Segment) -> Vec<String> {
    schema
        .leaves()
        .into_iter()
        .map(|(path, _)| resolve(prefix, &path))
        .collect()
}
