//! Schema and value type definitions for envmap.
//!
//! Responsibilities:
//! - Define schema trees (`Schema`, `SchemaNode`, `LeafSpec`) and their JSON decoding.
//! - Define the closed set of leaf types (`TypeSpec`).
//! - Define schema keys (`Segment`) and resolved values (`Value`, `Table`).
//!
//! Does NOT handle:
//! - Environment lookups, naming, conversion, or merging (see `loader` module).
//! - Reading or writing files (see `persistence` module).
//!
//! Invariants:
//! - `TypeSpec` is a closed enum; every consumer matches it exhaustively.
//! - Tables preserve insertion order so resolved trees follow schema order.

mod schema;
mod segment;
mod type_spec;
mod value;

pub(crate) use schema::describe;
pub use schema::{LeafSpec, Schema, SchemaError, SchemaNode};
pub use segment::Segment;
pub use type_spec::TypeSpec;
pub use value::{Table, Value, get_path, table_from_json_map};
