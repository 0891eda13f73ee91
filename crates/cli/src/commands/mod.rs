//! Command implementations for envmap.
//!
//! Each command formats its own output and writes it via `output_result`.

pub mod resolve;
pub mod vars;
