//! json-tree-hash-util - Utility functions for json-tree-hash
//!
//! Leaf utilities shared by the hashing pipeline: a checked deep clone of
//! `serde_json::Value` trees and string helpers for the canonical form.

pub mod json_clone;
pub mod strings;
pub mod value_kind;

// Re-exports for convenience
pub use json_clone::{clone_checked, UnsupportedValue};
pub use strings::escape_quotes;
pub use value_kind::value_kind;
