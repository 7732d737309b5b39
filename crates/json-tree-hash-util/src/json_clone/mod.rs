//! Checked deep clone of JSON values.
//!
//! The hashing value model supports strings, numbers, booleans, objects and
//! arrays; `null` is outside it. Cloning shares that restriction so that an
//! unsupported value is caught before any part of a copy is mutated.

mod clone;

pub use clone::{clone_checked, UnsupportedValue};
