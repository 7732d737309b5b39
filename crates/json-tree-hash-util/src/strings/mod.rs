//! String utilities for the canonical form.

mod escape;

pub use escape::escape_quotes;
