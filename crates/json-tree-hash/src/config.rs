//! Configuration for hashing and validation.
//!
//! All configuration is passed explicitly per call; there is no process-wide
//! state. Defaults match the reference hashes: SHA-256, 22-character output,
//! 10 decimal digits of float precision.

/// The cryptographic primitive behind the digest function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
}

/// Bounds and tolerance for the optional numeric audit.
///
/// The audit only runs when `throw_on_range_error` is set. It rejects floats
/// outside `[min_num, max_num]` and floats that are not (within machine
/// epsilon) a multiple of `precision`, so values differing only by platform
/// float noise cannot slip into a hash.
#[derive(Debug, Clone)]
pub struct NumberConfig {
    pub precision: f64,
    pub min_num: f64,
    pub max_num: f64,
    pub throw_on_range_error: bool,
}

impl Default for NumberConfig {
    fn default() -> Self {
        NumberConfig {
            precision: 0.001,
            min_num: -1e9,
            max_num: 1e9,
            throw_on_range_error: false,
        }
    }
}

/// Configuration of the digest output.
#[derive(Debug, Clone)]
pub struct HashConfig {
    /// Length of the emitted hash string in characters.
    pub hash_length: usize,
    pub algorithm: DigestAlgorithm,
    pub number: NumberConfig,
}

/// Default emitted hash length (truncated URL-safe base64 of SHA-256).
pub const DEFAULT_HASH_LENGTH: usize = 22;

/// Default number of decimal digits floats keep before hashing.
pub const DEFAULT_FLOAT_PRECISION: u32 = 10;

impl HashConfig {
    pub fn new() -> Self {
        HashConfig {
            hash_length: DEFAULT_HASH_LENGTH,
            algorithm: DigestAlgorithm::Sha256,
            number: NumberConfig::default(),
        }
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        HashConfig::new()
    }
}

/// Per-call configuration for [`apply_hashes`](crate::apply_hashes).
///
/// The mutate-vs-copy choice is made at the API boundary instead of here:
/// `apply_hashes` works in place on `&mut Value`, `apply_hashes_cloned`
/// deep-clones first and leaves its input untouched.
#[derive(Debug, Clone)]
pub struct ApplyConfig {
    /// Recompute hashes even when a node already carries `_hash`. When
    /// `false`, a node with an existing `_hash` is treated as a frozen
    /// subtree and left untouched.
    pub update_existing_hashes: bool,
    /// Descend into children. When `false` only the root is hashed, using
    /// the children's pre-existing `_hash` values verbatim.
    pub recursive: bool,
    /// Decimal digits floats retain (truncated, not rounded) before hashing.
    pub floating_point_precision: u32,
    /// Fail with `HashMismatch` when a recomputed hash disagrees with a
    /// previously stored one.
    pub throw_on_wrong_hash: bool,
    pub hash: HashConfig,
}

impl Default for ApplyConfig {
    fn default() -> Self {
        ApplyConfig {
            update_existing_hashes: true,
            recursive: true,
            floating_point_precision: DEFAULT_FLOAT_PRECISION,
            throw_on_wrong_hash: false,
            hash: HashConfig::new(),
        }
    }
}
