//! Digest function — canonical string → fixed-length identifier.
//!
//! SHA-256 over the UTF-8 bytes, URL-safe base64 without padding, truncated
//! to the configured length. The output alphabet is `A-Za-z0-9-_`.

use base64::Engine;
use sha2::{Digest, Sha256};

use crate::config::{DigestAlgorithm, HashConfig};

/// Digest a canonical string with the default configuration
/// (SHA-256, 22 characters).
pub fn compute_digest(text: &str) -> String {
    compute_digest_with(text, &HashConfig::new())
}

/// Digest a canonical string with an explicit configuration.
pub fn compute_digest_with(text: &str, config: &HashConfig) -> String {
    let raw = match config.algorithm {
        DigestAlgorithm::Sha256 => Sha256::digest(text.as_bytes()),
    };
    let mut encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw);
    encoded.truncate(config.hash_length);
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_digest() {
        assert_eq!(compute_digest("{}"), "RBNvo1WzZ4oRRq0W9-hknp");
    }

    #[test]
    fn key_value_digest() {
        assert_eq!(
            compute_digest("{\"key\":\"value\"}"),
            "5Dq88zdSRIOcAS-WM_lYYt"
        );
    }

    #[test]
    fn plain_text_digest() {
        assert_eq!(compute_digest("hello"), "LPJNul-wow4m6Dsqxbninh");
    }

    #[test]
    fn default_length_is_22() {
        assert_eq!(compute_digest("anything at all").len(), 22);
    }

    #[test]
    fn custom_length() {
        let config = HashConfig {
            hash_length: 8,
            ..HashConfig::new()
        };
        let short = compute_digest_with("{}", &config);
        assert_eq!(short, "RBNvo1Wz");
    }

    #[test]
    fn full_length_is_unpadded() {
        let config = HashConfig {
            hash_length: 64,
            ..HashConfig::new()
        };
        let full = compute_digest_with("{}", &config);
        // 256 bits → 43 base64 characters, no '=' padding.
        assert_eq!(full.len(), 43);
        assert!(!full.contains('='));
        assert!(!full.contains('+'));
        assert!(!full.contains('/'));
    }

    #[test]
    fn deterministic() {
        assert_eq!(compute_digest("abc"), compute_digest("abc"));
        assert_ne!(compute_digest("abc"), compute_digest("abd"));
    }
}
