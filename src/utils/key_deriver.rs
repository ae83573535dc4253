//! Short key derivation.
//!
//! A key is the first [`SHORT_KEY_LENGTH`] hex characters of
//! `SHA-256(long_url || unix_seconds)`. The salt makes repeated requests for
//! the same long URL in different seconds yield different keys; identical
//! requests within one second collide and are rejected by the storage
//! uniqueness constraint.

use sha2::{Digest, Sha256};

/// Length of the path segment identifying a mapping.
pub const SHORT_KEY_LENGTH: usize = 12;

/// Derives the short key for `long_url` salted with `now_epoch_seconds`.
pub fn derive_key(long_url: &str, now_epoch_seconds: i64) -> String {
    let salt = now_epoch_seconds.to_string();

    let mut hasher = Sha256::new();
    hasher.update(long_url.as_bytes());
    hasher.update(salt.as_bytes());

    let mut key = hex::encode(hasher.finalize());
    key.truncate(SHORT_KEY_LENGTH);
    key
}
