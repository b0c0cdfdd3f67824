//! Salted password digests.
//!
//! Stored form is `{salt}${hex(sha256(salt + password))}`. The salt is
//! chosen by the caller at signup time.

use sha2::{Digest, Sha256};

fn digest_hex(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Produce the stored representation of a password.
pub fn hash_password(password: &str, salt: &str) -> String {
    format!("{salt}${}", digest_hex(salt, password))
}

/// Check a candidate password against a stored `{salt}${hex}` value.
pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, digest)) => digest_hex(salt, password) == digest,
        None => false,
    }
}
