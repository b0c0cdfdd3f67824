//! User accounts.
//!
//! Users only carry an identity; they exist to scope ownership of
//! comments and notes.

use serde::Serialize;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Data required to create a user.
///
/// The password is hashed by the caller before it reaches storage;
/// repositories never see cleartext.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    /// Salted digest in `{salt}${hex}` form (see [`crate::utils::hash_password`]).
    pub password_hash: String,
}
