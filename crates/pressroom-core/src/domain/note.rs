//! Personal notes.

use serde::Serialize;

/// A note owned by a single author. Only the owner may read or mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub text: String,
    /// URL-safe unique identifier, derived from the title when the
    /// author leaves it blank.
    pub slug: String,
    pub author_id: i64,
}

/// Data required to create a note. The slug must already be resolved
/// (explicit or derived) and checked for uniqueness by the caller.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub text: String,
    pub slug: String,
    pub author_id: i64,
}
