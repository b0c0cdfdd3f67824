//! Form state and validation.
//!
//! Pages expose their forms in the JSON context under the `form` key.
//! Each form serializes a `kind` discriminant, its bound field values and
//! an `errors` map of field name to messages, so clients (and tests) can
//! tell which form they received and whether binding failed.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::utils::slugify;

/// Substrings that are not allowed in comment text.
pub const BAD_WORDS: &[&str] = &["scoundrel", "rascal"];

/// Fixed message attached to the `text` field when a banned word is found.
pub const COMMENT_WARNING: &str = "Mind your language!";

/// Suffix appended to a colliding slug in the `slug` field error.
pub const SLUG_WARNING: &str = " - this slug is already taken, pick a unique one.";

/// Message for a missing required field.
pub const REQUIRED_FIELD: &str = "This field is required.";

/// Maximum slug length, matching the storage column.
pub const MAX_SLUG_LEN: usize = 100;

/// Field name to error messages, ordered for stable serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }
}

/// Returns the first banned word found in `text`, case-insensitively.
pub fn banned_word_in(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    BAD_WORDS.iter().copied().find(|word| lowered.contains(word))
}

/// Comment form shown on the news detail page.
#[derive(Debug, Clone, Serialize)]
pub struct CommentForm {
    pub kind: &'static str,
    pub text: String,
    pub errors: FormErrors,
}

impl CommentForm {
    const KIND: &'static str = "comment";

    /// Unbound form, rendered for authenticated visitors.
    pub fn empty() -> Self {
        Self {
            kind: Self::KIND,
            text: String::new(),
            errors: FormErrors::default(),
        }
    }

    /// Unbound form pre-filled with an existing comment's text (edit page).
    pub fn prefilled(text: &str) -> Self {
        Self {
            kind: Self::KIND,
            text: text.to_string(),
            errors: FormErrors::default(),
        }
    }

    /// Bind and validate submitted text.
    pub fn bound(text: &str) -> Self {
        let mut errors = FormErrors::default();
        if text.trim().is_empty() {
            errors.add("text", REQUIRED_FIELD);
        } else if banned_word_in(text).is_some() {
            errors.add("text", COMMENT_WARNING);
        }
        Self {
            kind: Self::KIND,
            text: text.to_string(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Note form shown on the add and edit pages.
#[derive(Debug, Clone, Serialize)]
pub struct NoteForm {
    pub kind: &'static str,
    pub title: String,
    pub text: String,
    /// Resolved slug: the submitted one, or derived from the title when
    /// the submission left it blank.
    pub slug: String,
    pub errors: FormErrors,
}

impl NoteForm {
    const KIND: &'static str = "note";

    pub fn empty() -> Self {
        Self {
            kind: Self::KIND,
            title: String::new(),
            text: String::new(),
            slug: String::new(),
            errors: FormErrors::default(),
        }
    }

    /// Unbound form pre-filled from an existing note (edit page).
    pub fn prefilled(title: &str, text: &str, slug: &str) -> Self {
        Self {
            kind: Self::KIND,
            title: title.to_string(),
            text: text.to_string(),
            slug: slug.to_string(),
            errors: FormErrors::default(),
        }
    }

    /// Bind and validate a submission. Slug uniqueness is checked against
    /// storage by the caller, which reports collisions via
    /// [`NoteForm::mark_slug_taken`].
    pub fn bound(title: &str, text: &str, slug: &str) -> Self {
        let mut errors = FormErrors::default();
        if title.trim().is_empty() {
            errors.add("title", REQUIRED_FIELD);
        }
        if text.trim().is_empty() {
            errors.add("text", REQUIRED_FIELD);
        }
        let resolved = if slug.trim().is_empty() {
            slugify(title)
        } else {
            slug.trim().to_string()
        };
        Self {
            kind: Self::KIND,
            title: title.to_string(),
            text: text.to_string(),
            slug: resolved,
            errors,
        }
    }

    /// Record a slug collision: the message is the colliding slug with
    /// [`SLUG_WARNING`] appended.
    pub fn mark_slug_taken(&mut self) {
        let message = format!("{}{}", self.slug, SLUG_WARNING);
        self.errors.add("slug", message);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Login form rendered by the auth pages.
#[derive(Debug, Clone, Serialize)]
pub struct LoginForm {
    pub kind: &'static str,
    pub username: String,
    pub errors: FormErrors,
}

impl LoginForm {
    const KIND: &'static str = "login";

    pub fn empty() -> Self {
        Self {
            kind: Self::KIND,
            username: String::new(),
            errors: FormErrors::default(),
        }
    }

    /// Re-rendered form after a failed credential check. The error is
    /// not tied to a single field, so it lives under `__all__`.
    pub fn rejected(username: &str) -> Self {
        let mut errors = FormErrors::default();
        errors.add("__all__", "Invalid username or password.");
        Self {
            kind: Self::KIND,
            username: username.to_string(),
            errors,
        }
    }
}

/// Signup form rendered by the auth pages.
#[derive(Debug, Clone, Serialize)]
pub struct SignupForm {
    pub kind: &'static str,
    pub username: String,
    pub errors: FormErrors,
}

impl SignupForm {
    const KIND: &'static str = "signup";

    pub fn empty() -> Self {
        Self {
            kind: Self::KIND,
            username: String::new(),
            errors: FormErrors::default(),
        }
    }

    pub fn bound(username: &str, password: &str) -> Self {
        let mut errors = FormErrors::default();
        if username.trim().is_empty() {
            errors.add("username", REQUIRED_FIELD);
        }
        if password.is_empty() {
            errors.add("password", REQUIRED_FIELD);
        }
        Self {
            kind: Self::KIND,
            username: username.to_string(),
            errors,
        }
    }

    pub fn mark_username_taken(&mut self) {
        let message = format!("A user named '{}' already exists.", self.username);
        self.errors.add("username", message);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
