#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod contracts;
pub mod domain;
pub mod forms;
pub mod ports;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{Comment, NewComment, NewNewsItem, NewNote, NewUser, NewsItem, Note, User};
pub use forms::{
    BAD_WORDS, COMMENT_WARNING, CommentForm, FormErrors, LoginForm, NoteForm, REQUIRED_FIELD,
    SLUG_WARNING, SignupForm,
};
pub use ports::{
    CommentRepository, NewsRepository, NoteRepository, Repos, RepositoryError, SessionRepository,
    UserRepository,
};
pub use utils::{hash_password, slugify, verify_password};
