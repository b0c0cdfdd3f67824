#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export repository implementations
pub use repositories::{
    SqliteCommentRepository, SqliteNewsRepository, SqliteNoteRepository, SqliteSessionRepository,
    SqliteUserRepository,
};

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

// The bundled sqlite build is linked through this crate even though no
// symbol is referenced directly.
use libsqlite3_sys as _;
