//! Small pure utilities shared across the workspace.

mod password;
mod slugify;

pub use password::{hash_password, verify_password};
pub use slugify::slugify;
