//! HTTP request handlers.
//!
//! Each submodule covers one page area. Handlers are thin: extractors
//! in, repository calls, JSON context or redirect out.

pub mod auth;
pub mod comments;
pub mod news;
pub mod notes;
