#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod auth;
pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AppContext, AppSelect, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::{news_router, notes_router};
pub use state::AppState;
