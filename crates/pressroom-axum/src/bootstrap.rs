//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use pressroom_core::Repos;
use pressroom_db::{StoreFactory, setup_database};

use crate::routes::{news_router, notes_router};
use crate::state::AppState;

/// Which of the two applications a server instance hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppSelect {
    /// News/comments site.
    News,
    /// Personal notes application.
    Notes,
}

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Application to serve.
    pub app: AppSelect,
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub db_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

/// Application context for the Axum adapter.
///
/// Holds the repository aggregate every handler works against.
pub struct AppContext {
    pub repos: Repos,
}

impl AppContext {
    pub fn new(repos: Repos) -> Self {
        Self { repos }
    }
}

/// Bootstrap the application context from configuration.
///
/// Opens (creating if needed) the database and builds the repository set.
pub async fn bootstrap(config: &ServerConfig) -> Result<AppContext> {
    let pool = setup_database(&config.db_path).await?;
    Ok(AppContext::new(StoreFactory::build_repos(pool)))
}

/// Bootstrap and serve the selected application until shutdown.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config).await?;
    let state: AppState = Arc::new(ctx);

    let app = match config.app {
        AppSelect::News => news_router(state, &config.cors),
        AppSelect::Notes => notes_router(state, &config.cors),
    };

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
    tracing::info!(app = ?config.app, port = config.port, "starting server");
    axum::serve(listener, app).await?;
    Ok(())
}
