//! Route definitions and router construction.
//!
//! One router per application. Both share the auth routes and the same
//! state type, so either can be served (or driven in tests) on its own.
//!
//! # Path Parameter Syntax
//! Axum 0.8 uses brace syntax for path parameters: `{id}`, `{slug}`

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::CorsConfig;
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Auth pages shared by both applications.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/auth/login",
            get(handlers::auth::login_page).post(handlers::auth::login),
        )
        .route("/auth/logout", get(handlers::auth::logout))
        .route(
            "/auth/signup",
            get(handlers::auth::signup_page).post(handlers::auth::signup),
        )
}

/// Create the news/comments application router.
pub fn news_router(state: AppState, cors_config: &CorsConfig) -> Router {
    Router::new()
        .route("/", get(handlers::news::home))
        .route(
            "/news/{id}",
            get(handlers::news::detail).post(handlers::news::create_comment),
        )
        .route(
            "/comments/{id}/edit",
            get(handlers::comments::edit_page).post(handlers::comments::update),
        )
        .route(
            "/comments/{id}/delete",
            get(handlers::comments::delete_page)
                .post(handlers::comments::remove)
                .delete(handlers::comments::remove),
        )
        .merge(auth_routes())
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_config))
        .with_state(state)
}

/// Create the notes application router.
pub fn notes_router(state: AppState, cors_config: &CorsConfig) -> Router {
    Router::new()
        .route("/", get(handlers::notes::home))
        .route("/notes/", get(handlers::notes::list))
        .route(
            "/notes/add",
            get(handlers::notes::add_page).post(handlers::notes::create),
        )
        .route("/notes/{slug}", get(handlers::notes::detail))
        .route(
            "/notes/{slug}/edit",
            get(handlers::notes::edit_page).post(handlers::notes::update),
        )
        .route(
            "/notes/{slug}/delete",
            get(handlers::notes::delete_page)
                .post(handlers::notes::remove)
                .delete(handlers::notes::remove),
        )
        .route("/done/", get(handlers::notes::success_page))
        .merge(auth_routes())
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_config))
        .with_state(state)
}
