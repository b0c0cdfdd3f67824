//! Session-cookie authentication.
//!
//! A logged-in request carries a `session=<token>` cookie whose token is
//! stored server-side in the sessions table. Two extractors expose this
//! to handlers:
//!
//! - [`MaybeUser`] resolves to `Some(User)` or `None` and never blocks a
//!   request; public pages use it to vary their context by role.
//! - [`CurrentUser`] rejects anonymous requests with a redirect to
//!   `login?next=<original path>`, which is the route-protection
//!   contract owner-only pages rely on.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect, Response};

use pressroom_core::contracts::routes;
use pressroom_core::{RepositoryError, User};

use crate::error::HttpError;
use crate::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Pull the session token out of the `Cookie` header, if present.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    let prefix = format!("{SESSION_COOKIE}=");
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(prefix.as_str()))
        .map(str::to_string)
}

/// `Set-Cookie` value establishing a session.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly")
}

/// `Set-Cookie` value clearing the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0")
}

/// The requesting user, when the request carries a valid session.
pub struct MaybeUser(pub Option<User>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = session_token(&parts.headers) else {
            return Ok(Self(None));
        };
        let Some(user_id) = state.repos.sessions.user_id_for(&token).await? else {
            return Ok(Self(None));
        };
        match state.repos.users.get_by_id(user_id).await {
            Ok(user) => Ok(Self(Some(user))),
            // Stale session pointing at a deleted account: treat as anonymous
            Err(RepositoryError::NotFound(_)) => Ok(Self(None)),
            Err(e) => Err(e.into()),
        }
    }
}

/// The requesting user; anonymous requests are redirected to login.
pub struct CurrentUser(pub User);

/// Rejection for [`CurrentUser`]: either the login redirect, or a real
/// failure while resolving the session.
pub enum AuthRejection {
    LoginRedirect(String),
    Error(HttpError),
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::LoginRedirect(next) => {
                Redirect::to(&routes::auth::login_with_next(&next)).into_response()
            }
            Self::Error(e) => e.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let MaybeUser(user) = MaybeUser::from_request_parts(parts, state)
            .await
            .map_err(AuthRejection::Error)?;
        match user {
            Some(user) => Ok(Self(user)),
            None => {
                let next = parts
                    .uri
                    .path_and_query()
                    .map_or_else(|| parts.uri.path().to_string(), |pq| pq.as_str().to_string());
                tracing::debug!(path = %next, "anonymous request to protected route");
                Err(AuthRejection::LoginRedirect(next))
            }
        }
    }
}
