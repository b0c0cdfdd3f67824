//! Login, logout and signup handlers, shared by both applications.

use axum::Json;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use pressroom_core::contracts::{context, routes};
use pressroom_core::{LoginForm, NewUser, RepositoryError, SignupForm, hash_password, verify_password};

use crate::auth::{clear_session_cookie, session_cookie, session_token};
use crate::error::HttpError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Page to return to, as placed in `login?next=...` by the redirect.
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Deserialize)]
pub struct SignupInput {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Render the login form.
pub async fn login_page() -> Json<Value> {
    Json(json!({ context::FORM: LoginForm::empty() }))
}

/// Check credentials, establish a session and redirect to `next`.
pub async fn login(
    State(state): State<AppState>,
    Form(input): Form<LoginInput>,
) -> Result<Response, HttpError> {
    let stored = match state.repos.users.password_hash(&input.username).await {
        Ok(stored) => stored,
        Err(RepositoryError::NotFound(_)) => {
            return Ok(rejected_login(&input.username));
        }
        Err(e) => return Err(e.into()),
    };
    if !verify_password(&input.password, &stored) {
        return Ok(rejected_login(&input.username));
    }

    let user = state.repos.users.get_by_username(&input.username).await?;
    let token = Uuid::new_v4().to_string();
    state.repos.sessions.insert(&token, user.id).await?;
    tracing::info!(user = %user.username, "logged in");

    // Only same-site relative targets are honored
    let target = input
        .next
        .filter(|n| n.starts_with('/'))
        .unwrap_or_else(|| "/".to_string());

    let mut response = Redirect::to(&target).into_response();
    response.headers_mut().insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&session_cookie(&token))
            .map_err(|e| HttpError::Internal(e.to_string()))?,
    );
    Ok(response)
}

fn rejected_login(username: &str) -> Response {
    Json(json!({ context::FORM: LoginForm::rejected(username) })).into_response()
}

/// Drop the server-side session and clear the cookie.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    if let Some(token) = session_token(&headers) {
        state.repos.sessions.delete(&token).await?;
    }

    let mut response = Json(json!({ "detail": "Logged out." })).into_response();
    response.headers_mut().insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&clear_session_cookie())
            .map_err(|e| HttpError::Internal(e.to_string()))?,
    );
    Ok(response)
}

/// Render the signup form.
pub async fn signup_page() -> Json<Value> {
    Json(json!({ context::FORM: SignupForm::empty() }))
}

/// Create an account and redirect to the login page.
pub async fn signup(
    State(state): State<AppState>,
    Form(input): Form<SignupInput>,
) -> Result<Response, HttpError> {
    let mut form = SignupForm::bound(&input.username, &input.password);
    if !form.is_valid() {
        return Ok(Json(json!({ context::FORM: form })).into_response());
    }

    let salt = Uuid::new_v4().simple().to_string();
    let new_user = NewUser {
        username: input.username.trim().to_string(),
        password_hash: hash_password(&input.password, &salt),
    };
    match state.repos.users.insert(&new_user).await {
        Ok(user) => {
            tracing::info!(user = %user.username, "signed up");
            Ok(Redirect::to(routes::auth::LOGIN).into_response())
        }
        Err(RepositoryError::AlreadyExists(_)) => {
            form.mark_username_taken();
            Ok(Json(json!({ context::FORM: form })).into_response())
        }
        Err(e) => Err(e.into()),
    }
}
