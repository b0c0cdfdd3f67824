//! Comment edit and delete pages, owner-only.

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde_json::{Value, json};

use pressroom_core::contracts::{context, routes};
use pressroom_core::{Comment, CommentForm, User};

use crate::auth::CurrentUser;
use crate::error::HttpError;
use crate::handlers::news::CommentInput;
use crate::state::AppState;

/// Fetch a comment the user is allowed to mutate.
///
/// A comment belonging to someone else yields the same NOT_FOUND as a
/// missing one, so non-owners learn nothing about its existence.
async fn owned_comment(state: &AppState, user: &User, id: i64) -> Result<Comment, HttpError> {
    let comment = state.repos.comments.get_by_id(id).await?;
    if comment.author_id != user.id {
        return Err(HttpError::NotFound(format!("comment with id {id}")));
    }
    Ok(comment)
}

/// Edit page: the comment and a form pre-filled with its text.
pub async fn edit_page(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<Value>, HttpError> {
    let comment = owned_comment(&state, &user, id).await?;
    let form = CommentForm::prefilled(&comment.text);
    Ok(Json(json!({ context::COMMENT: comment, context::FORM: form })))
}

/// Apply an edit and return to the comment block on the detail page.
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Form(input): Form<CommentInput>,
) -> Result<Response, HttpError> {
    let comment = owned_comment(&state, &user, id).await?;

    let form = CommentForm::bound(&input.text);
    if !form.is_valid() {
        let page = json!({ context::COMMENT: comment, context::FORM: form });
        return Ok(Json(page).into_response());
    }

    let updated = state.repos.comments.update_text(comment.id, &form.text).await?;
    Ok(Redirect::to(&routes::news::comments_anchor(updated.news_id)).into_response())
}

/// Delete confirmation page.
pub async fn delete_page(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<Value>, HttpError> {
    let comment = owned_comment(&state, &user, id).await?;
    Ok(Json(json!({ context::COMMENT: comment })))
}

/// Delete the comment and return to the comment block.
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Response, HttpError> {
    let comment = owned_comment(&state, &user, id).await?;
    state.repos.comments.delete(comment.id).await?;
    tracing::debug!(comment_id = comment.id, "comment deleted");
    Ok(Redirect::to(&routes::news::comments_anchor(comment.news_id)).into_response())
}
