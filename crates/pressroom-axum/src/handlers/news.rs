//! News pages: home listing, detail with comments, comment creation.

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use serde_json::{Value, json};

use pressroom_core::contracts::{NEWS_COUNT_ON_HOME_PAGE, context, routes};
use pressroom_core::{CommentForm, NewComment, NewsItem};

use crate::auth::{CurrentUser, MaybeUser};
use crate::error::HttpError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CommentInput {
    #[serde(default)]
    pub text: String,
}

/// Home page: the most recent news, newest first, capped at
/// [`NEWS_COUNT_ON_HOME_PAGE`].
pub async fn home(State(state): State<AppState>) -> Result<Json<Value>, HttpError> {
    let items = state.repos.news.list_recent(NEWS_COUNT_ON_HOME_PAGE).await?;
    Ok(Json(json!({ context::OBJECT_LIST: items })))
}

/// Detail page context: the item with its comments oldest-first, plus a
/// comment form for authenticated visitors only.
async fn detail_context(
    state: &AppState,
    item: &NewsItem,
    form: Option<&CommentForm>,
) -> Result<Value, HttpError> {
    let comments = state.repos.comments.list_for_news(item.id).await?;

    let mut news = serde_json::to_value(item).map_err(|e| HttpError::Internal(e.to_string()))?;
    news["comments"] = json!(comments);

    let mut page = json!({ context::NEWS: news });
    if let Some(form) = form {
        page[context::FORM] = json!(form);
    }
    Ok(page)
}

/// News detail page.
pub async fn detail(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<i64>,
) -> Result<Json<Value>, HttpError> {
    let item = state.repos.news.get_by_id(id).await?;
    let form = user.map(|_| CommentForm::empty());
    Ok(Json(detail_context(&state, &item, form.as_ref()).await?))
}

/// Post a comment under a news item.
///
/// Anonymous requests never reach this handler; [`CurrentUser`] already
/// redirected them to login. Validation failures re-render the detail
/// context with the bound form and persist nothing.
pub async fn create_comment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Form(input): Form<CommentInput>,
) -> Result<Response, HttpError> {
    let item = state.repos.news.get_by_id(id).await?;

    let form = CommentForm::bound(&input.text);
    if !form.is_valid() {
        let page = detail_context(&state, &item, Some(&form)).await?;
        return Ok(Json(page).into_response());
    }

    let comment = state
        .repos
        .comments
        .insert(&NewComment {
            news_id: item.id,
            author_id: user.id,
            text: form.text.clone(),
            created: None,
        })
        .await?;
    tracing::debug!(comment_id = comment.id, news_id = item.id, "comment created");

    Ok(Redirect::to(&routes::news::comments_anchor(item.id)).into_response())
}
