//! Notes pages: per-author listing, CRUD with slug uniqueness.

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use serde_json::{Value, json};

use pressroom_core::contracts::{context, routes};
use pressroom_core::{NewNote, Note, NoteForm, User};

use crate::auth::CurrentUser;
use crate::error::HttpError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct NoteInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub slug: String,
}

/// Landing page, open to everyone.
pub async fn home() -> Json<Value> {
    Json(json!({ "detail": "Notes." }))
}

/// The signed-in user's notes, insertion order.
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Value>, HttpError> {
    let notes = state.repos.notes.list_for_author(user.id).await?;
    Ok(Json(json!({ context::OBJECT_LIST: notes })))
}

/// Render the empty add form.
pub async fn add_page(CurrentUser(_user): CurrentUser) -> Json<Value> {
    Json(json!({ context::FORM: NoteForm::empty() }))
}

/// Create a note. A blank slug is derived from the title; a colliding
/// slug re-renders the form with the collision recorded on `slug`.
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(input): Form<NoteInput>,
) -> Result<Response, HttpError> {
    let mut form = NoteForm::bound(&input.title, &input.text, &input.slug);
    if form.is_valid() && state.repos.notes.slug_exists(&form.slug, None).await? {
        form.mark_slug_taken();
    }
    if !form.is_valid() {
        return Ok(Json(json!({ context::FORM: form })).into_response());
    }

    let note = state
        .repos
        .notes
        .insert(&NewNote {
            title: form.title.clone(),
            text: form.text.clone(),
            slug: form.slug.clone(),
            author_id: user.id,
        })
        .await?;
    tracing::debug!(note_id = note.id, slug = %note.slug, "note created");

    Ok(Redirect::to(routes::notes::SUCCESS).into_response())
}

/// Fetch a note the user is allowed to see or mutate.
///
/// Someone else's note yields the same NOT_FOUND as a missing slug, so
/// non-owners learn nothing about its existence.
async fn owned_note(state: &AppState, user: &User, slug: &str) -> Result<Note, HttpError> {
    let note = state.repos.notes.get_by_slug(slug).await?;
    if note.author_id != user.id {
        return Err(HttpError::NotFound(format!("note with slug '{slug}'")));
    }
    Ok(note)
}

/// Note detail page, owner only.
pub async fn detail(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Json<Value>, HttpError> {
    let note = owned_note(&state, &user, &slug).await?;
    Ok(Json(json!({ context::NOTE: note })))
}

/// Edit page: the note and a form pre-filled from it.
pub async fn edit_page(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Json<Value>, HttpError> {
    let note = owned_note(&state, &user, &slug).await?;
    let form = NoteForm::prefilled(&note.title, &note.text, &note.slug);
    Ok(Json(json!({ context::NOTE: note, context::FORM: form })))
}

/// Apply an edit. The note itself is excluded from the slug uniqueness
/// check, so saving without changing the slug always succeeds.
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
    Form(input): Form<NoteInput>,
) -> Result<Response, HttpError> {
    let note = owned_note(&state, &user, &slug).await?;

    let mut form = NoteForm::bound(&input.title, &input.text, &input.slug);
    if form.is_valid()
        && state
            .repos
            .notes
            .slug_exists(&form.slug, Some(note.id))
            .await?
    {
        form.mark_slug_taken();
    }
    if !form.is_valid() {
        let page = json!({ context::NOTE: note, context::FORM: form });
        return Ok(Json(page).into_response());
    }

    state
        .repos
        .notes
        .update(note.id, &form.title, &form.text, &form.slug)
        .await?;

    Ok(Redirect::to(routes::notes::SUCCESS).into_response())
}

/// Delete confirmation page.
pub async fn delete_page(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Json<Value>, HttpError> {
    let note = owned_note(&state, &user, &slug).await?;
    Ok(Json(json!({ context::NOTE: note })))
}

/// Delete the note.
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Response, HttpError> {
    let note = owned_note(&state, &user, &slug).await?;
    state.repos.notes.delete(note.id).await?;
    tracing::debug!(note_id = note.id, "note deleted");
    Ok(Redirect::to(routes::notes::SUCCESS).into_response())
}

/// Page shown after any successful mutation.
pub async fn success_page(CurrentUser(_user): CurrentUser) -> Json<Value> {
    Json(json!({ "detail": "Done." }))
}
