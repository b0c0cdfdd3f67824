//! Mutation tests for notes: creation with explicit, derived and
//! colliding slugs, plus owner-only edit and delete.

mod common;

use common::{TestApp, assert_redirect, delete, json_body, post_form};
use pressroom_core::contracts::routes;
use pressroom_core::{SLUG_WARNING, slugify};

const TITLE: &str = "Note title";
const TEXT: &str = "Note text";
const SLUG: &str = "note-slug";

const NEW_TITLE: &str = "Updated title";
const NEW_TEXT: &str = "Updated text";
const NEW_SLUG: &str = "updated-slug";

#[tokio::test]
async fn user_can_create_note() {
    let app = TestApp::new().await;
    let author = app.create_user("author").await;
    let cookie = app.login(&author).await;

    let response = post_form(
        app.notes_app(),
        routes::notes::ADD,
        &[("title", TITLE), ("text", TEXT), ("slug", SLUG)],
        Some(&cookie),
    )
    .await;

    assert_redirect(&response, routes::notes::SUCCESS);
    assert_eq!(app.state.repos.notes.count().await.unwrap(), 1);

    let note = app.state.repos.notes.get_by_slug(SLUG).await.unwrap();
    assert_eq!(note.title, TITLE);
    assert_eq!(note.text, TEXT);
    assert_eq!(note.author_id, author.id);
}

#[tokio::test]
async fn anonymous_user_cant_create_note() {
    let app = TestApp::new().await;

    let response = post_form(
        app.notes_app(),
        routes::notes::ADD,
        &[("title", TITLE), ("text", TEXT), ("slug", SLUG)],
        None,
    )
    .await;

    assert_redirect(&response, &routes::auth::login_with_next(routes::notes::ADD));
    assert_eq!(app.state.repos.notes.count().await.unwrap(), 0);
}

#[tokio::test]
async fn empty_slug_is_derived_from_title() {
    let app = TestApp::new().await;
    let author = app.create_user("author").await;
    let cookie = app.login(&author).await;

    let response = post_form(
        app.notes_app(),
        routes::notes::ADD,
        &[("title", TITLE), ("text", TEXT)],
        Some(&cookie),
    )
    .await;

    assert_redirect(&response, routes::notes::SUCCESS);
    let expected = slugify(TITLE);
    let note = app.state.repos.notes.get_by_slug(&expected).await.unwrap();
    assert_eq!(note.slug, expected);
}

#[tokio::test]
async fn duplicate_slug_is_rejected() {
    let app = TestApp::new().await;
    let author = app.create_user("author").await;
    app.create_note(author.id, TITLE, TEXT, SLUG).await;
    let cookie = app.login(&author).await;

    let response = post_form(
        app.notes_app(),
        routes::notes::ADD,
        &[("title", "Another"), ("text", "Other text"), ("slug", SLUG)],
        Some(&cookie),
    )
    .await;

    assert_eq!(response.status(), 200);
    let body = json_body(response).await;
    assert_eq!(
        body["form"]["errors"]["slug"][0],
        format!("{SLUG}{SLUG_WARNING}")
    );
    assert_eq!(app.state.repos.notes.count().await.unwrap(), 1);
}

#[tokio::test]
async fn author_can_edit_note() {
    let app = TestApp::new().await;
    let author = app.create_user("author").await;
    let note = app.create_note(author.id, TITLE, TEXT, SLUG).await;
    let cookie = app.login(&author).await;

    let response = post_form(
        app.notes_app(),
        &routes::notes::edit(&note.slug),
        &[("title", NEW_TITLE), ("text", NEW_TEXT), ("slug", NEW_SLUG)],
        Some(&cookie),
    )
    .await;

    assert_redirect(&response, routes::notes::SUCCESS);
    let stored = app.state.repos.notes.get_by_id(note.id).await.unwrap();
    assert_eq!(stored.title, NEW_TITLE);
    assert_eq!(stored.text, NEW_TEXT);
    assert_eq!(stored.slug, NEW_SLUG);
}

#[tokio::test]
async fn keeping_the_same_slug_on_edit_is_allowed() {
    let app = TestApp::new().await;
    let author = app.create_user("author").await;
    let note = app.create_note(author.id, TITLE, TEXT, SLUG).await;
    let cookie = app.login(&author).await;

    let response = post_form(
        app.notes_app(),
        &routes::notes::edit(&note.slug),
        &[("title", NEW_TITLE), ("text", NEW_TEXT), ("slug", SLUG)],
        Some(&cookie),
    )
    .await;

    assert_redirect(&response, routes::notes::SUCCESS);
    let stored = app.state.repos.notes.get_by_id(note.id).await.unwrap();
    assert_eq!(stored.title, NEW_TITLE);
}

#[tokio::test]
async fn other_user_cant_edit_note() {
    let app = TestApp::new().await;
    let author = app.create_user("author").await;
    let other = app.create_user("other").await;
    let note = app.create_note(author.id, TITLE, TEXT, SLUG).await;
    let cookie = app.login(&other).await;

    let response = post_form(
        app.notes_app(),
        &routes::notes::edit(&note.slug),
        &[("title", NEW_TITLE), ("text", NEW_TEXT), ("slug", NEW_SLUG)],
        Some(&cookie),
    )
    .await;

    assert_eq!(response.status(), 404);
    let stored = app.state.repos.notes.get_by_id(note.id).await.unwrap();
    assert_eq!(stored.title, TITLE);
    assert_eq!(stored.text, TEXT);
    assert_eq!(stored.slug, SLUG);
}

#[tokio::test]
async fn author_can_delete_note() {
    let app = TestApp::new().await;
    let author = app.create_user("author").await;
    let note = app.create_note(author.id, TITLE, TEXT, SLUG).await;
    let cookie = app.login(&author).await;

    let response = delete(app.notes_app(), &routes::notes::delete(&note.slug), Some(&cookie)).await;

    assert_redirect(&response, routes::notes::SUCCESS);
    assert_eq!(app.state.repos.notes.count().await.unwrap(), 0);
}

#[tokio::test]
async fn other_user_cant_delete_note() {
    let app = TestApp::new().await;
    let author = app.create_user("author").await;
    let other = app.create_user("other").await;
    let note = app.create_note(author.id, TITLE, TEXT, SLUG).await;
    let cookie = app.login(&other).await;

    let response = post_form(
        app.notes_app(),
        &routes::notes::delete(&note.slug),
        &[],
        Some(&cookie),
    )
    .await;

    assert_eq!(response.status(), 404);
    assert_eq!(app.state.repos.notes.count().await.unwrap(), 1);
}
