//! Route availability for the notes application: public pages,
//! pages requiring login, owner-only note pages and anonymous redirects.

mod common;

use common::{TestApp, assert_redirect, get};
use pressroom_core::contracts::routes;

#[tokio::test]
async fn pages_available_to_anonymous_users() {
    let app = TestApp::new().await;

    let urls = [
        routes::notes::HOME,
        routes::auth::LOGIN,
        routes::auth::LOGOUT,
        routes::auth::SIGNUP,
    ];
    for url in urls {
        let response = get(app.notes_app(), url, None).await;
        assert_eq!(response.status(), 200, "GET {url}");
    }
}

#[tokio::test]
async fn pages_available_to_authenticated_users() {
    let app = TestApp::new().await;
    let user = app.create_user("user").await;
    let cookie = app.login(&user).await;

    let urls = [routes::notes::LIST, routes::notes::SUCCESS, routes::notes::ADD];
    for url in urls {
        let response = get(app.notes_app(), url, Some(&cookie)).await;
        assert_eq!(response.status(), 200, "GET {url}");
    }
}

#[tokio::test]
async fn note_pages_available_to_author_only() {
    let app = TestApp::new().await;
    let author = app.create_user("author").await;
    let other = app.create_user("other").await;
    let note = app.create_note(author.id, "Title", "Text", "note-slug").await;

    let author_cookie = app.login(&author).await;
    let other_cookie = app.login(&other).await;

    let urls = [
        routes::notes::detail(&note.slug),
        routes::notes::edit(&note.slug),
        routes::notes::delete(&note.slug),
    ];
    for url in &urls {
        let response = get(app.notes_app(), url, Some(&author_cookie)).await;
        assert_eq!(response.status(), 200, "author GET {url}");

        let response = get(app.notes_app(), url, Some(&other_cookie)).await;
        assert_eq!(response.status(), 404, "other user GET {url}");
    }
}

#[tokio::test]
async fn anonymous_client_is_redirected_to_login() {
    let app = TestApp::new().await;
    let author = app.create_user("author").await;
    let note = app.create_note(author.id, "Title", "Text", "note-slug").await;

    let urls = [
        routes::notes::LIST.to_string(),
        routes::notes::SUCCESS.to_string(),
        routes::notes::ADD.to_string(),
        routes::notes::detail(&note.slug),
        routes::notes::edit(&note.slug),
        routes::notes::delete(&note.slug),
    ];
    for url in &urls {
        let response = get(app.notes_app(), url, None).await;
        assert_redirect(&response, &routes::auth::login_with_next(url));
    }
}
