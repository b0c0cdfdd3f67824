//! Signup, login and logout flows over the shared auth routes.

mod common;

use axum::http::header;

use common::{TEST_PASSWORD, TestApp, assert_redirect, get, json_body, post_form};
use pressroom_core::contracts::routes;

#[tokio::test]
async fn signup_creates_an_account_and_redirects_to_login() {
    let app = TestApp::new().await;

    let response = post_form(
        app.news_app(),
        routes::auth::SIGNUP,
        &[("username", "newcomer"), ("password", "hunter2")],
        None,
    )
    .await;

    assert_redirect(&response, routes::auth::LOGIN);
    let user = app.state.repos.users.get_by_username("newcomer").await.unwrap();
    assert_eq!(user.username, "newcomer");
}

#[tokio::test]
async fn signup_rejects_a_taken_username() {
    let app = TestApp::new().await;
    app.create_user("taken").await;

    let response = post_form(
        app.news_app(),
        routes::auth::SIGNUP,
        &[("username", "taken"), ("password", "hunter2")],
        None,
    )
    .await;

    assert_eq!(response.status(), 200);
    let body = json_body(response).await;
    assert_eq!(body["form"]["kind"], "signup");
    assert!(!body["form"]["errors"]["username"][0]
        .as_str()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn login_sets_a_session_cookie_and_honors_next() {
    let app = TestApp::new().await;
    let user = app.create_user("reader").await;

    let response = post_form(
        app.news_app(),
        routes::auth::LOGIN,
        &[
            ("username", &user.username),
            ("password", TEST_PASSWORD),
            ("next", "/notes/"),
        ],
        None,
    )
    .await;

    assert_redirect(&response, "/notes/");
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(cookie.starts_with("session="));

    // The issued session resolves to the user
    let token = cookie
        .trim_start_matches("session=")
        .split(';')
        .next()
        .unwrap();
    let resolved = app.state.repos.sessions.user_id_for(token).await.unwrap();
    assert_eq!(resolved, Some(user.id));
}

#[tokio::test]
async fn login_with_wrong_password_rerenders_the_form() {
    let app = TestApp::new().await;
    let user = app.create_user("reader").await;

    let response = post_form(
        app.news_app(),
        routes::auth::LOGIN,
        &[("username", &user.username), ("password", "wrong")],
        None,
    )
    .await;

    assert_eq!(response.status(), 200);
    let body = json_body(response).await;
    assert_eq!(body["form"]["kind"], "login");
    assert!(body["form"]["errors"]["__all__"][0].is_string());
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let app = TestApp::new().await;
    let user = app.create_user("reader").await;
    let cookie = app.login(&user).await;

    let response = get(app.notes_app(), routes::auth::LOGOUT, Some(&cookie)).await;
    assert_eq!(response.status(), 200);

    // The old cookie no longer grants access to protected pages
    let response = get(app.notes_app(), routes::notes::LIST, Some(&cookie)).await;
    assert_redirect(&response, &routes::auth::login_with_next(routes::notes::LIST));
}
