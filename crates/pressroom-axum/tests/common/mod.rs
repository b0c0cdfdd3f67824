//! Shared fixtures for the integration suites.
//!
//! Each test gets a fresh in-memory database wrapped in a [`TestApp`],
//! which seeds rows through the repositories and builds routers the same
//! way the server bootstrap does. Requests are driven with
//! `tower::ServiceExt::oneshot`, so no listener is bound.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use chrono::{DateTime, NaiveDate, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use pressroom_axum::{AppContext, AppState, CorsConfig, news_router, notes_router};
use pressroom_core::{
    Comment, NewComment, NewNewsItem, NewNote, NewUser, NewsItem, Note, User, hash_password,
};
use pressroom_db::{StoreFactory, setup_test_database};

/// Password every fixture user is created with.
pub const TEST_PASSWORD: &str = "secret";

pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = setup_test_database()
            .await
            .expect("in-memory database should initialize");
        let repos = StoreFactory::build_repos(pool);
        Self {
            state: Arc::new(AppContext::new(repos)),
        }
    }

    pub fn news_app(&self) -> Router {
        news_router(self.state.clone(), &CorsConfig::AllowAll)
    }

    pub fn notes_app(&self) -> Router {
        notes_router(self.state.clone(), &CorsConfig::AllowAll)
    }

    pub async fn create_user(&self, username: &str) -> User {
        let salt = Uuid::new_v4().simple().to_string();
        self.state
            .repos
            .users
            .insert(&NewUser {
                username: username.to_string(),
                password_hash: hash_password(TEST_PASSWORD, &salt),
            })
            .await
            .expect("user insert")
    }

    /// Establish a session for `user` and return the Cookie header value
    /// that authenticates as them.
    pub async fn login(&self, user: &User) -> String {
        let token = Uuid::new_v4().to_string();
        self.state
            .repos
            .sessions
            .insert(&token, user.id)
            .await
            .expect("session insert");
        format!("session={token}")
    }

    /// Seed one more news item than the home page shows, with day-offset
    /// dates, so both the cutoff and the ordering are observable.
    pub async fn seed_home_page_news(&self, base: NaiveDate) {
        use pressroom_core::contracts::NEWS_COUNT_ON_HOME_PAGE;
        for i in 0..=NEWS_COUNT_ON_HOME_PAGE {
            let date = base + chrono::Duration::days(i as i64);
            self.create_news(&format!("News {i}"), date).await;
        }
    }

    pub async fn create_news(&self, title: &str, date: NaiveDate) -> NewsItem {
        self.state
            .repos
            .news
            .insert(&NewNewsItem {
                title: title.to_string(),
                text: "Just some text.".to_string(),
                date,
            })
            .await
            .expect("news insert")
    }

    pub async fn create_comment(
        &self,
        news_id: i64,
        author_id: i64,
        text: &str,
        created: Option<DateTime<Utc>>,
    ) -> Comment {
        self.state
            .repos
            .comments
            .insert(&NewComment {
                news_id,
                author_id,
                text: text.to_string(),
                created,
            })
            .await
            .expect("comment insert")
    }

    pub async fn create_note(&self, author_id: i64, title: &str, text: &str, slug: &str) -> Note {
        self.state
            .repos
            .notes
            .insert(&NewNote {
                title: title.to_string(),
                text: text.to_string(),
                slug: slug.to_string(),
                author_id,
            })
            .await
            .expect("note insert")
    }
}

pub async fn get(app: Router, path: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(
    app: Router,
    path: &str,
    fields: &[(&str, &str)],
    cookie: Option<&str>,
) -> Response<Body> {
    let body = fields
        .iter()
        .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

pub async fn delete(app: Router, path: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("DELETE").uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Assert a redirect response pointing exactly at `expected`.
pub fn assert_redirect(response: &Response<Body>, expected: &str) {
    assert!(
        response.status().is_redirection(),
        "expected a redirect, got {}",
        response.status()
    );
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(location, expected);
}
