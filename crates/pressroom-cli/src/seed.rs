//! Demo data seeding.
//!
//! Fills an empty database with a couple of accounts, enough news to
//! overflow the home page and a handful of notes, so a freshly served
//! instance has something to show.

use anyhow::Result;
use chrono::{Duration, Utc};
use uuid::Uuid;

use pressroom_core::contracts::NEWS_COUNT_ON_HOME_PAGE;
use pressroom_core::{NewNewsItem, NewNote, NewUser, Repos, hash_password, slugify};

const DEMO_PASSWORD: &str = "pressroom";

async fn create_user(repos: &Repos, username: &str) -> Result<i64> {
    let salt = Uuid::new_v4().simple().to_string();
    let user = repos
        .users
        .insert(&NewUser {
            username: username.to_string(),
            password_hash: hash_password(DEMO_PASSWORD, &salt),
        })
        .await?;
    Ok(user.id)
}

pub async fn execute(repos: &Repos) -> Result<()> {
    if repos.news.count().await? > 0 || repos.notes.count().await? > 0 {
        anyhow::bail!("database already contains data, refusing to seed");
    }

    let author_id = create_user(repos, "author").await?;
    create_user(repos, "reader").await?;

    let today = Utc::now().date_naive();
    let items: Vec<NewNewsItem> = (0..NEWS_COUNT_ON_HOME_PAGE + 5)
        .map(|i| NewNewsItem {
            title: format!("News item {}", i + 1),
            text: "Just some text.".to_string(),
            date: today - Duration::days(i as i64),
        })
        .collect();
    repos.news.insert_many(&items).await?;

    for title in ["Shopping list", "Ideas", "Travel plans"] {
        repos
            .notes
            .insert(&NewNote {
                title: title.to_string(),
                text: format!("Notes about: {title}"),
                slug: slugify(title),
                author_id,
            })
            .await?;
    }

    tracing::info!(
        news = items.len(),
        notes = 3,
        "seeded demo data; accounts 'author' and 'reader', password '{DEMO_PASSWORD}'"
    );
    println!("Seeded {} news items and 3 notes.", items.len());
    println!("Demo accounts: author / reader (password: {DEMO_PASSWORD})");
    Ok(())
}
