//! News items and their comments.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// A published news item. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub text: String,
    /// Publication date; the home page lists items newest-first.
    pub date: NaiveDate,
}

/// Data required to create a news item.
#[derive(Debug, Clone)]
pub struct NewNewsItem {
    pub title: String,
    pub text: String,
    pub date: NaiveDate,
}

/// A comment under a news item, owned by its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: i64,
    pub news_id: i64,
    pub author_id: i64,
    pub text: String,
    /// Creation timestamp; detail pages list comments oldest-first.
    pub created: DateTime<Utc>,
}

/// Data required to create a comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub news_id: i64,
    pub author_id: i64,
    pub text: String,
    /// Explicit creation timestamp; `None` means "now". Fixtures use
    /// this to force a known chronological order.
    pub created: Option<DateTime<Utc>>,
}
