use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One news item as returned by the search API. `published_at` keeps the
/// upstream timestamp verbatim; display formatting happens in the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub section: String,
    pub published_at: String,
    pub author: Option<String>,
    pub url: String,
}

/// Output of a single parse pass: surviving articles in upstream order,
/// plus the count of records dropped for missing required fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedBatch {
    pub articles: Vec<Article>,
    pub skipped: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub articles: Vec<Article>,
    pub skipped: usize,
    pub fetched_at: DateTime<Utc>,
}

impl SearchReport {
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
