use crate::domain::model::{Article, ParsedBatch};
use crate::utils::error::{NewsError, Result};
use serde_json::Value;

/// Extract articles from a search response body.
///
/// An empty body yields an empty batch. Malformed JSON, or a missing
/// `response.results` array, fails the whole parse with `MalformedJson`.
/// Individual records missing a required field are skipped and counted
/// rather than discarding the batch.
pub fn parse_articles(body: &str) -> Result<ParsedBatch> {
    if body.trim().is_empty() {
        return Ok(ParsedBatch::default());
    }

    let root: Value = serde_json::from_str(body).map_err(|e| NewsError::MalformedJson {
        message: e.to_string(),
    })?;

    let results = root
        .get("response")
        .and_then(|r| r.get("results"))
        .and_then(|r| r.as_array())
        .ok_or_else(|| NewsError::MalformedJson {
            message: "missing `response.results` array".to_string(),
        })?;

    let mut articles = Vec::with_capacity(results.len());
    let mut skipped = 0usize;

    for (index, entry) in results.iter().enumerate() {
        match extract_article(entry) {
            Some(article) => articles.push(article),
            None => {
                tracing::warn!(index, "Skipping result with missing required fields");
                skipped += 1;
            }
        }
    }

    Ok(ParsedBatch { articles, skipped })
}

/// Required fields: `webTitle`, `sectionName`, `webPublicationDate`,
/// `webUrl`. The author is best-effort from `tags[0].webTitle`.
fn extract_article(entry: &Value) -> Option<Article> {
    let title = entry.get("webTitle")?.as_str()?;
    let section = entry.get("sectionName")?.as_str()?;
    let published_at = entry.get("webPublicationDate")?.as_str()?;
    let url = entry.get("webUrl")?.as_str()?;

    let author = entry
        .get("tags")
        .and_then(|tags| tags.as_array())
        .and_then(|tags| tags.first())
        .and_then(|tag| tag.get("webTitle"))
        .and_then(|name| name.as_str())
        .map(str::to_string);

    Some(Article {
        title: title.to_string(),
        section: section.to_string(),
        published_at: published_at.to_string(),
        author,
        url: url.to_string(),
    })
}
