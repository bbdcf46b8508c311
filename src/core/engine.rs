use crate::domain::model::SearchReport;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use chrono::Utc;

/// Drives one fetch-parse cycle. The caller-facing state machine
/// (idle -> loading -> loaded/empty/error) reduces to these stages;
/// errors propagate as tagged values instead of collapsing to an
/// empty list, so the presentation layer can tell "no results" from
/// "the service is down".
pub struct SearchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SearchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<SearchReport> {
        tracing::info!("Fetching articles...");
        let body = self.pipeline.fetch().await?;
        tracing::debug!("Received {} bytes", body.len());

        tracing::info!("Parsing response...");
        let batch = self.pipeline.parse(body).await?;
        if batch.skipped > 0 {
            tracing::warn!("Dropped {} malformed records", batch.skipped);
        }
        tracing::info!("Parsed {} articles", batch.articles.len());

        Ok(SearchReport {
            articles: batch.articles,
            skipped: batch.skipped,
            fetched_at: Utc::now(),
        })
    }
}
