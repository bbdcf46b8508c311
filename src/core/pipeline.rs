use crate::core::{fetcher::Fetcher, parser, query};
use crate::domain::model::ParsedBatch;
use crate::domain::ports::{ConfigProvider, Pipeline};
use crate::utils::error::Result;
use std::time::Duration;

pub struct SearchPipeline<C: ConfigProvider> {
    config: C,
    fetcher: Fetcher,
}

impl<C: ConfigProvider> SearchPipeline<C> {
    pub fn new(config: C) -> Result<Self> {
        let fetcher = Fetcher::new(
            Duration::from_millis(config.connect_timeout_ms()),
            Duration::from_millis(config.read_timeout_ms()),
        )?;
        Ok(Self { config, fetcher })
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for SearchPipeline<C> {
    async fn fetch(&self) -> Result<String> {
        let url = query::build_search_url(&self.config)?;

        // The full URL carries the api-key, so only the endpoint is logged.
        tracing::debug!("Making API request to: {}", self.config.endpoint());
        self.fetcher.fetch(&url).await
    }

    async fn parse(&self, body: String) -> Result<ParsedBatch> {
        parser::parse_articles(&body)
    }
}
