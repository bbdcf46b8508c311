use crate::domain::model::ParsedBatch;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn query_term(&self) -> &str;
    fn order_by(&self) -> &str;
    fn api_key(&self) -> &str;
    fn extra_params(&self) -> &[(String, String)];
    fn connect_timeout_ms(&self) -> u64;
    fn read_timeout_ms(&self) -> u64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<String>;
    async fn parse(&self, body: String) -> Result<ParsedBatch>;
}

/// Click-through seam: the production implementation hands the URL to the
/// system browser, tests record it instead.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}
