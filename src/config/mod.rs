pub mod toml_config;

use crate::core::render;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    self, validate_non_empty_string, validate_one_of, validate_positive_number, validate_url,
    Validate,
};
use clap::Parser;
use toml_config::TomlConfig;

pub const DEFAULT_ENDPOINT: &str = "https://content.guardianapis.com/search";
pub const DEFAULT_QUERY: &str = "climate";
pub const DEFAULT_ORDER_BY: &str = "newest";
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Parser)]
#[command(name = "newsdesk")]
#[command(about = "Fetch and display news articles from a search API")]
pub struct CliConfig {
    /// Search term sent as the `q` parameter
    #[arg(short, long)]
    pub query: Option<String>,

    /// Search API endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Result ordering requested from the API
    #[arg(long)]
    pub order_by: Option<String>,

    /// API key for the search service
    #[arg(long, env = "NEWSDESK_API_KEY")]
    pub api_key: Option<String>,

    /// Output format: plain, json or csv
    #[arg(long, default_value = "plain")]
    pub format: String,

    /// Show at most this many articles
    #[arg(long)]
    pub limit: Option<usize>,

    /// Open the Nth listed article in the browser after rendering
    #[arg(long)]
    pub open: Option<usize>,

    /// Optional path to a TOML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Fully resolved configuration: CLI flags override file values, file
/// values override the built-in defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: String,
    pub query: String,
    pub order_by: String,
    pub api_key: String,
    pub extra_params: Vec<(String, String)>,
    pub connect_timeout_ms: u64,
    pub read_timeout_ms: u64,
    pub format: String,
    pub limit: Option<usize>,
    pub open: Option<usize>,
}

impl Settings {
    pub fn resolve(cli: CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };
        let search = file.as_ref().map(|f| f.search.clone());
        let http = file.as_ref().and_then(|f| f.http.clone());

        let api_key = cli
            .api_key
            .or_else(|| search.as_ref().and_then(|s| s.api_key.clone()));
        let api_key = validation::validate_required_field("api_key", &api_key)?.clone();

        // Sorted so the generated URL is deterministic.
        let mut extra_params: Vec<(String, String)> = search
            .as_ref()
            .and_then(|s| s.parameters.clone())
            .unwrap_or_default()
            .into_iter()
            .collect();
        extra_params.sort();

        Ok(Self {
            endpoint: cli
                .endpoint
                .or_else(|| search.as_ref().and_then(|s| s.endpoint.clone()))
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            query: cli
                .query
                .or_else(|| search.as_ref().and_then(|s| s.query.clone()))
                .unwrap_or_else(|| DEFAULT_QUERY.to_string()),
            order_by: cli
                .order_by
                .or_else(|| search.as_ref().and_then(|s| s.order_by.clone()))
                .unwrap_or_else(|| DEFAULT_ORDER_BY.to_string()),
            api_key,
            extra_params,
            connect_timeout_ms: http
                .as_ref()
                .and_then(|h| h.connect_timeout_ms)
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_MS),
            read_timeout_ms: http
                .as_ref()
                .and_then(|h| h.read_timeout_ms)
                .unwrap_or(DEFAULT_READ_TIMEOUT_MS),
            format: cli.format,
            limit: cli.limit,
            open: cli.open,
        })
    }
}

impl ConfigProvider for Settings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn query_term(&self) -> &str {
        &self.query
    }

    fn order_by(&self) -> &str {
        &self.order_by
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn extra_params(&self) -> &[(String, String)] {
        &self.extra_params
    }

    fn connect_timeout_ms(&self) -> u64 {
        self.connect_timeout_ms
    }

    fn read_timeout_ms(&self) -> u64 {
        self.read_timeout_ms
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("query", &self.query)?;
        validate_non_empty_string("order_by", &self.order_by)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_one_of("format", &self.format, render::FORMATS)?;
        validate_positive_number("connect_timeout_ms", self.connect_timeout_ms as usize, 1)?;
        validate_positive_number("read_timeout_ms", self.read_timeout_ms as usize, 1)?;

        if let Some(limit) = self.limit {
            validate_positive_number("limit", limit, 1)?;
        }
        if let Some(open) = self.open {
            validate_positive_number("open", open, 1)?;
        }

        Ok(())
    }
}
