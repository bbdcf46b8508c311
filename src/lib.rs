pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::browser::SystemBrowser;
pub use config::{CliConfig, Settings};
pub use core::{engine::SearchEngine, pipeline::SearchPipeline};
pub use domain::model::{Article, ParsedBatch, SearchReport};
pub use domain::ports::{ConfigProvider, LinkOpener, Pipeline};
pub use utils::error::{NewsError, Result};
