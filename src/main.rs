use clap::Parser;
use newsdesk::adapters::browser;
use newsdesk::core::render;
use newsdesk::utils::error::ErrorCategory;
use newsdesk::utils::{logger, validation::Validate};
use newsdesk::{CliConfig, NewsError, SearchEngine, SearchPipeline, Settings, SystemBrowser};

fn exit_code(error: &NewsError) -> i32 {
    match error.category() {
        ErrorCategory::Config => 2,
        ErrorCategory::Network => 3,
        ErrorCategory::Parse => 4,
        ErrorCategory::Io => 5,
    }
}

fn fail(error: NewsError) -> ! {
    tracing::error!("{}", error);
    eprintln!("❌ {}", error.user_friendly_message());
    std::process::exit(exit_code(&error));
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting newsdesk");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match Settings::resolve(cli) {
        Ok(settings) => settings,
        Err(e) => fail(e),
    };
    if let Err(e) = settings.validate() {
        fail(e);
    }

    let format = settings.format.clone();
    let limit = settings.limit;
    let open = settings.open;

    let pipeline = match SearchPipeline::new(settings) {
        Ok(pipeline) => pipeline,
        Err(e) => fail(e),
    };
    let engine = SearchEngine::new(pipeline);

    let mut report = match engine.run().await {
        Ok(report) => report,
        Err(e) => fail(e),
    };

    if let Some(limit) = limit {
        report.articles.truncate(limit);
    }

    match render::render(&format, &report) {
        Ok(output) => println!("{}", output),
        Err(e) => fail(e),
    }

    if let Some(position) = open {
        if let Err(e) = browser::open_nth(&report.articles, position, &SystemBrowser::new()) {
            fail(e);
        }
    }
}
