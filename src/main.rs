// src/main.rs

use anyhow::Context;
use clap::Parser;
use hacocms_source::output::{deliver_nodes, DeliveryTarget};
use hacocms_source::{
    source_nodes, CommandLineInput, HacoCmsHttpClient, MemoryNodeStore, SourceConfig,
    SourceReport,
};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;

/// Sets up logging configuration.
///
/// Console output goes to stderr so a node dump on stdout stays clean.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("hacocms_source.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(log_level)))
                .build("stderr", Box::new(stderr_appender)),
        )
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(LevelFilter::Debug),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Fetches every configured API into an in-memory node store and delivers the nodes.
async fn execute(config: &SourceConfig) -> anyhow::Result<()> {
    log::info!(
        "Sourcing {} API(s) from {} (token {})",
        config.apis.len(),
        config.base_url,
        config.access_token
    );
    if config.draft_token.is_some() {
        log::info!("Draft token set, unpublished content is included");
    }

    let client = HacoCmsHttpClient::new(
        &config.base_url,
        &config.access_token,
        config.draft_token.as_ref(),
    )?;
    let store = MemoryNodeStore::new();

    let reports = source_nodes(&store, &client, &config.apis, &config.options)
        .await
        .context("sourcing hacoCMS content failed")?;

    let target = DeliveryTarget::from_output(config.output_file.as_deref());
    deliver_nodes(&store, &target).context("writing nodes failed")?;

    report_completion(&reports, &store, &target);
    Ok(())
}

/// Reports per-endpoint stats on stderr.
fn report_completion(reports: &[SourceReport], store: &MemoryNodeStore, target: &DeliveryTarget) {
    for report in reports {
        eprintln!(
            "✓ {} ({}): {} node(s) from {} request(s)",
            report.endpoint, report.kind, report.nodes_created, report.pages_fetched
        );
    }
    if let DeliveryTarget::WriteFile { path } = target {
        eprintln!("📄 {} node(s) saved to {}", store.len(), path.display());
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = SourceConfig::resolve(cli)?;

    execute(&config).await
}
