//! Quizzie - quiz answer statistics
//!
//! Entry point for the command-line front end.

use anyhow::Result;
use clap::Parser;
use quizzie::cli::{self, Cli};
use quizzie::config::AppConfig;
use quizzie::{FileStorage, StatisticsStore};
use tracing::debug;

fn main() -> Result<()> {
    // Initialize logging on stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizzie=info".parse()?),
        )
        .init();

    let args = Cli::parse();

    let config_path = args.config.clone().unwrap_or_else(AppConfig::path);
    let config = AppConfig::load(&config_path);
    let data_dir = args.data_dir.clone().unwrap_or_else(|| config.data_dir());

    debug!(version = quizzie::VERSION, data_dir = %data_dir.display(), "Starting quizzie");

    let mut store = StatisticsStore::new(FileStorage::new(data_dir));
    let stdout = std::io::stdout();
    cli::execute(
        &args.command,
        &mut store,
        &config,
        &config_path,
        &mut stdout.lock(),
    )
}
