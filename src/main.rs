//! Movie-Crawler main entry point
//!
//! This is the command-line interface for the Movie-Crawler catalog scraper.

use anyhow::Context;
use clap::Parser;
use movie_crawler::config::{load_config_with_hash, validate, Config};
use movie_crawler::crawler::Coordinator;
use movie_crawler::output::print_summary;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Movie-Crawler: scrapes movie listings into per-category JSON files
///
/// Without arguments the built-in category list is crawled and each category
/// is written to its JSON file in the current directory.
#[derive(Parser, Debug)]
#[command(name = "movie-crawler")]
#[command(version)]
#[command(about = "Scrapes movie listings into per-category JSON files", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory the JSON files are written to
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.display().to_string();
        validate(&config)?;
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(config, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("movie_crawler=info,warn"),
            1 => EnvFilter::new("movie_crawler=debug,info"),
            2 => EnvFilter::new("movie_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the resolved configuration
fn handle_dry_run(config: &Config) {
    println!("=== Movie-Crawler Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Host: {}", config.crawler.host);
    println!(
        "  Max concurrent fetches: {}",
        config.crawler.max_concurrent_fetches
    );
    println!(
        "  User agent: {}",
        config.crawler.user_agent.as_deref().unwrap_or("(client default)")
    );

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);

    println!("\nCategories ({}):", config.categories.len());
    for category in &config.categories {
        println!(
            "  - {}: {}{} [{}] -> {}",
            category.name,
            config.crawler.host,
            category.listing_path,
            category.link_selector,
            category.output
        );
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
///
/// Category failures are logged and summarised; they do not fail the process.
async fn handle_crawl(config: Config, quiet: bool) -> anyhow::Result<()> {
    tracing::info!(
        "Crawling {} categories from {}",
        config.categories.len(),
        config.crawler.host
    );

    let coordinator = Coordinator::new(config)?;
    let summary = coordinator.run().await;

    if !quiet {
        println!();
        print_summary(&summary);
    }

    Ok(())
}
