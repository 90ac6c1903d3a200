//! Crawler coordinator - category crawl orchestration
//!
//! This module drives the whole run:
//! - Fetching each category's listing page and discovering detail links
//! - Fetching detail pages through the bounded scheduler
//! - Extracting one movie per fetched page, in discovery order
//! - Handing the category's movies to the output sink
//!
//! Failures are logged where they occur. A listing failure skips its category,
//! a detail failure skips one movie, and neither stops the run.

use crate::config::{validate, Category, Config};
use crate::crawler::extractor::{extract_movie_from_html, ExtractRules};
use crate::crawler::fetcher::{build_http_client, fetch_document};
use crate::crawler::links::discover_links;
use crate::crawler::scheduler::Scheduler;
use crate::output::{CategoryOutcome, CategoryReport, JsonFileSink, MovieSink, RunSummary};
use crate::{CrawlError, Result};
use reqwest::Client;
use scraper::{Html, Selector};

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Config,
    client: Client,
    scheduler: Scheduler,
    rules: ExtractRules,
    sink: Box<dyn MovieSink + Send + Sync>,
}

impl Coordinator {
    /// Creates a coordinator writing JSON files to the configured directory
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Configuration is valid and the client was built
    /// * `Err(CrawlError)` - Invalid configuration or HTTP client failure
    pub fn new(config: Config) -> Result<Self> {
        let sink = JsonFileSink::new(&config.output.directory);
        Self::with_sink(config, Box::new(sink))
    }

    /// Creates a coordinator that hands every category's movies to `sink`
    pub fn with_sink(
        config: Config,
        sink: Box<dyn MovieSink + Send + Sync>,
    ) -> Result<Self> {
        validate(&config)?;

        let rules = ExtractRules::new(&config.selectors, &config.labels)?;
        let client = build_http_client(&config.crawler)?;
        let scheduler = Scheduler::new(client.clone(), config.crawler.max_concurrent_fetches);

        Ok(Self {
            config,
            client,
            scheduler,
            rules,
            sink,
        })
    }

    /// Crawls every category in declared order
    ///
    /// Each category runs to completion before the next starts, whatever the
    /// outcome of the previous one.
    pub async fn run(&self) -> RunSummary {
        let mut summary = RunSummary::default();

        for category in &self.config.categories {
            match self.crawl_category(category).await {
                Ok(report) => summary.push(CategoryOutcome::Written(report)),
                Err(e) => {
                    tracing::error!("Skipping category {}: {}", category.name, e);
                    summary.push(CategoryOutcome::Skipped {
                        name: category.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        summary
    }

    /// Crawls one category and writes its output
    ///
    /// # Returns
    ///
    /// * `Ok(CategoryReport)` - Output written (possibly with some movies missing)
    /// * `Err(CrawlError::ListingFetch)` - Listing unavailable, nothing written
    /// * `Err(CrawlError::Write)` - Movies extracted but the output failed
    pub async fn crawl_category(&self, category: &Category) -> Result<CategoryReport> {
        let listing_url = format!("{}{}", self.config.crawler.host, category.listing_path);
        tracing::info!("start crawling from {}...", listing_url);

        let selector =
            Selector::parse(&category.link_selector).map_err(|e| CrawlError::InvalidSelector {
                selector: category.link_selector.clone(),
                message: e.to_string(),
            })?;

        let body = fetch_document(&self.client, &listing_url)
            .await
            .map_err(|source| CrawlError::ListingFetch {
                url: listing_url.clone(),
                source,
            })?;

        let links = {
            let document = Html::parse_document(&body);
            discover_links(&document, &selector, &self.config.crawler.host)
        };
        let links_found = links.len();
        tracing::info!("Found {} detail links for {}", links_found, category.name);

        let mut movies = Vec::with_capacity(links_found);
        let mut detail_failures = 0;

        for page in self.scheduler.fetch_all(links).await {
            match page.result {
                Ok(body) => {
                    let movie = extract_movie_from_html(&body, &page.url, &self.rules);
                    tracing::debug!("Extracted '{}' from {}", movie.title, page.url);
                    movies.push(movie);
                }
                Err(source) => {
                    detail_failures += 1;
                    let e = CrawlError::DetailFetch {
                        url: page.url,
                        source,
                    };
                    tracing::error!("{}", e);
                }
            }
        }

        let path = self
            .sink
            .write_movies(&category.output, &movies)
            .map_err(|source| CrawlError::Write {
                output: category.output.clone(),
                source,
            })?;
        tracing::info!("saved to {}", path.display());

        Ok(CategoryReport {
            name: category.name.clone(),
            output: path,
            links_found,
            records_written: movies.len(),
            detail_failures,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Runs the full crawl with the JSON file sink
///
/// # Example
///
/// ```no_run
/// use movie_crawler::config::Config;
/// use movie_crawler::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = run_crawl(Config::default()).await?;
/// println!("{} categories written", summary.written_count());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<RunSummary> {
    let coordinator = Coordinator::new(config)?;
    Ok(coordinator.run().await)
}
