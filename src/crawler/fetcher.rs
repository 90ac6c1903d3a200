//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client
//! - GET requests returning the page body
//! - Error classification (transport failure vs. non-success status)
//!
//! There is no retry and no timeout; a fetch either yields a body or a
//! [`FetchError`] the caller logs.

use crate::config::CrawlerConfig;
use reqwest::Client;
use thiserror::Error;

/// Reasons a document could not be retrieved
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("fetch task aborted: {0}")]
    Task(String),
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use movie_crawler::config::CrawlerConfig;
/// use movie_crawler::crawler::build_http_client;
///
/// let client = build_http_client(&CrawlerConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().gzip(true).brotli(true);

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }

    builder.build()
}

/// Fetches a URL and returns its body as text
///
/// Redirects are followed by the client. Any status outside 2xx is a failure,
/// so an error page never becomes an empty movie or an empty category.
pub async fn fetch_document(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    Ok(response.text().await?)
}
