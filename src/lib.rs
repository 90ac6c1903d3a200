//! Movie-Crawler: a listing/detail page scraper for a movie catalog
//!
//! This crate walks a fixed set of listing pages, follows every detail link it
//! finds, extracts one [`Movie`] record per detail page and writes each
//! category's records to its own pretty-printed JSON file.

pub mod config;
pub mod crawler;
pub mod movie;
pub mod output;

use thiserror::Error;

/// Main error type for Movie-Crawler operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to fetch listing {url}: {source}")]
    ListingFetch {
        url: String,
        source: crawler::FetchError,
    },

    #[error("Failed to fetch detail page {url}: {source}")]
    DetailFetch {
        url: String,
        source: crawler::FetchError,
    },

    #[error("Failed to write {output}: {source}")]
    Write {
        output: String,
        source: output::OutputError,
    },

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector in config: {0}")]
    InvalidSelector(String),
}

/// Result type alias for Movie-Crawler operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Category, Config};
pub use crawler::{Coordinator, ExtractRules};
pub use movie::Movie;
