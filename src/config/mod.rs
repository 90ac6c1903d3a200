//! Configuration module for Movie-Crawler
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Without a file the built-in defaults describe the stock five-category crawl.
//!
//! # Example
//!
//! ```no_run
//! use movie_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Crawling {} categories", config.categories.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    default_categories, Category, Config, CrawlerConfig, LabelConfig, OutputConfig,
    SelectorConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
