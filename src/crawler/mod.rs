//! Crawler module for listing and detail page processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching of listing and detail pages
//! - Detail link discovery on listing pages
//! - Field extraction from detail pages
//! - Bounded, order-preserving detail fetching
//! - Overall crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod links;
mod scheduler;

pub use coordinator::{run_crawl, Coordinator};
pub use extractor::{
    classify_metadata_line, extract_movie, extract_movie_from_html, ExtractRules, MetadataLine,
};
pub use fetcher::{build_http_client, fetch_document, FetchError};
pub use links::discover_links;
pub use scheduler::{FetchedPage, Scheduler};
