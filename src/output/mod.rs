//! Output module for crawl results
//!
//! This module handles:
//! - The sink interface the coordinator writes categories through
//! - Pretty-printed JSON files, one per category
//! - Run statistics and the end-of-run summary

mod json;
pub mod stats;
mod traits;

pub use json::{to_pretty_json, write_owner_only, JsonFileSink};
pub use stats::{print_summary, CategoryOutcome, CategoryReport, RunSummary};
pub use traits::{MovieSink, OutputError, OutputResult};
