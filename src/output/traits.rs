//! Output sink trait and error types
//!
//! The coordinator hands every finished category to a [`MovieSink`]; it never
//! touches the file system itself.

use crate::movie::Movie;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize movies: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for output sinks
///
/// Implementations receive one category at a time, in crawl order.
pub trait MovieSink {
    /// Stores one category's movies under the given output name
    ///
    /// # Arguments
    ///
    /// * `output` - The category's output name, e.g. `coming.json`
    /// * `movies` - The category's movies in discovery order
    ///
    /// # Returns
    ///
    /// Where the movies were stored, for the confirmation message
    fn write_movies(&self, output: &str, movies: &[Movie]) -> OutputResult<PathBuf>;
}
