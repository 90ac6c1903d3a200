//! JSON file output
//!
//! Each category becomes one pretty-printed JSON array (two-space indent, no
//! trailing newline) in the output directory, readable and writable by the
//! owner only.

use crate::movie::Movie;
use crate::output::traits::{MovieSink, OutputResult};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes each category to `<directory>/<output>`
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    directory: PathBuf,
}

impl JsonFileSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Path the given output name is written to
    pub fn path_for(&self, output: &str) -> PathBuf {
        self.directory.join(output)
    }
}

impl MovieSink for JsonFileSink {
    fn write_movies(&self, output: &str, movies: &[Movie]) -> OutputResult<PathBuf> {
        let data = to_pretty_json(movies)?;

        std::fs::create_dir_all(&self.directory)?;
        let path = self.path_for(output);
        write_owner_only(&path, &data)?;

        Ok(path)
    }
}

/// Serializes movies as a pretty-printed JSON array
pub fn to_pretty_json(movies: &[Movie]) -> OutputResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(movies)?)
}

/// Creates or truncates `path` and writes `data`, mode 0600 on Unix
///
/// An existing file keeps its current permissions.
pub fn write_owner_only(path: &Path, data: &[u8]) -> OutputResult<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.flush()?;

    Ok(())
}
