//! Run statistics
//!
//! Per-category outcomes collected by the coordinator and printed once the
//! run finishes.

use std::path::PathBuf;

/// What one successfully written category produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub name: String,

    /// Where the movies were written
    pub output: PathBuf,

    /// Detail links found on the listing page, duplicates included
    pub links_found: usize,

    pub records_written: usize,

    /// Detail pages that could not be fetched
    pub detail_failures: usize,
}

/// Final state of one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOutcome {
    Written(CategoryReport),
    Skipped { name: String, reason: String },
}

/// Outcomes of a whole run, in crawl order
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<CategoryOutcome>,
}

impl RunSummary {
    pub fn push(&mut self, outcome: CategoryOutcome) {
        self.outcomes.push(outcome);
    }

    /// Iterates over the categories that were written
    pub fn reports(&self) -> impl Iterator<Item = &CategoryReport> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            CategoryOutcome::Written(report) => Some(report),
            CategoryOutcome::Skipped { .. } => None,
        })
    }

    pub fn written_count(&self) -> usize {
        self.reports().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.written_count()
    }

    pub fn total_records(&self) -> usize {
        self.reports().map(|report| report.records_written).sum()
    }

    pub fn total_detail_failures(&self) -> usize {
        self.reports().map(|report| report.detail_failures).sum()
    }
}

/// Prints a run summary to stdout
pub fn print_summary(summary: &RunSummary) {
    println!("=== Movie-Crawler Run Summary ===\n");

    for outcome in &summary.outcomes {
        match outcome {
            CategoryOutcome::Written(report) => println!(
                "  {:<16} {:>4} links, {:>4} movies, {:>3} failed -> {}",
                report.name,
                report.links_found,
                report.records_written,
                report.detail_failures,
                report.output.display()
            ),
            CategoryOutcome::Skipped { name, reason } => {
                println!("  {:<16} skipped: {}", name, reason)
            }
        }
    }

    println!();
    println!(
        "Categories: {} written, {} skipped",
        summary.written_count(),
        summary.skipped_count()
    );
    println!(
        "Movies: {} written, {} detail pages failed",
        summary.total_records(),
        summary.total_detail_failures()
    );
}
