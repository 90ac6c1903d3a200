//! Bounded fetch pool for detail pages
//!
//! This module handles:
//! - Global concurrency limiting via a semaphore
//! - Tagging every fetch with its discovery index
//! - Reassembling results in discovery order
//!
//! A failed fetch is returned alongside the successful ones; it never cancels
//! the fetches still in flight.

use crate::crawler::fetcher::{fetch_document, FetchError};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Outcome of one detail fetch
#[derive(Debug)]
pub struct FetchedPage {
    /// Position of the link on the listing page
    pub index: usize,

    /// The detail location that was fetched
    pub url: String,

    /// Page body or the reason it could not be retrieved
    pub result: Result<String, FetchError>,
}

/// Scheduler runs detail fetches with at most `max_concurrent` in flight
pub struct Scheduler {
    /// Global semaphore for limiting concurrent fetches
    semaphore: Arc<Semaphore>,

    client: Client,
}

impl Scheduler {
    /// Creates a new scheduler
    ///
    /// A limit of 1 fetches strictly one page at a time.
    pub fn new(client: Client, max_concurrent: u32) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1) as usize)),
            client,
        }
    }

    /// Fetches every URL and returns the outcomes sorted by discovery index
    ///
    /// The result has exactly one entry per URL. A task that dies before
    /// reporting back yields a [`FetchError::Task`] failure for its URL.
    pub async fn fetch_all(&self, urls: Vec<String>) -> Vec<FetchedPage> {
        let mut tasks = JoinSet::new();

        for (index, url) in urls.iter().cloned().enumerate() {
            let client = self.client.clone();
            let semaphore = Arc::clone(&self.semaphore);

            tasks.spawn(async move {
                // The pool never closes its semaphore, so acquiring only waits
                let _permit = semaphore.acquire_owned().await.ok();
                tracing::debug!("Fetching detail page {}: {}", index, url);
                let result = fetch_document(&client, &url).await;
                FetchedPage { index, url, result }
            });
        }

        let mut finished = Vec::with_capacity(tasks.len());
        let mut lost = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(page) => finished.push(page),
                Err(e) => {
                    tracing::error!("Detail fetch task failed: {}", e);
                    lost.push(e.to_string());
                }
            }
        }

        reassemble(urls, finished, lost)
    }
}

/// Orders finished fetches by index and fills every missing index with a
/// task failure, pairing them with the collected task errors in turn
fn reassemble(
    urls: Vec<String>,
    finished: Vec<FetchedPage>,
    lost: Vec<String>,
) -> Vec<FetchedPage> {
    let mut slots: Vec<Option<FetchedPage>> = urls.iter().map(|_| None).collect();
    for page in finished {
        let index = page.index;
        slots[index] = Some(page);
    }

    let mut lost = lost.into_iter();
    slots
        .into_iter()
        .zip(urls)
        .enumerate()
        .map(|(index, (slot, url))| {
            slot.unwrap_or_else(|| FetchedPage {
                index,
                url,
                result: Err(FetchError::Task(
                    lost.next().unwrap_or_else(|| "task did not report".to_string()),
                )),
            })
        })
        .collect()
}
