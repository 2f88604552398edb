#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use click_ferris::buckets::HourBucket;
use click_ferris::models::{ClickEvent, EventCount};
use click_ferris::store::{ClickStore, StorageError};

/// In-memory store that counts how often it gets queried.
#[derive(Default)]
pub struct CountingStore {
    pages: Vec<String>,
    /// Rows returned for a bucket, keyed by bucket start.
    rows: HashMap<DateTime<Utc>, Vec<EventCount>>,
    /// Rows returned for every bucket not listed in `rows`.
    every_bucket: Vec<EventCount>,
    fail: bool,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_pages(pages: &[&str]) -> Self {
        Self {
            pages: pages.iter().map(|p| (*p).to_owned()).collect(),
            ..Self::default()
        }
    }

    pub fn with_rows(rows: HashMap<DateTime<Utc>, Vec<EventCount>>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn with_every_bucket(rows: Vec<EventCount>) -> Self {
        Self {
            every_bucket: rows,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn call(&self) -> Result<(), StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(StorageError::Sql(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ClickStore for CountingStore {
    async fn pages(&self) -> Result<Vec<String>, StorageError> {
        self.call()?;
        Ok(self.pages.clone())
    }

    async fn event_counts(
        &self,
        _page: &str,
        bucket: HourBucket,
    ) -> Result<Vec<EventCount>, StorageError> {
        self.call()?;
        Ok(self
            .rows
            .get(&bucket.start)
            .cloned()
            .unwrap_or_else(|| self.every_bucket.clone()))
    }

    async fn insert_events(&self, events: &[ClickEvent]) -> Result<u64, StorageError> {
        self.call()?;
        Ok(events.len() as u64)
    }
}
