use async_trait::async_trait;
use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::buckets::HourBucket;
use crate::models::{ClickEvent, EventCount};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] MigrateError),
}

/// Where the clicks live.
#[async_trait]
pub trait ClickStore: Send + Sync {
    /// Every page that has at least one click, sorted by name.
    async fn pages(&self) -> Result<Vec<String>, StorageError>;

    /// Clicks per event on `page` with `bucket.start <= time < bucket.end`.
    async fn event_counts(
        &self,
        page: &str,
        bucket: HourBucket,
    ) -> Result<Vec<EventCount>, StorageError>;

    /// Returns the number of rows written.
    async fn insert_events(&self, events: &[ClickEvent]) -> Result<u64, StorageError>;
}
