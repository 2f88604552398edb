use chrono::{DateTime, Utc};
use futures_util::future::try_join_all;
use thiserror::Error;
use tracing::debug;

use crate::buckets::HourlyWindow;
use crate::models::ClickData;
use crate::reshape::{ReshapeError, reshape};
use crate::store::{ClickStore, StorageError};

#[derive(Debug, Error)]
pub enum ClickDataError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Reshape(#[from] ReshapeError),
}

/// Hourly click counts of `page` for the 24 hours before `reference`.
///
/// One query per bucket, all in flight at once. Any failing query fails the
/// whole call, partial windows are never returned.
pub async fn hourly_click_data(
    store: &dyn ClickStore,
    page: &str,
    reference: DateTime<Utc>,
) -> Result<ClickData, ClickDataError> {
    let window = HourlyWindow::ending_at(reference);
    debug!(page, start = %window.start(), end = %window.end(), "querying hourly buckets");

    let per_bucket = try_join_all(
        window
            .buckets()
            .into_iter()
            .map(|bucket| store.event_counts(page, bucket)),
    )
    .await?;

    Ok(ClickData {
        times: window.boundaries(),
        counts: reshape(&per_bucket)?,
    })
}
