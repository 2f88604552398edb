//! Turns the sparse per-bucket query results into one dense series per event.

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use crate::buckets::HOURS;
use crate::models::{DenseSeries, EventCount};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReshapeError {
    #[error("expected {HOURS} buckets, got {0}")]
    BucketCount(usize),
    #[error("event `{event}` reported twice in bucket {bucket}")]
    DuplicateEvent { bucket: usize, event: String },
    #[error("negative count {count} for event `{event}` in bucket {bucket}")]
    NegativeCount {
        bucket: usize,
        event: String,
        count: i64,
    },
}

/// Row-set `i` holds the counts of bucket `i`. Events missing from a bucket
/// get a zero there; the result is sorted by event name.
pub fn reshape(per_bucket: &[Vec<EventCount>]) -> Result<Vec<DenseSeries>, ReshapeError> {
    if per_bucket.is_empty() {
        return Ok(Vec::new());
    }
    if per_bucket.len() != HOURS {
        return Err(ReshapeError::BucketCount(per_bucket.len()));
    }

    let mut series: BTreeMap<&str, Vec<u64>> = per_bucket
        .iter()
        .flatten()
        .map(|row| (row.event.as_str(), vec![0; HOURS]))
        .collect();

    for (bucket, rows) in per_bucket.iter().enumerate() {
        let mut seen = HashSet::with_capacity(rows.len());
        for row in rows {
            if !seen.insert(row.event.as_str()) {
                return Err(ReshapeError::DuplicateEvent {
                    bucket,
                    event: row.event.clone(),
                });
            }
            let count = u64::try_from(row.count).map_err(|_| ReshapeError::NegativeCount {
                bucket,
                event: row.event.clone(),
                count: row.count,
            })?;
            if let Some(counts) = series.get_mut(row.event.as_str()) {
                counts[bucket] = count;
            }
        }
    }

    Ok(series
        .into_iter()
        .map(|(event, counts)| DenseSeries {
            event: event.to_owned(),
            counts,
        })
        .collect())
}
