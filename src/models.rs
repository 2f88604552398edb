use chrono::{DateTime, Utc};
use serde::Serialize;

/// One stored click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub time: DateTime<Utc>,
    pub page: String,
    pub event: String,
}

/// Number of clicks of one event inside one bucket.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct EventCount {
    pub event: String,
    pub count: i64,
}

impl EventCount {
    pub fn new(event: impl Into<String>, count: i64) -> Self {
        Self {
            event: event.into(),
            count,
        }
    }
}

/// Clicks per hour for one event, always one entry per bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenseSeries {
    pub event: String,
    pub counts: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickData {
    pub times: Vec<DateTime<Utc>>,
    pub counts: Vec<DenseSeries>,
}
