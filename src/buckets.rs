//! Hour buckets covering the 24 hours before a reference time.
//!
//! All arithmetic is done in UTC with fixed one-hour steps, so a window always
//! has exactly [`HOURS`] buckets no matter which calendar days it spans.

use chrono::{DateTime, TimeDelta, Utc};

/// Number of buckets in a window.
pub const HOURS: usize = 24;

const SECONDS_PER_HOUR: i64 = 3600;

/// Half-open interval `[start, end)` of one hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourBucket {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// The 24 hour window ending at the top of the hour of some reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourlyWindow {
    end: DateTime<Utc>,
}

impl HourlyWindow {
    pub fn ending_at(reference: DateTime<Utc>) -> Self {
        Self {
            end: top_of_hour(reference),
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.end - window_length()
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Start of every bucket, oldest first.
    pub fn boundaries(&self) -> Vec<DateTime<Utc>> {
        compute_buckets(self.end)
    }

    pub fn buckets(&self) -> Vec<HourBucket> {
        self.boundaries()
            .into_iter()
            .map(|start| HourBucket {
                start,
                end: start + TimeDelta::hours(1),
            })
            .collect()
    }
}

/// Boundary `i` is `reference - 24h + i * 1h`, for `i` in `0..HOURS`.
pub fn compute_buckets(reference: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    let start = reference - window_length();
    (0..HOURS as i64)
        .map(|i| start + TimeDelta::hours(i))
        .collect()
}

/// Drops minutes, seconds and sub-second precision.
pub fn top_of_hour(instant: DateTime<Utc>) -> DateTime<Utc> {
    let seconds = instant.timestamp();
    DateTime::from_timestamp(seconds - seconds.rem_euclid(SECONDS_PER_HOUR), 0).unwrap_or(instant)
}

fn window_length() -> TimeDelta {
    TimeDelta::hours(HOURS as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn assert_hourly(boundaries: &[DateTime<Utc>]) {
        assert_eq!(boundaries.len(), HOURS);
        for pair in boundaries.windows(2) {
            assert_eq!(pair[1] - pair[0], TimeDelta::hours(1));
        }
    }

    #[test]
    fn boundaries_are_hourly_and_end_before_reference() {
        let reference = utc(2019, 2, 15, 0, 0, 0);
        let boundaries = compute_buckets(reference);

        assert_hourly(&boundaries);
        assert_eq!(boundaries[0], utc(2019, 2, 14, 0, 0, 0));
        assert_eq!(boundaries[HOURS - 1], utc(2019, 2, 14, 23, 0, 0));
    }

    #[test]
    fn boundaries_cross_month_and_year_rollover() {
        for reference in [
            utc(2021, 1, 1, 3, 0, 0),
            utc(2024, 3, 1, 0, 0, 0),
            utc(2024, 3, 31, 2, 0, 0),
            utc(2024, 10, 27, 1, 0, 0),
        ] {
            let boundaries = compute_buckets(reference);
            assert_hourly(&boundaries);
            assert_eq!(boundaries[0], reference - TimeDelta::days(1));
        }
    }

    #[test]
    fn truncates_to_top_of_hour() {
        let instant = utc(2019, 2, 14, 23, 24, 47) + TimeDelta::milliseconds(524);
        assert_eq!(top_of_hour(instant), utc(2019, 2, 14, 23, 0, 0));

        let exact = utc(2019, 2, 14, 23, 0, 0);
        assert_eq!(top_of_hour(exact), exact);
    }

    #[test]
    fn truncates_before_the_epoch() {
        let instant = utc(1969, 12, 31, 22, 30, 0);
        assert_eq!(top_of_hour(instant), utc(1969, 12, 31, 22, 0, 0));
    }

    #[test]
    fn window_buckets_tile_the_window() {
        let window = HourlyWindow::ending_at(utc(2019, 2, 15, 10, 42, 13));
        let buckets = window.buckets();

        assert_eq!(window.end(), utc(2019, 2, 15, 10, 0, 0));
        assert_eq!(buckets.len(), HOURS);
        assert_eq!(buckets[0].start, window.start());
        assert_eq!(buckets[HOURS - 1].end, window.end());
        for pair in buckets.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }
}
