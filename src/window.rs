// Trailing time window [cutoff, now] resolved against a single captured instant.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::error::SeriesError;

pub const MS_PER_MINUTE: i64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    pub cutoff: DateTime<Utc>,
    pub now: DateTime<Utc>,
}

impl Window {
    /// `cutoff = now - duration_minutes`. Non-positive durations are rejected, not clamped.
    pub fn resolve(duration_minutes: i64, now: DateTime<Utc>) -> Result<Self, SeriesError> {
        if duration_minutes <= 0 {
            return Err(SeriesError::NonPositiveDuration(duration_minutes));
        }
        let cutoff = duration_minutes
            .checked_mul(MS_PER_MINUTE)
            .and_then(TimeDelta::try_milliseconds)
            .and_then(|span| now.checked_sub_signed(span))
            .ok_or(SeriesError::DurationOutOfRange(duration_minutes))?;
        Ok(Self { cutoff, now })
    }

    /// Samples the wall clock once and resolves against it.
    pub fn resolve_now(duration_minutes: i64) -> Result<Self, SeriesError> {
        Self::resolve(duration_minutes, Utc::now())
    }

    pub fn cutoff_ms(&self) -> i64 {
        self.cutoff.timestamp_millis()
    }

    pub fn now_ms(&self) -> i64 {
        self.now.timestamp_millis()
    }

    /// Inclusive on both ends.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.cutoff <= instant && instant <= self.now
    }
}
