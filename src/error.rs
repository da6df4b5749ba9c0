// Validation errors raised at the input boundary (durations, timestamps, statuses).
// Empty histories are not errors; they produce empty results.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// Window duration must be strictly positive.
    #[error("window duration must be > 0 minutes, got {0}")]
    NonPositiveDuration(i64),

    #[error("window duration of {0} minutes is out of range")]
    DurationOutOfRange(i64),

    /// Retention window must cover at least one day.
    #[error("retention must be > 0 days, got {0}")]
    NonPositiveRetention(u32),

    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("unknown status {0:?} (expected \"up\" or \"down\")")]
    UnknownStatus(String),

    #[error("unknown chart range {0:?}")]
    UnknownRange(String),

    /// Monitor id cannot be used as a single directory name.
    #[error("monitor id {0:?} is not a plain directory name")]
    InvalidMonitorId(String),
}
