// Chart points derived from observations; recomputed on every render, never stored

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::Status;

pub const UP_VALUE: u8 = 100;
pub const DOWN_VALUE: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlottedPoint {
    /// Epoch milliseconds.
    pub x: i64,
    /// 100 when up, 0 otherwise.
    pub y: u8,
    pub status: Status,
    pub timestamp: DateTime<Utc>,
    /// Invented by the builder (boundary fill, step edge, right edge).
    pub synthetic: bool,
}

impl PlottedPoint {
    /// Point for a recorded sample.
    pub fn observed(timestamp: DateTime<Utc>, status: Status) -> Self {
        Self {
            x: timestamp.timestamp_millis(),
            y: status_value(status),
            status,
            timestamp,
            synthetic: false,
        }
    }

    /// Point the builder adds at `timestamp` carrying `status`.
    pub fn synthetic(timestamp: DateTime<Utc>, status: Status) -> Self {
        Self {
            synthetic: true,
            ..Self::observed(timestamp, status)
        }
    }

    /// Synthetic copy of this point moved to epoch millis `x`.
    pub(crate) fn shifted_to(&self, x: i64) -> Self {
        let timestamp = Utc
            .timestamp_millis_opt(x)
            .single()
            .unwrap_or(self.timestamp);
        Self {
            x,
            y: self.y,
            status: self.status,
            timestamp,
            synthetic: true,
        }
    }
}

fn status_value(status: Status) -> u8 {
    let raw = if status.is_up() { UP_VALUE } else { DOWN_VALUE };
    raw.clamp(DOWN_VALUE, UP_VALUE)
}
