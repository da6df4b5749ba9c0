// Tabular views over a bounded slice of history: CSV export and the recent-events feed.
// Export keeps received order (append log); the feed is newest first.

mod csv;
mod events;

pub use csv::{CSV_HEADER, export_file_name, format_csv};
pub use events::{COLLAPSED_PAGE_SIZE, EventsPage, select, select_page};

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::SeriesError;
use crate::models::Observation;

pub const DEFAULT_RETENTION_DAYS: u32 = 6;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Observations with `timestamp >= now - retention_days`, in received order.
pub(crate) fn within_retention(
    history: &[Observation],
    retention_days: u32,
    now: DateTime<Utc>,
) -> Result<Vec<Observation>, SeriesError> {
    if retention_days == 0 {
        return Err(SeriesError::NonPositiveRetention(retention_days));
    }
    // A retention reaching past the representable range keeps everything.
    let since = now.checked_sub_signed(TimeDelta::milliseconds(
        i64::from(retention_days) * MS_PER_DAY,
    ));
    Ok(history
        .iter()
        .filter(|o| since.is_none_or(|s| o.timestamp >= s))
        .cloned()
        .collect())
}
