// CSV export of retained history.
// Timestamps are written as received. Fields are unescaped: RFC 3339 timestamps and
// enum statuses cannot contain a comma or newline.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::within_retention;
use crate::error::SeriesError;
use crate::models::Observation;

pub const CSV_HEADER: &str = "Timestamp,Status";

/// Header line plus one `timestamp,status` line per retained observation, in received order.
/// Lines are joined with `\n`; there is no trailing newline.
pub fn format_csv(
    history: &[Observation],
    retention_days: u32,
    now: DateTime<Utc>,
) -> Result<String, SeriesError> {
    let retained = within_retention(history, retention_days, now)?;
    let mut out = String::with_capacity(CSV_HEADER.len() + retained.len() * 32);
    out.push_str(CSV_HEADER);
    for o in &retained {
        out.push('\n');
        out.push_str(o.timestamp_text());
        out.push(',');
        out.push_str(o.status.as_str());
    }
    debug!(
        rows = retained.len(),
        dropped = history.len() - retained.len(),
        retention_days,
        "formatted csv export"
    );
    Ok(out)
}

/// Download name by convention, e.g. `uptime_events_past_6_days.csv`.
pub fn export_file_name(retention_days: u32) -> String {
    format!("uptime_events_past_{}_days.csv", retention_days)
}
