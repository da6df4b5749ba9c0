// Recent-events feed: retained history, newest first, collapsed to one page unless expanded

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::within_retention;
use crate::error::SeriesError;
use crate::models::Observation;
use crate::series::order::sorted_newest_first;

/// Rows shown while the table is collapsed.
pub const COLLAPSED_PAGE_SIZE: usize = 5;

/// Retained observations sorted newest first; the first page only unless `expanded`.
pub fn select(
    history: &[Observation],
    retention_days: u32,
    expanded: bool,
    now: DateTime<Utc>,
) -> Result<Vec<Observation>, SeriesError> {
    Ok(select_page(history, retention_days, expanded, COLLAPSED_PAGE_SIZE, now)?.visible)
}

/// Feed page with the total retained count, for a "show all (N)" toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsPage {
    pub visible: Vec<Observation>,
    pub total: usize,
    pub expanded: bool,
}

impl EventsPage {
    /// More rows exist than a collapsed page shows.
    pub fn can_expand(&self, page_size: usize) -> bool {
        self.total > page_size
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Like [`select`] with a configurable collapsed page size.
pub fn select_page(
    history: &[Observation],
    retention_days: u32,
    expanded: bool,
    page_size: usize,
    now: DateTime<Utc>,
) -> Result<EventsPage, SeriesError> {
    let mut visible = sorted_newest_first(&within_retention(history, retention_days, now)?);
    let total = visible.len();
    if !expanded {
        visible.truncate(page_size);
    }
    Ok(EventsPage {
        visible,
        total,
        expanded,
    })
}
