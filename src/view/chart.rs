// Chart views over a monitor's step series.
// The sparkline uses a fixed trailing window; the detailed view takes a selectable range.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

use super::ChartRange;
use crate::error::SeriesError;
use crate::models::{MonitorRecord, PlottedPoint, Status};
use crate::series;
use crate::window::Window;

/// Window of the compact dashboard sparkline.
pub const SPARKLINE_MINUTES: i64 = 20;

/// Line colour hint: `Down` when the monitor's latest received sample is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTone {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    /// Caller-supplied chart identifier.
    pub key: String,
    pub window: Window,
    pub points: Vec<PlottedPoint>,
    pub tone: LineTone,
    /// Indices into `points` that are down (highlighted markers in the detailed view).
    pub down_markers: Vec<usize>,
}

/// What the presentation layer renders. `NoData` is a placeholder, never an empty chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChartView {
    NoData,
    Series(ChartSeries),
}

impl ChartView {
    pub fn is_no_data(&self) -> bool {
        matches!(self, ChartView::NoData)
    }

    pub fn series(&self) -> Option<&ChartSeries> {
        match self {
            ChartView::Series(s) => Some(s),
            ChartView::NoData => None,
        }
    }
}

/// Compact view over the last `minutes` (normally [`SPARKLINE_MINUTES`]).
#[instrument(skip(monitor), fields(monitor = %monitor.id))]
pub fn sparkline(
    monitor: &MonitorRecord,
    minutes: i64,
    key: &str,
    now: DateTime<Utc>,
) -> Result<ChartView, SeriesError> {
    let window = Window::resolve(minutes, now)?;
    Ok(render(monitor, window, key))
}

/// Interactive view over a selectable range.
#[instrument(skip(monitor), fields(monitor = %monitor.id, range = %range))]
pub fn detailed(
    monitor: &MonitorRecord,
    range: ChartRange,
    key: &str,
    now: DateTime<Utc>,
) -> Result<ChartView, SeriesError> {
    let window = Window::resolve(range.minutes(), now)?;
    Ok(render(monitor, window, key))
}

fn render(monitor: &MonitorRecord, window: Window, key: &str) -> ChartView {
    let points = series::build(&monitor.history, &window);
    if points.is_empty() {
        return ChartView::NoData;
    }
    let down_markers = points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.status == Status::Down)
        .map(|(i, _)| i)
        .collect();
    let tone = if monitor.last_received_is_down() {
        LineTone::Down
    } else {
        LineTone::Up
    };
    ChartView::Series(ChartSeries {
        key: key.to_string(),
        window,
        points,
        tone,
        down_markers,
    })
}
