// Per-monitor export files under the configured output directory:
//   <output_dir>/<id>/uptime_events_past_<N>_days.csv
//   <output_dir>/<id>/series.json   (detailed chart for the default range + first events page)
// A monitor whose files cannot be written is logged and skipped; the rest still export.

use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use crate::config::AppConfig;
use crate::error::SeriesError;
use crate::export;
use crate::models::MonitorRecord;
use crate::view::{self, ChartRange};

/// Outcome of one export run.
#[derive(Debug, Default)]
pub struct ExportSummary {
    pub exported: usize,
    /// Ids of monitors that were skipped.
    pub skipped: Vec<String>,
}

/// `out_dir/<id>`. The id must be exactly one normal path component, so it can never
/// climb out of `out_dir` (`..`, `a/b`) or replace it (`/abs`).
pub fn monitor_dir(out_dir: &Path, id: &str) -> Result<PathBuf, SeriesError> {
    let mut components = Path::new(id).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => Ok(out_dir.join(name)),
        _ => Err(SeriesError::InvalidMonitorId(id.to_string())),
    }
}

/// Logs each monitor's sparkline and writes its export files. `now` is shared by every
/// monitor so all files describe the same frame.
#[instrument(skip(monitors, config), fields(monitors = monitors.len()))]
pub fn export_all(
    monitors: &[MonitorRecord],
    config: &AppConfig,
    now: DateTime<Utc>,
) -> anyhow::Result<ExportSummary> {
    let range = config.default_chart_range()?;
    let out_dir = Path::new(&config.input.output_dir);
    let mut summary = ExportSummary::default();

    for monitor in monitors {
        let key = format!("chart-{}", monitor.id);
        let spark = view::sparkline(monitor, config.charts.sparkline_minutes, &key, now)?;
        match spark.series() {
            Some(s) => info!(
                monitor = %monitor.name,
                status = %monitor.status,
                points = s.points.len(),
                tone = ?s.tone,
                "sparkline"
            ),
            None => info!(monitor = %monitor.name, "sparkline: no data"),
        }

        if let Err(e) = export_monitor(monitor, out_dir, config, range, &key, now) {
            warn!(monitor = %monitor.name, id = %monitor.id, error = %e, "export failed; skipping");
            summary.skipped.push(monitor.id.clone());
            continue;
        }
        summary.exported += 1;
    }
    Ok(summary)
}

/// Writes the CSV export and `series.json` for one monitor; returns its directory.
pub fn export_monitor(
    monitor: &MonitorRecord,
    out_dir: &Path,
    config: &AppConfig,
    range: ChartRange,
    key: &str,
    now: DateTime<Utc>,
) -> anyhow::Result<PathBuf> {
    let dir = monitor_dir(out_dir, &monitor.id)?;
    std::fs::create_dir_all(&dir)?;

    let retention_days = config.export.retention_days;
    let csv = export::format_csv(&monitor.history, retention_days, now)?;
    std::fs::write(dir.join(export::export_file_name(retention_days)), csv)?;

    let detailed = view::detailed(monitor, range, key, now)?;
    let events = export::select_page(
        &monitor.history,
        retention_days,
        false,
        config.export.page_size,
        now,
    )?;
    let doc = serde_json::json!({
        "monitor": monitor.name,
        "range": range.label(),
        "chart": detailed,
        "events": events,
    });
    std::fs::write(dir.join("series.json"), serde_json::to_string_pretty(&doc)?)?;
    Ok(dir)
}
