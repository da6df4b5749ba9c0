use anyhow::{Context, Result};
use chrono::Utc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;
use uptime_status::models::MonitorRecord;
use uptime_status::*;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    tracing::info!(
        "{} {} starting",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let app_config = config::AppConfig::load()?;

    let raw = std::fs::read_to_string(&app_config.input.monitors_path)
        .with_context(|| format!("reading {}", app_config.input.monitors_path))?;
    let monitors: Vec<MonitorRecord> =
        serde_json::from_str(&raw).context("parsing monitor list")?;
    tracing::info!(monitors = monitors.len(), "loaded monitor list");

    // One clock sample for every view and export in this run.
    let now = Utc::now();
    let summary = report::export_all(&monitors, &app_config, now)?;

    tracing::info!(
        exported = summary.exported,
        skipped = summary.skipped.len(),
        out_dir = %app_config.input.output_dir,
        "done"
    );
    Ok(())
}
