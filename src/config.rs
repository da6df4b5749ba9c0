use serde::Deserialize;

use crate::export::{COLLAPSED_PAGE_SIZE, DEFAULT_RETENTION_DAYS};
use crate::view::{ChartRange, SPARKLINE_MINUTES};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub charts: ChartsConfig,
    #[serde(default)]
    pub export: ExportConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartsConfig {
    #[serde(default = "default_sparkline_minutes")]
    pub sparkline_minutes: i64,
    /// Range the detailed view opens with; must be one of `ranges`.
    #[serde(default = "default_range")]
    pub default_range: String,
    /// Ranges offered by the detailed view selector ("20m", "1h", "3h", "24h", "48h", "72h").
    #[serde(default = "default_ranges")]
    pub ranges: Vec<String>,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            sparkline_minutes: default_sparkline_minutes(),
            default_range: default_range(),
            ranges: default_ranges(),
        }
    }
}

fn default_sparkline_minutes() -> i64 {
    SPARKLINE_MINUTES
}

fn default_range() -> String {
    ChartRange::default().label().into()
}

fn default_ranges() -> Vec<String> {
    vec!["20m".into(), "1h".into(), "3h".into()]
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
    /// Rows in the collapsed events table.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            retention_days: default_retention_days(),
            page_size: default_page_size(),
        }
    }
}

fn default_retention_days() -> u32 {
    DEFAULT_RETENTION_DAYS
}

fn default_page_size() -> usize {
    COLLAPSED_PAGE_SIZE
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// JSON file with the monitor list (id, name, url, status, history).
    pub monitors_path: String,
    /// Directory that receives one sub-directory of exports per monitor.
    pub output_dir: String,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parsed `charts.ranges`, in configured order.
    pub fn chart_ranges(&self) -> anyhow::Result<Vec<ChartRange>> {
        self.charts
            .ranges
            .iter()
            .map(|r| r.parse::<ChartRange>().map_err(anyhow::Error::from))
            .collect()
    }

    pub fn default_chart_range(&self) -> anyhow::Result<ChartRange> {
        Ok(self.charts.default_range.parse()?)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.charts.sparkline_minutes > 0,
            "charts.sparkline_minutes must be > 0, got {}",
            self.charts.sparkline_minutes
        );
        anyhow::ensure!(
            !self.charts.ranges.is_empty(),
            "charts.ranges must be non-empty"
        );
        let ranges = self
            .chart_ranges()
            .map_err(|e| anyhow::anyhow!("charts.ranges: {}", e))?;
        let default_range = self
            .default_chart_range()
            .map_err(|e| anyhow::anyhow!("charts.default_range: {}", e))?;
        anyhow::ensure!(
            ranges.contains(&default_range),
            "charts.default_range {} must be one of charts.ranges",
            default_range
        );
        anyhow::ensure!(
            self.export.retention_days > 0,
            "export.retention_days must be > 0, got {}",
            self.export.retention_days
        );
        anyhow::ensure!(
            self.export.page_size > 0,
            "export.page_size must be > 0, got {}",
            self.export.page_size
        );
        anyhow::ensure!(
            !self.input.monitors_path.is_empty(),
            "input.monitors_path must be non-empty"
        );
        anyhow::ensure!(
            !self.input.output_dir.is_empty(),
            "input.output_dir must be non-empty"
        );
        Ok(())
    }
}
