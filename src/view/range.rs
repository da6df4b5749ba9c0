// Selectable chart ranges for the detailed view

use std::fmt;
use std::str::FromStr;

use crate::error::SeriesError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartRange {
    #[default]
    Last20Minutes,
    LastHour,
    Last3Hours,
    Last24Hours,
    Last48Hours,
    Last72Hours,
}

impl ChartRange {
    pub const ALL: [ChartRange; 6] = [
        ChartRange::Last20Minutes,
        ChartRange::LastHour,
        ChartRange::Last3Hours,
        ChartRange::Last24Hours,
        ChartRange::Last48Hours,
        ChartRange::Last72Hours,
    ];

    pub const fn minutes(self) -> i64 {
        match self {
            ChartRange::Last20Minutes => 20,
            ChartRange::LastHour => 60,
            ChartRange::Last3Hours => 3 * 60,
            ChartRange::Last24Hours => 24 * 60,
            ChartRange::Last48Hours => 48 * 60,
            ChartRange::Last72Hours => 72 * 60,
        }
    }

    /// Short label used in config and selectors ("20m", "1h", ...).
    pub const fn label(self) -> &'static str {
        match self {
            ChartRange::Last20Minutes => "20m",
            ChartRange::LastHour => "1h",
            ChartRange::Last3Hours => "3h",
            ChartRange::Last24Hours => "24h",
            ChartRange::Last48Hours => "48h",
            ChartRange::Last72Hours => "72h",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            ChartRange::Last20Minutes => "Last 20 Minutes",
            ChartRange::LastHour => "Last 1 Hour",
            ChartRange::Last3Hours => "Last 3 Hours",
            ChartRange::Last24Hours => "Last 24 Hours",
            ChartRange::Last48Hours => "Last 48 Hours",
            ChartRange::Last72Hours => "Last 72 Hours",
        }
    }
}

impl FromStr for ChartRange {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartRange::ALL
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| SeriesError::UnknownRange(s.to_string()))
    }
}

impl fmt::Display for ChartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
