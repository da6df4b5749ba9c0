// Presentation adapter: maps step series and event slices to renderable views

mod chart;
mod range;

pub use chart::{ChartSeries, ChartView, LineTone, SPARKLINE_MINUTES, detailed, sparkline};
pub use range::ChartRange;
