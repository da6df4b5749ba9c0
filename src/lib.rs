// Library for tests and the binary to access modules

pub mod alerts;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod report;
pub mod series;
pub mod view;
pub mod window;

pub use error::SeriesError;
pub use window::Window;
