// Step series construction from raw status history

mod builder;
pub mod order;

pub use builder::build;
