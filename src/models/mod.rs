// Domain models: raw observations from the monitor collaborator and derived chart points

mod monitor;
mod observation;
mod point;

pub use monitor::MonitorRecord;
pub use observation::{Observation, RawObservation, Status};
pub use point::{DOWN_VALUE, PlottedPoint, UP_VALUE};
