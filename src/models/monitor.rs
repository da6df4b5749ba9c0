// Monitor record as supplied by the polling collaborator

use serde::{Deserialize, Serialize};

use super::{Observation, Status};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub url: String,
    pub status: Status,
    /// Unordered; may contain duplicate timestamps.
    #[serde(default)]
    pub history: Vec<Observation>,
}

impl MonitorRecord {
    /// True when the last history entry in received (not chronological) order is down.
    pub fn last_received_is_down(&self) -> bool {
        self.history
            .last()
            .is_some_and(|o| o.status == Status::Down)
    }
}
