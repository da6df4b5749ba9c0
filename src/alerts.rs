// Status transitions between polls of the monitor list.
// Library-only surface for a caller that polls repeatedly; the one-shot binary sees a single
// poll and never calls it. Only detection lives here; delivering the alert is the caller's job.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{info, warn};

use crate::models::{MonitorRecord, Status};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub monitor_id: String,
    pub monitor_name: String,
    pub from: Status,
    pub to: Status,
}

impl StatusChange {
    pub fn went_down(&self) -> bool {
        self.to == Status::Down
    }
}

/// Last seen status per monitor id.
#[derive(Debug, Default)]
pub struct StatusTracker {
    last_seen: HashMap<String, Status>,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current status of every monitor and returns the ones that changed
    /// since the previous call. A monitor seen for the first time never reports a change.
    pub fn observe(&mut self, monitors: &[MonitorRecord]) -> Vec<StatusChange> {
        let mut changes = Vec::new();
        for m in monitors {
            let previous = self.last_seen.insert(m.id.clone(), m.status);
            let Some(from) = previous else {
                continue;
            };
            if from == m.status {
                continue;
            }
            let change = StatusChange {
                monitor_id: m.id.clone(),
                monitor_name: m.name.clone(),
                from,
                to: m.status,
            };
            if change.went_down() {
                warn!(monitor = %m.name, url = %m.url, "monitor is down");
            } else {
                info!(monitor = %m.name, url = %m.url, "monitor is back up");
            }
            changes.push(change);
        }
        changes
    }

    /// Forget monitors that are no longer in the list (e.g. deleted).
    pub fn retain_known(&mut self, monitors: &[MonitorRecord]) {
        self.last_seen
            .retain(|id, _| monitors.iter().any(|m| &m.id == id));
    }

    pub fn last_status(&self, monitor_id: &str) -> Option<Status> {
        self.last_seen.get(monitor_id).copied()
    }
}
