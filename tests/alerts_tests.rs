// Status transition tracking between polls

mod common;

use common::*;
use uptime_status::alerts::StatusTracker;
use uptime_status::models::Status;

#[test]
fn first_sighting_reports_nothing() {
    let mut tracker = StatusTracker::new();
    let changes = tracker.observe(&[monitor("a", Status::Down, vec![])]);
    assert!(changes.is_empty());
    assert_eq!(tracker.last_status("a"), Some(Status::Down));
}

#[test]
fn up_to_down_and_back_are_reported() {
    let mut tracker = StatusTracker::new();
    tracker.observe(&[monitor("a", Status::Up, vec![])]);

    let down = tracker.observe(&[monitor("a", Status::Down, vec![])]);
    assert_eq!(down.len(), 1);
    assert_eq!(down[0].monitor_id, "a");
    assert_eq!(down[0].monitor_name, "a service");
    assert_eq!((down[0].from, down[0].to), (Status::Up, Status::Down));
    assert!(down[0].went_down());

    let up = tracker.observe(&[monitor("a", Status::Up, vec![])]);
    assert_eq!(up.len(), 1);
    assert!(!up[0].went_down());
}

#[test]
fn unchanged_status_reports_nothing() {
    let mut tracker = StatusTracker::new();
    let list = [monitor("a", Status::Up, vec![]), monitor("b", Status::Down, vec![])];
    tracker.observe(&list);
    assert!(tracker.observe(&list).is_empty());
}

#[test]
fn only_changed_monitors_are_reported() {
    let mut tracker = StatusTracker::new();
    tracker.observe(&[monitor("a", Status::Up, vec![]), monitor("b", Status::Up, vec![])]);
    let changes =
        tracker.observe(&[monitor("a", Status::Up, vec![]), monitor("b", Status::Down, vec![])]);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].monitor_id, "b");
}

#[test]
fn retain_known_forgets_removed_monitors() {
    let mut tracker = StatusTracker::new();
    tracker.observe(&[monitor("a", Status::Up, vec![]), monitor("b", Status::Up, vec![])]);
    tracker.retain_known(&[monitor("a", Status::Up, vec![])]);
    assert_eq!(tracker.last_status("b"), None);

    // Coming back counts as a first sighting again.
    assert!(tracker.observe(&[monitor("b", Status::Down, vec![])]).is_empty());
}
