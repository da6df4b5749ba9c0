// Shared test helpers

#![allow(dead_code)]

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use uptime_status::models::*;

/// Fixed "now" so every test shares one frame.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub fn minutes_ago(now: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    now - TimeDelta::minutes(minutes)
}

pub fn obs(at: DateTime<Utc>, status: Status) -> Observation {
    Observation::new(at, status)
}

pub fn up_at(now: DateTime<Utc>, minutes: i64) -> Observation {
    obs(minutes_ago(now, minutes), Status::Up)
}

pub fn down_at(now: DateTime<Utc>, minutes: i64) -> Observation {
    obs(minutes_ago(now, minutes), Status::Down)
}

pub fn monitor(id: &str, status: Status, history: Vec<Observation>) -> MonitorRecord {
    MonitorRecord {
        id: id.into(),
        name: format!("{} service", id),
        url: format!("https://{}.example.com", id),
        status,
        history,
    }
}

pub fn ms(t: DateTime<Utc>) -> i64 {
    t.timestamp_millis()
}
