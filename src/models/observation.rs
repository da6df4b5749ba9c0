// Status samples as recorded by the external monitor history

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SeriesError;

/// Monitor status; serializes to lowercase JSON ("up" / "down").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Up,
    Down,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Up => "up",
            Status::Down => "down",
        }
    }

    pub fn is_up(self) -> bool {
        self == Status::Up
    }
}

impl FromStr for Status {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Status::Up),
            "down" => Ok(Status::Down),
            other => Err(SeriesError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire shape of one history entry before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawObservation {
    pub timestamp: String,
    pub status: String,
}

/// One validated (timestamp, status) sample. Never mutated after parsing.
///
/// Keeps the timestamp text it was parsed from, so exports and re-serialization
/// write back exactly what the collaborator sent (offset and sub-millisecond digits).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawObservation", into = "RawObservation")]
pub struct Observation {
    pub timestamp: DateTime<Utc>,
    pub status: Status,
    source: String,
}

impl Observation {
    /// Sample recorded locally; its text form is ISO-8601 UTC with milliseconds.
    pub fn new(timestamp: DateTime<Utc>, status: Status) -> Self {
        Self {
            timestamp,
            status,
            source: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Parse an RFC 3339 timestamp and a status string; rejects anything else.
    pub fn parse(timestamp: &str, status: &str) -> Result<Self, SeriesError> {
        Self::parse_owned(timestamp.to_string(), status)
    }

    fn parse_owned(timestamp: String, status: &str) -> Result<Self, SeriesError> {
        let ts = match DateTime::parse_from_rfc3339(&timestamp) {
            Ok(ts) => ts,
            Err(e) => {
                return Err(SeriesError::InvalidTimestamp {
                    reason: e.to_string(),
                    value: timestamp,
                });
            }
        };
        Ok(Self {
            timestamp: ts.with_timezone(&Utc),
            status: status.parse()?,
            source: timestamp,
        })
    }

    /// Timestamp exactly as received.
    pub fn timestamp_text(&self) -> &str {
        &self.source
    }

    /// ISO-8601 in UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl TryFrom<RawObservation> for Observation {
    type Error = SeriesError;

    fn try_from(raw: RawObservation) -> Result<Self, Self::Error> {
        Observation::parse_owned(raw.timestamp, &raw.status)
    }
}

impl From<Observation> for RawObservation {
    fn from(o: Observation) -> Self {
        RawObservation {
            timestamp: o.source,
            status: o.status.as_str().to_string(),
        }
    }
}
