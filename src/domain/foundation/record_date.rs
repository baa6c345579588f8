//! Raw date values as stored on upstream records.
//!
//! Contract and session rows arrive from the data store with their dates as
//! text. They are kept verbatim and parsed on use; a value that cannot be
//! parsed simply falls outside every reporting window.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::DateWindow;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

/// A date or timestamp string exactly as recorded upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordDate(String);

impl RecordDate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the value as a wall-clock instant.
    ///
    /// Accepts RFC 3339, PostgreSQL text timestamps with or without an
    /// offset, and bare `YYYY-MM-DD` dates (read as midnight). Offsets are
    /// dropped: the local time as recorded is what places a record in a
    /// month.
    pub fn parse(&self) -> Option<NaiveDateTime> {
        let raw = self.0.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_local());
        }
        for format in OFFSET_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(raw, format) {
                return Some(dt.naive_local());
            }
        }
        for format in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(dt);
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN))
    }

    /// Like [`RecordDate::parse`], but logs values that fail to parse.
    pub fn parse_logged(&self, field: &'static str) -> Option<NaiveDateTime> {
        let parsed = self.parse();
        if parsed.is_none() {
            tracing::warn!(field, value = %self.0, "Unparseable date excluded from window");
        }
        parsed
    }

    /// Whether the value parses and lies inside `window`.
    ///
    /// Unparseable values are logged and treated as outside.
    pub fn falls_within(&self, window: &DateWindow, field: &'static str) -> bool {
        self.parse_logged(field)
            .is_some_and(|instant| window.contains(instant))
    }
}

impl From<&str> for RecordDate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for RecordDate {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
