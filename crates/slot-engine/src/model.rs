//! Block and working-hours data model shared by the calendar and slot modules.
//!
//! Wire shapes match the upstream booking-management REST API: camelCase
//! field names, dates as `"YYYY-MM-DD"`, times as zero-padded 24h `"HH:MM"`
//! strings. Parsing happens once at this boundary; the evaluators compute
//! over typed values and never re-validate.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Parse a zero-padded 24h `"HH:MM"` string into a [`NaiveTime`].
///
/// This is the single entry point for time-of-day parsing; the serde adapter
/// and the CLI both go through it.
pub fn parse_hhmm(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| SlotError::InvalidTime(s.to_string()))
}

/// Parse a `"YYYY-MM-DD"` string into a [`NaiveDate`].
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| SlotError::InvalidDate(s.to_string()))
}

/// Serde adapter for `"HH:MM"` time fields.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_hhmm(&s).map_err(serde::de::Error::custom)
    }
}

/// The daily service window, identical for every day of the week.
///
/// Invariant (enforced upstream): `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    #[serde(rename = "startTime", with = "hhmm")]
    pub start: NaiveTime,
    #[serde(rename = "endTime", with = "hhmm")]
    pub end: NaiveTime,
}

impl Default for WorkingHours {
    /// The fallback window used when hours cannot be fetched: 08:00–18:00.
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(8, 0, 0).expect("08:00 is a valid time"),
            end: NaiveTime::from_hms_opt(18, 0, 0).expect("18:00 is a valid time"),
        }
    }
}

/// A sub-day time range during which bookings are disallowed.
///
/// Invariant (enforced upstream): `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedSlot {
    pub id: i64,
    #[serde(rename = "startTime", with = "hhmm")]
    pub start: NaiveTime,
    #[serde(rename = "endTime", with = "hhmm")]
    pub end: NaiveTime,
}

impl BlockedSlot {
    /// Whether `time` falls inside this blocked range.
    ///
    /// Boundary convention is half-open `[start, end)`: a slot starting
    /// exactly when a blocked range ends is bookable again.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

/// Blocking state for exactly one calendar date.
///
/// When `is_blocked` is set the whole date is unavailable and
/// `blocked_slots` is ignored; otherwise `blocked_slots` (possibly empty)
/// enumerates the blocked sub-ranges and everything else stays bookable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: i64,
    pub date: NaiveDate,
    pub is_blocked: bool,
    /// Absent on the wire for whole-day blocks.
    #[serde(default)]
    pub blocked_slots: Vec<BlockedSlot>,
}

impl Block {
    /// Whether this record blocks the slot starting at `time` on its date.
    pub fn blocks_time(&self, time: NaiveTime) -> bool {
        self.is_blocked || self.blocked_slots.iter().any(|slot| slot.contains(time))
    }
}
