//! Week structure: days, periods, and permanently blocked slots.
//!
//! The grid is hard-coded to 5 teaching days of 13 periods each. Two
//! period categories are never bookable: the break period (every day)
//! and a prayer/assembly tail range on the final day. These must match
//! the external grid dimensions and are not data-driven.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of periods in each teaching day.
pub const PERIODS_PER_DAY: u8 = 13;
/// First bookable period (periods are 1-based).
pub const FIRST_PERIOD: u8 = 1;
/// Daily break period; never bookable.
pub const BREAK_PERIOD: u8 = 5;
/// Day carrying the blocked tail range.
pub const PRAYER_BLOCK_DAY: Day = Day::Friday;
/// First period of the blocked tail range on [`PRAYER_BLOCK_DAY`].
pub const PRAYER_BLOCK_START: u8 = 11;
/// Longest run of back-to-back periods a teacher should carry.
pub const MAX_CONSECUTIVE_PERIODS: u8 = 4;

/// A teaching day.
///
/// Enumeration order is the fixed candidate-search order, so `Ord`
/// follows weekday order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All teaching days, in search order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Human-readable day name.
    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    /// Parses a day from its label.
    pub fn from_label(label: &str) -> Option<Day> {
        Day::ALL.into_iter().find(|d| d.label() == label)
    }

    /// Zero-based index into the week.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a period is permanently blocked (break or final-day tail).
#[inline]
pub fn is_blocked(day: Day, period: u8) -> bool {
    period == BREAK_PERIOD || (day == PRAYER_BLOCK_DAY && period >= PRAYER_BLOCK_START)
}

/// Whether a span starting at `start` fits within the day.
#[inline]
pub fn span_fits(start: u8, duration: u8) -> bool {
    duration >= 1 && start >= FIRST_PERIOD && start + (duration - 1) <= PERIODS_PER_DAY
}

/// Key of one schedule slot: a day and a starting period.
///
/// Serializes as `"<Day>_Period<n>"`, the key format consumed by the
/// external rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    /// Day of the slot.
    pub day: Day,
    /// Starting period (1-based).
    pub period: u8,
}

impl SlotKey {
    /// Creates a slot key.
    pub fn new(day: Day, period: u8) -> Self {
        Self { day, period }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_Period{}", self.day, self.period)
    }
}

impl FromStr for SlotKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, period) = s
            .split_once("_Period")
            .ok_or_else(|| format!("invalid slot key: {s}"))?;
        let day = Day::from_label(day).ok_or_else(|| format!("unknown day: {day}"))?;
        let period: u8 = period
            .parse()
            .map_err(|_| format!("invalid period: {period}"))?;
        Ok(SlotKey { day, period })
    }
}

impl Serialize for SlotKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
