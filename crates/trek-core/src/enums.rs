//! Travel type, trip status, and sort column enums for Trek.
//!
//! `TripStatus` and `SortColumn` use `snake_case` serialization. `TravelType`
//! keeps its variant names verbatim (`"Personal"`, `"Work"`) because that is
//! how stored records spell it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TravelType
// ---------------------------------------------------------------------------

/// Why a trip was taken.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum TravelType {
    #[default]
    Personal,
    Work,
}

impl TravelType {
    pub const ALL: [Self; 2] = [Self::Personal, Self::Work];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Work => "Work",
        }
    }

    /// Match a typed value against the known travel types, ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for TravelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TripStatus
// ---------------------------------------------------------------------------

/// Where a trip sits relative to the reference date.
///
/// ```text
/// past:    end < today
/// current: start <= today <= end
/// future:  start > today
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Past,
    Current,
    Future,
}

impl TripStatus {
    pub const ALL: [Self; 3] = [Self::Past, Self::Current, Self::Future];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Past => "past",
            Self::Current => "current",
            Self::Future => "future",
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortColumn
// ---------------------------------------------------------------------------

/// Column a record listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Start,
    End,
    Location,
}

impl SortColumn {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Location => "location",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
