use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TravelType;

/// Canonical storage format for record dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// One trip with an inclusive date range.
///
/// Dates are kept as canonical `YYYY-MM-DD` text, exactly as stored. A record
/// loaded from a damaged file may carry text that does not parse; readers skip
/// such records instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TravelRecord {
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    #[serde(default)]
    pub travel_type: TravelType,
    #[serde(default)]
    pub comment: String,
}

impl TravelRecord {
    /// Build a record from already-validated parts.
    #[must_use]
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        location: impl Into<String>,
        travel_type: TravelType,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            start_date: start.format(ISO_DATE_FORMAT).to_string(),
            end_date: end.format(ISO_DATE_FORMAT).to_string(),
            location: location.into(),
            travel_type,
            comment: comment.into(),
        }
    }
}
