//! Validation settings consumed read-only by the validation pipeline.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default look-ahead before a trip date is flagged as far in the future.
const fn default_future_warning_days() -> i64 {
    730
}

/// Default look-back before a start date is flagged as far in the past.
const fn default_past_warning_days() -> i64 {
    1095
}

const fn default_max_location_length() -> usize {
    100
}

const fn default_max_comment_length() -> usize {
    1000
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ValidationSettings {
    /// When set, overlapping trips are never reported.
    #[serde(default)]
    pub allow_overlaps: bool,

    /// Warn when a trip starts more than `future_warning_days` from today.
    #[serde(default = "default_true")]
    pub warn_future_dates: bool,

    #[serde(default = "default_future_warning_days")]
    pub future_warning_days: i64,

    /// Warn when a trip started more than `past_warning_days` ago.
    #[serde(default = "default_true")]
    pub warn_past_dates: bool,

    #[serde(default = "default_past_warning_days")]
    pub past_warning_days: i64,

    /// Maximum location length, in characters, after trimming.
    #[serde(default = "default_max_location_length")]
    pub max_location_length: usize,

    /// Maximum notes length, in characters, after trimming.
    #[serde(default = "default_max_comment_length")]
    pub max_comment_length: usize,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            allow_overlaps: false,
            warn_future_dates: default_true(),
            future_warning_days: default_future_warning_days(),
            warn_past_dates: default_true(),
            past_warning_days: default_past_warning_days(),
            max_location_length: default_max_location_length(),
            max_comment_length: default_max_comment_length(),
        }
    }
}
