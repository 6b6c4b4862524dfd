//! # trek-engine
//!
//! Interval validation and analytics for Trek.
//!
//! Every function here is a pure function of its arguments: the record
//! collection is borrowed, never mutated, and "today" is always passed in.
//! Callers apply the decisions the engine returns.
//!
//! - [`date`]: parse dates typed in several formats, render them back
//! - [`interval`]: closed date intervals, clipping, weekend counting
//! - [`overlap`]: find stored trips that share a day with a candidate
//! - [`validate`]: turn a typed draft into a record, errors, or a question
//! - [`analytics`]: per-year and all-time travel statistics
//! - [`records`]: status classification, filtering, and sorting for listings

pub mod analytics;
pub mod date;
pub mod interval;
pub mod overlap;
pub mod records;
pub mod validate;

pub use analytics::{compute_overall, compute_year_window};
pub use date::{DateParseError, DisplayContext, DisplayFormat, InputFormat, format_date, parse_date};
pub use interval::DateInterval;
pub use overlap::{Conflict, find_conflicts};
pub use records::{IndexedRecord, filter_by_status, sort_records, trip_status};
pub use validate::{
    OverlapDecision, OverlapResolution, Outcome, PendingOverlap, PendingWarnings, RecordChange,
    WarningDecision, describe_days, validate,
};
