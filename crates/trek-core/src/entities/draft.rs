use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The fields of a trip exactly as the user typed them.
///
/// Nothing here has been trimmed, parsed, or checked. The validation pipeline
/// turns a draft into a `TravelRecord` or a list of problems.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TripDraft {
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub travel_type: String,
    #[serde(default)]
    pub comment: String,
}
