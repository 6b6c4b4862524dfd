//! Entity structs for Trek domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod draft;
mod record;

pub use draft::TripDraft;
pub use record::{ISO_DATE_FORMAT, TravelRecord};
