use serde::Serialize;
use trek_core::entities::TravelRecord;
use trek_core::enums::{TravelType, TripStatus};
use trek_engine::records::{trip_status, truncate_comment};
use trek_engine::{DateInterval, DisplayContext, date::format_stored};

use crate::context::AppContext;

/// One trip as shown in listings: 1-based number, dates in the report format.
#[derive(Debug, Clone, Serialize)]
pub struct TripRow {
    #[serde(rename = "#")]
    pub number: usize,
    pub start: String,
    pub end: String,
    pub days: Option<i64>,
    pub location: String,
    #[serde(rename = "type")]
    pub travel_type: TravelType,
    pub status: Option<TripStatus>,
    pub notes: String,
}

impl TripRow {
    pub fn new(index: usize, record: &TravelRecord, ctx: &AppContext) -> Self {
        let format = ctx.config.display.report_date_format.as_str();
        Self {
            number: index + 1,
            start: format_stored(&record.start_date, format, DisplayContext::Report),
            end: format_stored(&record.end_date, format, DisplayContext::Report),
            days: DateInterval::from_record(record).map(|trip| trip.days()),
            location: record.location.clone(),
            travel_type: record.travel_type,
            status: trip_status(record, ctx.today),
            notes: truncate_comment(&record.comment),
        }
    }
}
