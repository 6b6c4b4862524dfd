//! Date display configuration.

use serde::{Deserialize, Serialize};

fn default_date_format() -> String {
    String::from("MM/DD/YYYY")
}

fn default_report_date_format() -> String {
    String::from("MM-DD-YYYY")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Format used when echoing dates back into entry fields.
    /// Unknown names fall back to `MM/DD/YYYY`.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Format used in listings and reports.
    /// Unknown names fall back to `MM-DD-YYYY`.
    #[serde(default = "default_report_date_format")]
    pub report_date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            report_date_format: default_report_date_format(),
        }
    }
}
