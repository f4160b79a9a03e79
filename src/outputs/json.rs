//! JSON rendering of extraction reports.
//!
//! A report serializes as the record's fields, plus an `error` key when the
//! extraction failed:
//!
//! ```json
//! {
//!   "url": "https://medium.com/p/x",
//!   "title": null,
//!   ...
//!   "error": "failed to get the data with error response code: 404"
//! }
//! ```

use crate::outputs::Report;

/// Pretty-print a single report.
pub fn report_to_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Pretty-print several reports as one JSON array.
pub fn reports_to_json(reports: &[Report]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}
