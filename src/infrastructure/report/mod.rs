//! Finding report readers

mod json_report;

pub use json_report::{FindingReport, JsonReportSource};
