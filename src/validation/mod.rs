//! Validation utilities
//!
//! Reads generated reports back with docx-rs

mod report;

pub use report::{check_report_bytes, validate_report, ReportCheck, EXPECTED_TABLES};
