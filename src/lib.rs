//! Grade Report - course grade sheet to reflection report
//!
//! This library reads exported course grade sheets, computes per-category
//! statistics and score-band distributions, and writes a Word report with
//! distribution charts and generated commentary.

pub mod analysis;
pub mod chart;
pub mod commentary;
pub mod document;
pub mod images;
pub mod model;
pub mod report;
pub mod sheet;
pub mod validation;

pub use report::config::ReportConfig;
pub use report::pipeline::ReportPipeline;
