//! Read-back validation of a generated report

use anyhow::{Context, Result};
use docx_rs::DocumentChild;
use std::path::Path;

/// Rubric table plus one score table per category
pub const EXPECTED_TABLES: usize = 5;

/// What the read-back found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportCheck {
    pub size_bytes: u64,
    pub paragraphs: usize,
    pub tables: usize,
}

/// Validate a generated report by parsing it with docx-rs
///
/// # Arguments
/// * `path` - The `.docx` file to check
///
/// # Returns
/// The counts found, or an error if the file is missing, empty, unreadable
/// or holds fewer than `EXPECTED_TABLES` tables
pub fn validate_report(path: &Path) -> Result<ReportCheck> {
    log::info!("Validating report at: {:?}", path);

    let data = std::fs::read(path).with_context(|| format!("Report not found: {:?}", path))?;
    check_report_bytes(&data).with_context(|| format!("Invalid report: {:?}", path))
}

/// Validate packed `.docx` bytes before they are written anywhere
pub fn check_report_bytes(data: &[u8]) -> Result<ReportCheck> {
    if data.is_empty() {
        anyhow::bail!("Report is empty");
    }

    let docx = docx_rs::read_docx(data).context("Failed to parse report")?;

    let (paragraphs, tables) = docx
        .document
        .children
        .iter()
        .fold((0, 0), |(p, t), child| match child {
            DocumentChild::Paragraph(_) => (p + 1, t),
            DocumentChild::Table(_) => (p, t + 1),
            _ => (p, t),
        });

    log::debug!("Report has {} paragraphs and {} tables", paragraphs, tables);

    if tables < EXPECTED_TABLES {
        anyhow::bail!(
            "Report has {} tables, expected at least {}",
            tables,
            EXPECTED_TABLES
        );
    }

    Ok(ReportCheck {
        size_bytes: data.len() as u64,
        paragraphs,
        tables,
    })
}
