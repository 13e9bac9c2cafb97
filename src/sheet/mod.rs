//! Grade sheet parsing
//!
//! Reads the first worksheet of an uploaded workbook, detects which of the
//! two known column layouts it uses, and cleans the data body into
//! `GradeRow`s.

mod error;
mod grid;
mod layout;
mod text;

pub use error::SheetError;
pub use grid::{read_grid, Cell, Grid};
pub use layout::{detect_layout, ColumnMap, Detection, Layout, PREVIEW_ROWS};

use crate::model::{GradeRow, Roster, ScoreCategory};
use std::path::Path;

/// Parse a grade sheet into a roster
///
/// # Arguments
/// * `path` - Path to an `.xlsx`, `.xls` or `.ods` workbook
///
/// # Returns
/// The cleaned roster, or a `SheetError` when the file is missing, unreadable,
/// or in neither known layout
pub fn parse_roster(path: &Path) -> Result<Roster, SheetError> {
    if !path.is_file() {
        return Err(SheetError::MissingInput(path.to_path_buf()));
    }

    log::info!("Reading grade sheet from {:?}", path);
    let grid = read_grid(path)?;
    roster_from_grid(&grid)
}

/// Build a roster from an already loaded cell grid
pub fn roster_from_grid(grid: &Grid) -> Result<Roster, SheetError> {
    let (layout, header_row) = match detect_layout(grid.preview(PREVIEW_ROWS)) {
        Detection::Detected { layout, header_row } => (layout, header_row),
        Detection::Unknown => return Err(SheetError::UnknownLayout(PREVIEW_ROWS)),
    };

    log::info!(
        "Detected layout {} (header on row {})",
        layout.tag(),
        header_row + 1
    );

    let course = layout.course_info(grid);
    log::debug!("Course info: {:?}", course);

    let rows = clean_rows(grid, layout.columns(), header_row);
    log::info!("Loaded {} student rows", rows.len());

    Ok(Roster::new(layout, course, rows))
}

/// Keep only rows below the header whose identifier is numeric
fn clean_rows(grid: &Grid, columns: ColumnMap, header_row: usize) -> Vec<GradeRow> {
    let mut rows = Vec::new();

    for index in (header_row + 1)..grid.row_count() {
        let Some(id) = grid.cell(index, columns.id).as_number() else {
            log::debug!("Skipping row {}: identifier is not numeric", index + 1);
            continue;
        };

        let mut scores = [0.0; 4];
        for category in ScoreCategory::ALL {
            let column = columns.scores[category.index()];
            scores[category.index()] = grid.cell(index, column).as_number().unwrap_or(0.0);
        }

        let remark = grid.cell(index, columns.remark).text();

        rows.push(GradeRow {
            id,
            student_number: grid.cell(index, columns.student_number).text(),
            name: grid.cell(index, columns.name).text(),
            scores,
            remark: (!remark.is_empty()).then_some(remark),
        });
    }

    rows
}
