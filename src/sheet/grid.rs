//! Dense cell grid for the first worksheet of a workbook

use super::SheetError;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

static EMPTY: Cell = Cell::Empty;

/// A single worksheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    /// Numeric value of the cell, parsing text cells when possible
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) if n.is_finite() => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Display text of the cell (integers are printed without a fraction)
    pub fn text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Cell::Number(n) => n.to_string(),
        }
    }

    /// Whether the trimmed cell text equals `token`
    pub fn is_token(&self, token: &str) -> bool {
        matches!(self, Cell::Text(s) if s.trim() == token)
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Error(_) => Cell::Empty,
            other => Cell::Text(other.to_string()),
        }
    }
}

/// Worksheet cells anchored at A1
#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Cell at a 0-based position; out-of-range positions read as empty
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&EMPTY)
    }

    /// The leading `n` rows (fewer if the sheet is shorter)
    pub fn preview(&self, n: usize) -> &[Vec<Cell>] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Load the first worksheet of a workbook
///
/// The used range of a sheet does not have to start at A1; leading rows and
/// columns are padded with empty cells so positions match the sheet.
pub fn read_grid(path: &Path) -> Result<Grid, SheetError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| SheetError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| SheetError::EmptyWorkbook(path.to_path_buf()))?;

    log::debug!("Using worksheet {:?}", sheet_name);

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|source| SheetError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;

    let (row_offset, col_offset) = range
        .start()
        .map(|(row, col)| (row as usize, col as usize))
        .unwrap_or((0, 0));

    let mut rows = vec![Vec::new(); row_offset];
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; col_offset];
        cells.extend(row.iter().map(Cell::from));
        rows.push(cells);
    }

    log::debug!("Worksheet has {} rows", rows.len());
    Ok(Grid::new(rows))
}
