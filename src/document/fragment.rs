//! Layout-free description of the report

use std::path::PathBuf;

/// How a text block is indented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Two-character first-line indent
    FirstLine,
    /// Whole paragraph indented by two characters
    Left,
    /// Whole paragraph indented by four characters
    Double,
}

/// Content of a table cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Text(String),
    /// Image file scaled to `width_emu`, aspect kept
    Image { path: PathBuf, width_emu: u32 },
}

/// A table cell spanning `span` grid columns
#[derive(Debug, Clone, PartialEq)]
pub struct CellBlock {
    pub content: CellContent,
    pub span: usize,
}

impl CellBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: CellContent::Text(text.into()),
            span: 1,
        }
    }

    pub fn spanning(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    pub fn image(path: PathBuf, width_emu: u32) -> Self {
        Self {
            content: CellContent::Image { path, width_emu },
            span: 1,
        }
    }

    /// Text of the cell, if it is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            CellContent::Text(text) => Some(text),
            CellContent::Image { .. } => None,
        }
    }
}

/// A bordered table with fixed column widths
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    /// Grid column widths in twips
    pub widths: Vec<usize>,
    pub rows: Vec<Vec<CellBlock>>,
}

impl TableBlock {
    /// Cell in grid-row `row` at position `index` (spans count as one cell)
    pub fn cell(&self, row: usize, index: usize) -> Option<&CellBlock> {
        self.rows.get(row).and_then(|cells| cells.get(index))
    }
}

/// One fragment of the report, in reading order
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Centred document title
    Title(String),
    /// Centred line under the title
    Subtitle(String),
    /// Bold section heading
    Heading(String),
    /// Body text; each line after the first starts on a new line
    Text { lines: Vec<String>, indent: Indent },
    /// Table caption: bold number followed by the title
    Caption { number: String, title: String },
    Table(TableBlock),
}

impl Block {
    /// Single paragraph with a first-line indent
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Text {
            lines: vec![text.into()],
            indent: Indent::FirstLine,
        }
    }

    pub fn indented(lines: Vec<String>, indent: Indent) -> Self {
        Block::Text { lines, indent }
    }
}

/// The complete report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDocument {
    /// Logo placed in the page header
    pub logo: Option<PathBuf>,
    pub blocks: Vec<Block>,
}

impl ReportDocument {
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableBlock> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    pub fn table_count(&self) -> usize {
        self.tables().count()
    }
}
