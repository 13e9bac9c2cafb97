//! Report document composition and `.docx` output
//!
//! The composer turns analysed grades and commentary into an ordered list of
//! fragments; the writer lays those fragments out as a Word document.

mod composer;
mod docx;
mod fragment;
mod template;

pub use composer::{class_info, class_reference, compose, CategorySection, ReportContent};
pub use docx::{persist_report, render_docx};
pub use fragment::{Block, CellBlock, CellContent, Indent, ReportDocument, TableBlock};
