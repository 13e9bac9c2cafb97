//! `.docx` output via docx-rs

use super::fragment::{Block, CellBlock, CellContent, Indent, ReportDocument, TableBlock};
use super::template::{IMAGE_FAILED, LOGO_FAILED};
use crate::images::{EmbeddedImage, EMU_PER_CM};
use anyhow::{Context, Result};
use docx_rs::{
    AlignmentType, BreakType, Docx, Header, PageMargin, Paragraph, Pic, Run, RunFonts,
    SpecialIndentType, Table, TableCell, TableLayoutType, TableRow, WidthType,
};
use std::io::{Cursor, Write};
use std::path::Path;

const BODY_FONT: &str = "SimSun";
const TITLE_FONT: &str = "SimHei";
const LATIN_FONT: &str = "Times New Roman";

// Sizes in half-points
const BODY_SIZE: usize = 21;
const SMALL_SIZE: usize = 18;
const TITLE_SIZE: usize = 36;

/// Two characters of body text, in twips
const CHAR_INDENT: i32 = 420;

const LOGO_WIDTH_EMU: u32 = 35 * EMU_PER_CM / 10;

fn fonts(name: &str) -> RunFonts {
    RunFonts::new().ascii(name).hi_ansi(name).east_asia(name)
}

/// Run with explicit line breaks between lines
fn text_run(lines: &[String]) -> Run {
    let mut run = Run::new();
    for (i, line) in lines.iter().flat_map(|l| l.split('\n')).enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    run
}

fn text_paragraph(lines: &[String], indent: Indent) -> Paragraph {
    let paragraph = Paragraph::new().add_run(text_run(lines));
    match indent {
        Indent::FirstLine => paragraph.indent(
            Some(0),
            Some(SpecialIndentType::FirstLine(CHAR_INDENT)),
            None,
            None,
        ),
        Indent::Left => paragraph.indent(Some(CHAR_INDENT), None, None, None),
        Indent::Double => paragraph.indent(Some(CHAR_INDENT * 2), None, None, None),
    }
}

fn image_run(path: &Path, width_emu: u32) -> Result<Run> {
    let image = EmbeddedImage::load(path)?;
    let (w, h) = image.size_for_width(width_emu);
    let pic = Pic::new_with_dimensions(image.png, image.width_px, image.height_px).size(w, h);
    Ok(Run::new().add_image(pic))
}

fn table_cell(cell: &CellBlock, widths: &[usize], column: usize) -> TableCell {
    let run = match &cell.content {
        CellContent::Text(text) => Run::new().add_text(text.as_str()).size(SMALL_SIZE),
        CellContent::Image { path, width_emu } => match image_run(path, *width_emu) {
            Ok(run) => run,
            Err(e) => {
                log::warn!("Chart not embedded: {:#}", e);
                Run::new().add_text(IMAGE_FAILED).size(SMALL_SIZE)
            }
        },
    };

    let width: usize = widths.iter().skip(column).take(cell.span).sum();
    let mut table_cell = TableCell::new()
        .add_paragraph(Paragraph::new().add_run(run).align(AlignmentType::Center))
        .width(width, WidthType::Dxa);
    if cell.span > 1 {
        table_cell = table_cell.grid_span(cell.span);
    }
    table_cell
}

fn table(block: &TableBlock) -> Table {
    let rows = block
        .rows
        .iter()
        .map(|cells| {
            let mut column = 0;
            let cells = cells
                .iter()
                .map(|cell| {
                    let rendered = table_cell(cell, &block.widths, column);
                    column += cell.span;
                    rendered
                })
                .collect();
            TableRow::new(cells)
        })
        .collect();

    Table::new(rows)
        .set_grid(block.widths.clone())
        .layout(TableLayoutType::Fixed)
}

fn header(logo: &Path) -> Header {
    let paragraph = match image_run(logo, LOGO_WIDTH_EMU) {
        Ok(run) => Paragraph::new().add_run(run),
        Err(e) => {
            log::warn!("Logo not embedded: {:#}", e);
            Paragraph::new().add_run(Run::new().add_text(LOGO_FAILED))
        }
    };
    Header::new().add_paragraph(paragraph)
}

/// Bold table number then the title, indented like body text
fn caption_paragraph(number: &str, title: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(number).bold().size(SMALL_SIZE))
        .add_run(Run::new().add_text(format!(" {}", title)).size(SMALL_SIZE))
        .indent(
            Some(0),
            Some(SpecialIndentType::FirstLine(CHAR_INDENT)),
            None,
            None,
        )
}

fn render_block(docx: Docx, block: &Block) -> Docx {
    match block {
        Block::Title(text) => docx.add_paragraph(
            Paragraph::new()
                .add_run(
                    Run::new()
                        .add_text(text.as_str())
                        .bold()
                        .size(TITLE_SIZE)
                        .fonts(fonts(TITLE_FONT)),
                )
                .align(AlignmentType::Center),
        ),
        Block::Subtitle(text) => docx.add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(text.as_str()).fonts(fonts(LATIN_FONT)))
                .align(AlignmentType::Center),
        ),
        Block::Heading(text) => {
            docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(text.as_str()).bold()))
        }
        Block::Text { lines, indent } => docx.add_paragraph(text_paragraph(lines, *indent)),
        Block::Caption { number, title } => docx.add_paragraph(caption_paragraph(number, title)),
        Block::Table(block) => docx.add_table(table(block)),
    }
}

/// Lay the report out and pack it into `.docx` bytes
pub fn render_docx(document: &ReportDocument) -> Result<Vec<u8>> {
    let mut docx = Docx::new()
        .page_margin(PageMargin::new().top(1247).bottom(777).left(1134).right(1134))
        .default_fonts(fonts(BODY_FONT))
        .default_size(BODY_SIZE);

    if let Some(logo) = &document.logo {
        docx = docx.header(header(logo));
    }

    for block in &document.blocks {
        docx = render_block(docx, block);
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .context("Failed to pack document")?;
    Ok(buffer.into_inner())
}

/// Atomically write packed `.docx` bytes; the target only appears once fully written
pub fn persist_report(bytes: &[u8], path: &Path) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .context("Failed to write report contents")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to save report: {}", path.display()))?;

    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
