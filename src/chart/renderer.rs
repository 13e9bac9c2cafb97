//! Bar chart renderer backed by plotters

use anyhow::{Context, Result};
use plotters::prelude::*;
use std::fs;
use std::path::Path;

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);

/// Default family; covers the CJK labels
pub const DEFAULT_FONT_FAMILY: &str = "Noto Sans CJK SC";

/// Used when the configured family is not installed
const FALLBACK_FONT_FAMILY: &str = "sans-serif";

/// Chart renderer trait - the pipeline only needs "bars in, image file out"
pub trait ChartRenderer {
    /// Draw `(label, count)` bars in order and write the image to `path`
    fn render(&self, bars: &[(String, usize)], title: &str, path: &Path) -> Result<()>;
}

/// Image size and typography
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Font family for the title, tick labels and axis names.
    /// Must cover CJK glyphs for the default labels.
    pub font_family: String,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            width: 1000,
            height: 600,
        }
    }
}

/// PNG bar chart renderer
#[derive(Debug, Clone, Default)]
pub struct PlottersRenderer {
    style: ChartStyle,
}

impl PlottersRenderer {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    /// Configured family if it can lay out CJK text, else the fallback
    fn font_family(&self) -> &str {
        let family = self.style.font_family.as_str();
        if font_available(family) {
            family
        } else {
            log::warn!(
                "Chart font {:?} not found, using {:?} (labels may not render)",
                family,
                FALLBACK_FONT_FAMILY
            );
            FALLBACK_FONT_FAMILY
        }
    }
}

fn font_available(family: &str) -> bool {
    FontDesc::new(FontFamily::Name(family), 12.0, FontStyle::Normal)
        .box_size("分")
        .is_ok()
}

/// Upper end of the count axis: a little headroom above the tallest bar
fn count_axis_limit(bars: &[(String, usize)]) -> u32 {
    let tallest = bars.iter().map(|(_, count)| *count).max().unwrap_or(0) as u32;
    tallest + (tallest / 10).max(1)
}

impl ChartRenderer for PlottersRenderer {
    fn render(&self, bars: &[(String, usize)], title: &str, path: &Path) -> Result<()> {
        if bars.is_empty() {
            anyhow::bail!("No bars to draw for chart {:?}", title);
        }

        log::debug!("Rendering chart {:?} to {:?}", title, path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create chart directory: {:?}", parent))?;
        }

        let font = self.font_family();
        let root = BitMapBackend::new(path, (self.style.width, self.style.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, (font, 32))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d((0..bars.len()).into_segmented(), 0u32..count_axis_limit(bars))?;

        chart
            .configure_mesh()
            .x_labels(bars.len())
            .x_label_formatter(&|value| match value {
                SegmentValue::CenterOf(idx) => bars
                    .get(*idx)
                    .map(|(label, _)| label.clone())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .y_label_formatter(&|count| count.to_string())
            .x_desc("分数段")
            .y_desc("人数")
            .label_style((font, 18))
            .axis_desc_style((font, 20))
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(SKY_BLUE.filled())
                .margin(20)
                .data(bars.iter().enumerate().map(|(idx, (_, count))| (idx, *count as u32))),
        )?;

        root.present()
            .with_context(|| format!("Failed to write chart: {:?}", path))?;

        log::debug!("Chart written: {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::model::ScoreCategory;

    #[test]
    fn test_axis_limit_has_headroom() {
        let bars = vec![("0-60分".to_string(), 3), ("60-70分".to_string(), 40)];
        assert_eq!(count_axis_limit(&bars), 44);
    }

    #[test]
    fn test_axis_limit_for_empty_class() {
        let bars = vec![("0-60分".to_string(), 0)];
        assert_eq!(count_axis_limit(&bars), 1);
    }

    #[test]
    fn test_no_bars_is_an_error() {
        let renderer = PlottersRenderer::default();
        let dir = tempfile::tempdir().unwrap();
        let result = renderer.render(&[], "空图", &dir.path().join("empty.png"));
        assert!(result.is_err());
        assert!(!dir.path().join("empty.png").exists());
    }

    #[test]
    fn test_renders_png_of_configured_size() {
        if !font_available(FALLBACK_FONT_FAMILY) {
            eprintln!("no system font available, skipping chart drawing test");
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts").join("总评成绩分布.png");
        let analysis = analyze(ScoreCategory::Overall, &[55.0, 60.0, 65.0, 99.0, 100.0]);

        PlottersRenderer::default()
            .render(&analysis.chart_bars(), "总评成绩分布", &path)
            .unwrap();

        let image = image::open(&path).unwrap();
        assert_eq!((image.width(), image.height()), (1000, 600));
    }

    #[test]
    fn test_missing_font_falls_back() {
        let renderer = PlottersRenderer::new(ChartStyle {
            font_family: "No Such Font Family 1234".to_string(),
            ..ChartStyle::default()
        });
        if font_available(FALLBACK_FONT_FAMILY) && !font_available("No Such Font Family 1234") {
            assert_eq!(renderer.font_family(), FALLBACK_FONT_FAMILY);
        }
    }
}
