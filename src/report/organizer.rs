//! Output file naming and directory structure

use crate::model::ScoreCategory;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Where one run's charts, report and summary go
#[derive(Debug, Clone)]
pub struct OutputLayout {
    /// Output directory
    dir: PathBuf,

    /// Input file stem, used as the prefix of every output name
    stem: String,
}

impl OutputLayout {
    /// Layout for an input file; `output_dir` overrides `<input dir>/<stem>`
    pub fn for_input(input: &Path, output_dir: Option<&Path>) -> Result<Self> {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().trim().to_string())
            .filter(|s| !s.is_empty())
            .with_context(|| format!("Input has no file name: {:?}", input))?;

        let dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(&stem),
        };

        Ok(Self { dir, stem })
    }

    /// Create the output directory
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create output directory {:?}", self.dir))?;
        log::debug!("Output directory ready at {:?}", self.dir);
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// `<stem>_<category>成绩分布.png`
    pub fn chart_path(&self, category: ScoreCategory) -> PathBuf {
        self.dir
            .join(format!("{}_{}.png", self.stem, category.chart_title()))
    }

    /// `<stem>_成绩信息汇总.docx`
    pub fn report_path(&self) -> PathBuf {
        self.dir.join(format!("{}_成绩信息汇总.docx", self.stem))
    }

    /// `<stem>_summary.json`
    pub fn summary_path(&self) -> PathBuf {
        self.dir.join(format!("{}_summary.json", self.stem))
    }
}
