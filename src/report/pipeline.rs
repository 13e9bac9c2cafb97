//! Main report pipeline orchestration

use super::config::ReportConfig;
use super::organizer::OutputLayout;
use super::progress::{LogProgress, ProgressReporter};
use crate::analysis::{analyze_roster, CategoryAnalysis};
use crate::chart::ChartRenderer;
use crate::commentary::{
    category_prompt, strip_markdown, TextGenerator, LEARNING_OUTCOMES_PROMPT, SUGGESTIONS_PROMPT,
};
use crate::document::{compose, persist_report, render_docx, CategorySection, ReportContent};
use crate::model::{CourseInfo, Roster};
use crate::sheet::{parse_roster, SheetError};
use crate::validation::check_report_bytes;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

// Progress checkpoints
const PROGRESS_STATS: u8 = 20;
const PROGRESS_PER_CATEGORY: u8 = 15;
const PROGRESS_PER_COMMENTARY: u8 = 4;
const PROGRESS_DONE: u8 = 100;

/// What a successful run produced
#[derive(Debug, Clone, Serialize)]
pub struct ReportOutcome {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub report_path: PathBuf,
    pub summary_path: Option<PathBuf>,
    /// Layout tag of the input sheet
    pub layout: String,
    pub course: CourseInfo,
    pub total_students: usize,
    pub chart_paths: Vec<PathBuf>,
    pub analyses: Vec<CategoryAnalysis>,
}

#[derive(Serialize)]
struct SummaryFile<'a> {
    generated_at: DateTime<Local>,
    #[serde(flatten)]
    outcome: &'a ReportOutcome,
}

/// Main report pipeline
pub struct ReportPipeline<G: TextGenerator, C: ChartRenderer> {
    config: ReportConfig,
    generator: G,
    charts: C,
    progress: Box<dyn ProgressReporter>,
}

impl<G: TextGenerator, C: ChartRenderer> ReportPipeline<G, C> {
    /// Create a new report pipeline that logs its progress
    pub fn new(config: ReportConfig, generator: G, charts: C) -> Self {
        Self {
            config,
            generator,
            charts,
            progress: Box::new(LogProgress),
        }
    }

    /// Send progress checkpoints somewhere other than the log
    pub fn with_progress(mut self, progress: impl ProgressReporter + 'static) -> Self {
        self.progress = Box::new(progress);
        self
    }

    /// Run the complete report generation for one grade sheet
    pub fn run(&self, input: &Path) -> Result<ReportOutcome> {
        log::info!("Starting grade report for {:?}", input);

        if !input.is_file() {
            return Err(SheetError::MissingInput(input.to_path_buf()).into());
        }

        let layout = OutputLayout::for_input(input, self.config.output_dir.as_deref())?;
        layout.init()?;

        // Step 1: Read, detect and clean
        self.progress.report(0, "正在读取Excel文件...");
        let roster = parse_roster(input)?;
        log::info!(
            "Loaded {} students ({}), course {:?}",
            roster.student_count(),
            roster.layout.tag(),
            roster.course.course_name
        );

        // Step 2: Statistics and charts
        self.progress.report(PROGRESS_STATS, "正在计算统计数据...");
        let analyses = analyze_roster(&roster);
        let chart_paths = self.render_charts(&layout, &analyses)?;

        // Step 3: Commentary
        let sections = self.commentary(&analyses, &chart_paths);
        log::info!("Generating closing sections...");
        let learning_outcomes = strip_markdown(&self.generator.generate(LEARNING_OUTCOMES_PROMPT));
        let suggestions = strip_markdown(&self.generator.generate(SUGGESTIONS_PROMPT));

        // Step 4: Document, validated before it replaces any existing report
        let content = self.content(&roster, sections, learning_outcomes, suggestions);
        let bytes = render_docx(&compose(&content))
            .with_context(|| format!("Failed to generate report for {:?}", input))?;
        let check = check_report_bytes(&bytes).context("Generated report failed validation")?;
        log::debug!("Report validated: {} tables", check.tables);

        let report_path = layout.report_path();
        persist_report(&bytes, &report_path)?;
        log::info!("Report written to: {:?}", report_path);

        let mut outcome = ReportOutcome {
            input: input.to_path_buf(),
            output_dir: layout.dir().to_path_buf(),
            report_path,
            summary_path: None,
            layout: roster.layout.tag().to_string(),
            course: roster.course.clone(),
            total_students: roster.student_count(),
            chart_paths,
            analyses,
        };

        // Step 5: Summary
        if self.config.write_summary {
            let path = layout.summary_path();
            outcome.summary_path = Some(path.clone());
            write_summary(&outcome, &path)?;
        }

        self.progress.report(PROGRESS_DONE, "完成");
        log::info!("Report complete!");
        Ok(outcome)
    }

    /// Render one chart per category
    fn render_charts(
        &self,
        layout: &OutputLayout,
        analyses: &[CategoryAnalysis],
    ) -> Result<Vec<PathBuf>> {
        let mut percent = PROGRESS_STATS;
        let mut paths = Vec::with_capacity(analyses.len());

        for analysis in analyses {
            let category = analysis.category;
            let path = layout.chart_path(category);

            self.charts
                .render(&analysis.chart_bars(), &category.chart_title(), &path)
                .with_context(|| format!("Failed to render {} chart", category.label()))?;
            log::debug!("Chart written to: {:?}", path);

            percent += PROGRESS_PER_CATEGORY;
            self.progress
                .report(percent, &format!("正在处理 {} 成绩数据...", category.label()));
            paths.push(path);
        }

        Ok(paths)
    }

    /// Ask for commentary on every category
    fn commentary(&self, analyses: &[CategoryAnalysis], chart_paths: &[PathBuf]) -> Vec<CategorySection> {
        let mut percent = PROGRESS_STATS + PROGRESS_PER_CATEGORY * analyses.len() as u8;

        analyses
            .iter()
            .zip(chart_paths)
            .map(|(analysis, chart_path)| {
                let category = analysis.category;
                log::info!("Generating commentary for {}...", category.label());
                let commentary = self.generator.generate(&category_prompt(analysis));

                percent += PROGRESS_PER_COMMENTARY;
                self.progress
                    .report(percent, &format!("正在生成 {} 成绩报告...", category.label()));

                CategorySection {
                    analysis: analysis.clone(),
                    chart_path: chart_path.clone(),
                    commentary,
                }
            })
            .collect()
    }

    fn content(
        &self,
        roster: &Roster,
        sections: Vec<CategorySection>,
        learning_outcomes: String,
        suggestions: String,
    ) -> ReportContent {
        ReportContent {
            course: roster.course.clone(),
            classes: self.config.classes.clone(),
            instructor: self.config.instructor.clone(),
            teaching_hours: self.config.teaching_hours,
            lab_sessions: self.config.lab_sessions,
            total_students: roster.student_count(),
            sections,
            learning_outcomes,
            suggestions,
            logo: self.config.logo.clone(),
        }
    }
}

fn write_summary(outcome: &ReportOutcome, path: &Path) -> Result<()> {
    let summary = SummaryFile {
        generated_at: Local::now(),
        outcome,
    };
    let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
    fs::write(path, json).with_context(|| format!("Failed to write summary: {:?}", path))?;
    log::info!("Summary written to: {:?}", path);
    Ok(())
}
