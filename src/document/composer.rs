//! Report composition
//!
//! Pure: the same content always yields the same fragments. Table 1 is the
//! online-learning rubric; score tables are numbered from 2 in category order.

use super::fragment::{Block, CellBlock, Indent, ReportDocument, TableBlock};
use super::template as t;
use crate::analysis::CategoryAnalysis;
use crate::images::EMU_PER_INCH;
use crate::model::{CourseInfo, ScoreCategory};
use std::path::PathBuf;

/// Twips per inch (table widths)
const TWIPS_PER_INCH: usize = 1440;

/// Score table: ten narrow columns and a wider last column
const SCORE_TABLE_WIDTHS: [usize; 11] = [864, 864, 864, 864, 864, 864, 864, 864, 864, 864, TWIPS_PER_INCH];

/// Rubric table: 1.5in, 1.5in, 3in
const RUBRIC_TABLE_WIDTHS: [usize; 3] = [2160, 2160, 4320];

/// Chart width inside the score table
const CHART_WIDTH_EMU: u32 = 6 * EMU_PER_INCH;

/// One score category's part of the report
#[derive(Debug, Clone)]
pub struct CategorySection {
    pub analysis: CategoryAnalysis,
    pub chart_path: PathBuf,
    pub commentary: String,
}

/// Everything the report says
#[derive(Debug, Clone)]
pub struct ReportContent {
    pub course: CourseInfo,
    /// Class names (only the first two are used)
    pub classes: Vec<String>,
    pub instructor: Option<String>,
    pub teaching_hours: Option<u32>,
    pub lab_sessions: Option<u32>,
    pub total_students: usize,
    pub sections: Vec<CategorySection>,
    pub learning_outcomes: String,
    pub suggestions: String,
    pub logo: Option<PathBuf>,
}

fn named_classes(classes: &[String]) -> Vec<&str> {
    classes
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .take(2)
        .collect()
}

/// Audience line: `A和B，共计N人`, `A，共计N人` or `共计N人`
pub fn class_info(classes: &[String], total_students: usize) -> String {
    let names = named_classes(classes);
    if names.is_empty() {
        format!("共计{}人", total_students)
    } else {
        format!("{}，共计{}人", names.join("和"), total_students)
    }
}

/// Class reference used before `班`: `A和B`, `A` or the placeholder
pub fn class_reference(classes: &[String]) -> String {
    let names = named_classes(classes);
    if names.is_empty() {
        t::PLACEHOLDER.to_string()
    } else {
        names.join("和")
    }
}

fn or_placeholder<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| t::PLACEHOLDER.to_string())
}

/// Compose the report from its content
pub fn compose(content: &ReportContent) -> ReportDocument {
    let mut doc = ReportDocument {
        logo: content.logo.clone(),
        blocks: Vec::new(),
    };

    doc.push(Block::Title(t::TITLE.to_string()));
    doc.push(Block::Subtitle(format!("({})", content.course.semester)));

    compose_basic_info(&mut doc, content);
    compose_assessment_intro(&mut doc);

    let classes = class_reference(&content.classes);
    for (idx, section) in content.sections.iter().enumerate() {
        let table_number = idx + 2;
        compose_section(&mut doc, section, &classes, table_number, content);
    }

    doc.push(Block::Heading(t::HEADING_OUTCOMES.to_string()));
    doc.push(Block::indented(vec![t::OUTCOMES_INTRO.to_string()], Indent::Left));
    doc.push(Block::indented(vec![content.learning_outcomes.clone()], Indent::Left));

    doc.push(Block::Heading(t::HEADING_SUGGESTIONS.to_string()));
    doc.push(Block::indented(vec![content.suggestions.clone()], Indent::Left));

    doc
}

fn compose_basic_info(doc: &mut ReportDocument, content: &ReportContent) {
    doc.push(Block::Heading(t::HEADING_BASIC_INFO.to_string()));
    doc.push(Block::paragraph(format!("课程名称：{}", content.course.course_name)));
    doc.push(Block::paragraph(format!(
        "授课对象及合班情况：{}",
        class_info(&content.classes, content.total_students)
    )));
    doc.push(Block::paragraph(format!(
        "任课教师：{}",
        or_placeholder(content.instructor.as_deref())
    )));
    doc.push(Block::paragraph(format!(
        "实际授课课时：{}学时",
        or_placeholder(content.teaching_hours)
    )));
}

fn compose_assessment_intro(doc: &mut ReportDocument) {
    doc.push(Block::Heading(t::HEADING_ASSESSMENT.to_string()));
    doc.push(Block::paragraph(t::COURSE_INTRO));
    doc.push(Block::paragraph(t::GRADING_INTRO));
    doc.push(Block::paragraph(t::GRADING_FORMULA));
    doc.push(Block::paragraph(t::GRADING_RULE));

    doc.push(Block::Heading(t::HEADING_FORMATIVE.to_string()));
    doc.push(Block::paragraph(t::RUBRIC_INTRO));
    doc.push(Block::Caption {
        number: "表1".to_string(),
        title: t::RUBRIC_TITLE.to_string(),
    });
    doc.push(Block::Table(TableBlock {
        widths: RUBRIC_TABLE_WIDTHS.to_vec(),
        rows: t::RUBRIC
            .iter()
            .map(|row| row.iter().map(|cell| CellBlock::text(*cell)).collect())
            .collect(),
    }));
}

fn compose_section(
    doc: &mut ReportDocument,
    section: &CategorySection,
    classes: &str,
    table_number: usize,
    content: &ReportContent,
) {
    let category = section.analysis.category;

    match category {
        ScoreCategory::Formative => {
            doc.push(Block::paragraph(format!(
                "{}班的网络学习部分的成绩情况见表{}。",
                classes, table_number
            )));
        }
        ScoreCategory::Lab => {
            doc.push(Block::Heading(t::HEADING_LAB.to_string()));
            doc.push(Block::indented(
                vec![
                    format!(
                        "本学期共进行了{}次实验，全部在万维考试系统上完成，由系统自动评分。",
                        or_placeholder(content.lab_sessions)
                    ),
                    format!("{}班的实验成绩情况见表{}。", classes, table_number),
                ],
                Indent::Left,
            ));
        }
        ScoreCategory::Final => {
            doc.push(Block::Heading(t::HEADING_FINAL.to_string()));
            doc.push(Block::paragraph(t::FINAL_INTRO));
            doc.push(Block::indented(
                t::FINAL_PAPER.iter().map(|line| line.to_string()).collect(),
                Indent::Double,
            ));
            doc.push(Block::indented(
                vec![
                    t::FINAL_COVERAGE.to_string(),
                    format!("{}班的期末考试成绩情况见表{}。", classes, table_number),
                ],
                Indent::Left,
            ));
        }
        ScoreCategory::Overall => {
            doc.push(Block::Heading(t::HEADING_OVERALL.to_string()));
            doc.push(Block::paragraph(format!(
                "{}班的课程总评成绩情况见表{}。",
                classes, table_number
            )));
        }
    }

    doc.push(Block::Caption {
        number: format!("表{}", table_number),
        title: category.table_title().to_string(),
    });
    doc.push(Block::Table(score_table(section, content.total_students)));

    doc.push(Block::Heading(t::ANALYSIS_LABEL.to_string()));
    doc.push(Block::indented(vec![section.commentary.clone()], Indent::Left));
}

/// 5 x 11 score table: summary row, band spans, counts, shares, chart
fn score_table(section: &CategorySection, total_students: usize) -> TableBlock {
    let summary = &section.analysis.summary;
    let buckets = &section.analysis.table;

    let header = vec![
        CellBlock::text("人数："),
        CellBlock::text(total_students.to_string()),
        CellBlock::text("最高分:").spanning(2),
        CellBlock::text(summary.max_text()),
        CellBlock::text("最低分：").spanning(2),
        CellBlock::text(summary.min_text()),
        CellBlock::text("平均分：").spanning(2),
        CellBlock::text(summary.mean_text()),
    ];

    let labelled = |label: &str, values: Vec<String>| -> Vec<CellBlock> {
        std::iter::once(CellBlock::text(label))
            .chain(values.into_iter().map(CellBlock::text))
            .collect()
    };

    let spans = labelled("分数段", buckets.iter().map(|b| b.band.span_label()).collect());
    let counts = labelled("人数", buckets.iter().map(|b| b.count.to_string()).collect());
    let shares = labelled(
        "比例",
        buckets.iter().map(|b| format!("{:.2}%", b.percentage)).collect(),
    );

    let chart = vec![
        CellBlock::text("成绩分布图"),
        CellBlock::image(section.chart_path.clone(), CHART_WIDTH_EMU).spanning(10),
    ];

    TableBlock {
        widths: SCORE_TABLE_WIDTHS.to_vec(),
        rows: vec![header, spans, counts, shares, chart],
    }
}
