use anyhow::Result;
use grade_report::chart::ChartRenderer;
use grade_report::commentary::{OfflineGenerator, TextGenerator};
use grade_report::model::ScoreCategory;
use grade_report::sheet::SheetError;
use grade_report::validation::{validate_report, EXPECTED_TABLES};
use grade_report::{ReportConfig, ReportPipeline};
use image::{Rgb, RgbImage};
use rust_xlsxwriter::Workbook;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use tempfile::TempDir;

/// Writes a plain PNG instead of drawing, so tests need no system fonts
struct SolidChart;

impl ChartRenderer for SolidChart {
    fn render(&self, bars: &[(String, usize)], _title: &str, path: &Path) -> Result<()> {
        assert_eq!(bars.len(), 5);
        RgbImage::from_pixel(100, 60, Rgb([135, 206, 235])).save(path)?;
        Ok(())
    }
}

/// Replies the way the remote model does, with Markdown markers
struct MarkdownGenerator;

impl TextGenerator for MarkdownGenerator {
    fn generate(&self, _prompt: &str) -> String {
        "## 总结\n**整体良好**".to_string()
    }
}

/// Sequence-numbered sheet: title rows, header on row 4
fn write_sequence_sheet(path: &Path, scores: &[[f64; 4]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet
        .write_string(0, 0, "厦门理工学院2023-2024学年第一学期成绩登记表")
        .unwrap();
    sheet.write_string(1, 0, "班级：计科1班").unwrap();
    sheet.write_string(2, 0, "课程名称：大学信息技术").unwrap();
    for (col, header) in ["序号", "姓名", "学号", "", "平时", "实验", "期末", "总评", "备注"]
        .iter()
        .enumerate()
    {
        if !header.is_empty() {
            sheet.write_string(3, col as u16, *header).unwrap();
        }
    }

    for (i, row) in scores.iter().enumerate() {
        let r = 4 + i as u32;
        sheet.write_number(r, 0, (i + 1) as f64).unwrap();
        sheet.write_string(r, 1, format!("学生{}", i + 1)).unwrap();
        sheet.write_string(r, 2, format!("20210{:02}", i + 1)).unwrap();
        for (k, score) in row.iter().enumerate() {
            sheet.write_number(r, 4 + k as u16, *score).unwrap();
        }
    }
    sheet
        .write_string(4 + scores.len() as u32, 0, "任课教师签名：")
        .unwrap();

    workbook.save(path).unwrap();
}

/// ID-numbered sheet: semester in A2, course name in E3, header on row 4
fn write_id_sheet(path: &Path, scores: &[[f64; 4]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, "学生成绩表").unwrap();
    sheet.write_string(1, 0, "(2024-2025学年第二学期)").unwrap();
    sheet.write_string(2, 0, "课程：").unwrap();
    sheet.write_string(2, 4, "程序设计基础").unwrap();
    for (col, header) in ["编号", "学号", "姓名", "", "", "平时", "实验", "期末", "总评", "备注"]
        .iter()
        .enumerate()
    {
        if !header.is_empty() {
            sheet.write_string(3, col as u16, *header).unwrap();
        }
    }

    for (i, row) in scores.iter().enumerate() {
        let r = 4 + i as u32;
        sheet.write_number(r, 0, (i + 1) as f64).unwrap();
        sheet.write_string(r, 1, format!("30{:04}", i + 1)).unwrap();
        sheet.write_string(r, 2, format!("同学{}", i + 1)).unwrap();
        for (k, score) in row.iter().enumerate() {
            sheet.write_number(r, 5 + k as u16, *score).unwrap();
        }
    }

    workbook.save(path).unwrap();
}

fn sample_scores() -> Vec<[f64; 4]> {
    vec![
        [90.0, 85.0, 55.0, 65.0],
        [80.0, 75.0, 60.0, 70.0],
        [70.0, 95.0, 65.0, 72.0],
        [100.0, 100.0, 99.0, 99.0],
        [60.0, 50.0, 100.0, 88.0],
    ]
}

#[test]
fn test_sequence_layout_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("计科1班成绩.xlsx");
    write_sequence_sheet(&input, &sample_scores());

    let config = ReportConfig::new()
        .with_classes(vec!["计科1班".to_string()])
        .with_instructor("王老师");
    let pipeline = ReportPipeline::new(config, OfflineGenerator::new(), SolidChart);

    let outcome = pipeline.run(&input).unwrap();

    assert_eq!(outcome.output_dir, dir.path().join("计科1班成绩"));
    assert_eq!(
        outcome.report_path,
        dir.path().join("计科1班成绩").join("计科1班成绩_成绩信息汇总.docx")
    );
    assert_eq!(outcome.layout, "format_1");
    assert_eq!(outcome.course.semester, "2023-2024学年第一学期");
    assert_eq!(outcome.course.course_name, "大学信息技术");
    assert_eq!(outcome.total_students, 5);
    assert_eq!(outcome.chart_paths.len(), 4);
    for path in &outcome.chart_paths {
        assert!(path.is_file(), "missing chart {:?}", path);
    }
    assert!(outcome.chart_paths[3].ends_with("计科1班成绩_总评成绩分布.png"));

    let final_exam = &outcome.analyses[ScoreCategory::Final.index()];
    assert_eq!(final_exam.summary.mean, Some(75.8));
    let coarse: Vec<usize> = final_exam.chart.iter().map(|b| b.count).collect();
    assert_eq!(coarse, vec![1, 2, 0, 0, 2]);

    let check = validate_report(&outcome.report_path).unwrap();
    assert_eq!(check.tables, EXPECTED_TABLES);
}

#[test]
fn test_id_layout_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("grades.xlsx");
    let out = dir.path().join("reports");
    write_id_sheet(&input, &sample_scores());

    let config = ReportConfig::new().with_output_dir(out.clone()).with_summary(false);
    let pipeline = ReportPipeline::new(config, OfflineGenerator::new(), SolidChart);

    let outcome = pipeline.run(&input).unwrap();

    assert_eq!(outcome.layout, "format_2");
    assert_eq!(outcome.course.semester, "2024-2025学年第二学期");
    assert_eq!(outcome.course.course_name, "程序设计基础");
    assert_eq!(outcome.output_dir, out);
    assert!(outcome.summary_path.is_none());
    assert!(!out.join("grades_summary.json").exists());
    assert!(validate_report(&outcome.report_path).is_ok());
}

#[test]
fn test_summary_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("grades.xlsx");
    write_sequence_sheet(&input, &sample_scores());

    let pipeline = ReportPipeline::new(ReportConfig::new(), MarkdownGenerator, SolidChart);
    let outcome = pipeline.run(&input).unwrap();

    let path = outcome.summary_path.clone().unwrap();
    assert_eq!(path, dir.path().join("grades").join("grades_summary.json"));

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(summary["layout"], "format_1");
    assert_eq!(summary["total_students"], 5);
    assert_eq!(summary["analyses"].as_array().unwrap().len(), 4);
    assert!(summary["generated_at"].is_string());
}

#[test]
fn test_progress_checkpoints() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("grades.xlsx");
    write_sequence_sheet(&input, &sample_scores());

    let seen: Rc<RefCell<Vec<(u8, String)>>> = Rc::new(RefCell::new(Vec::new()));
    let recorder = Rc::clone(&seen);

    let pipeline = ReportPipeline::new(ReportConfig::new(), OfflineGenerator::new(), SolidChart)
        .with_progress(move |percent: u8, status: &str| {
            recorder.borrow_mut().push((percent, status.to_string()));
        });
    pipeline.run(&input).unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.first(), Some(&(0, "正在读取Excel文件...".to_string())));
    assert_eq!(seen[1], (20, "正在计算统计数据...".to_string()));
    assert_eq!(seen[2], (35, "正在处理 平时 成绩数据...".to_string()));
    assert_eq!(seen.last(), Some(&(100, "完成".to_string())));

    let percents: Vec<u8> = seen.iter().map(|(p, _)| *p).collect();
    assert!(percents.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_missing_input() {
    let dir = TempDir::new().unwrap();
    let pipeline = ReportPipeline::new(ReportConfig::new(), OfflineGenerator::new(), SolidChart);

    let err = pipeline.run(&dir.path().join("absent.xlsx")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SheetError>(),
        Some(SheetError::MissingInput(_))
    ));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_unknown_layout_writes_no_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("other.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "姓名").unwrap();
    sheet.write_string(0, 1, "成绩").unwrap();
    sheet.write_string(1, 0, "张三").unwrap();
    sheet.write_number(1, 1, 88.0).unwrap();
    workbook.save(&input).unwrap();

    let pipeline = ReportPipeline::new(ReportConfig::new(), OfflineGenerator::new(), SolidChart);
    let err = pipeline.run(&input).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SheetError>(),
        Some(SheetError::UnknownLayout(_))
    ));
    assert!(!dir.path().join("other").join("other_成绩信息汇总.docx").exists());
}
