//! Grade sheet layout detection
//!
//! Two layouts are known. Both put a header row somewhere in the first few
//! rows, with a sequence-number (`序号`) or ID-number (`编号`) column first.

use super::grid::{Cell, Grid};
use super::text;
use crate::model::CourseInfo;
use serde::{Deserialize, Serialize};

/// Number of leading rows scanned for a header marker (title row plus six)
pub const PREVIEW_ROWS: usize = 7;

/// Known grade sheet layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// Header starts with `序号`; semester in A1, course name in A3
    SequenceNumbered,

    /// Header starts with `编号`; semester in A2, course name in E3
    IdNumbered,
}

/// Column positions (0-based) of one layout's data body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub id: usize,
    pub name: usize,
    pub student_number: usize,
    /// Indexed by `ScoreCategory::index`
    pub scores: [usize; 4],
    pub remark: usize,
}

/// Result of scanning a sheet preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    Detected { layout: Layout, header_row: usize },
    Unknown,
}

impl Detection {
    /// Layout tag, or `"unknown"`
    pub fn tag(&self) -> &'static str {
        match self {
            Detection::Detected { layout, .. } => layout.tag(),
            Detection::Unknown => "unknown",
        }
    }
}

impl Layout {
    /// Detection order; within one row the sequence-number marker wins
    pub const ALL: [Layout; 2] = [Layout::SequenceNumbered, Layout::IdNumbered];

    pub fn tag(&self) -> &'static str {
        match self {
            Layout::SequenceNumbered => "format_1",
            Layout::IdNumbered => "format_2",
        }
    }

    /// Header cell text that identifies the layout
    pub fn marker(&self) -> &'static str {
        match self {
            Layout::SequenceNumbered => "序号",
            Layout::IdNumbered => "编号",
        }
    }

    pub fn columns(&self) -> ColumnMap {
        match self {
            // 序号 姓名 学号 _ 平时 实验 期末 总评 备注
            Layout::SequenceNumbered => ColumnMap {
                id: 0,
                name: 1,
                student_number: 2,
                scores: [4, 5, 6, 7],
                remark: 8,
            },
            // 编号 学号 姓名 _ _ 平时 实验 期末 总评 备注
            Layout::IdNumbered => ColumnMap {
                id: 0,
                name: 2,
                student_number: 1,
                scores: [5, 6, 7, 8],
                remark: 9,
            },
        }
    }

    /// Extract semester and course name from the title cells
    pub fn course_info(&self, grid: &Grid) -> CourseInfo {
        match self {
            Layout::SequenceNumbered => CourseInfo {
                semester: text::between(&grid.cell(0, 0).text(), "厦门理工学院", "成绩登记表"),
                course_name: text::after(&grid.cell(2, 0).text(), "课程名称："),
            },
            Layout::IdNumbered => CourseInfo {
                semester: text::in_parentheses(&grid.cell(1, 0).text()),
                course_name: grid.cell(2, 4).text(),
            },
        }
    }
}

/// Find the header row in a preview of the sheet's leading rows
///
/// Returns the first row containing either marker, or `Detection::Unknown`.
pub fn detect_layout(preview: &[Vec<Cell>]) -> Detection {
    for (idx, row) in preview.iter().enumerate() {
        for layout in Layout::ALL {
            if row.iter().any(|cell| cell.is_token(layout.marker())) {
                return Detection::Detected {
                    layout,
                    header_row: idx,
                };
            }
        }
    }

    Detection::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells
            .iter()
            .map(|s| {
                if s.is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(s.to_string())
                }
            })
            .collect()
    }

    #[test]
    fn test_detect_sequence_layout() {
        let preview = vec![
            row(&["厦门理工学院成绩登记表"]),
            row(&[""]),
            row(&["课程名称：高等数学"]),
            row(&["序号", "姓名", "学号"]),
        ];

        let detection = detect_layout(&preview);
        assert_eq!(
            detection,
            Detection::Detected {
                layout: Layout::SequenceNumbered,
                header_row: 3
            }
        );
        assert_eq!(detection.tag(), "format_1");
    }

    #[test]
    fn test_detect_id_layout() {
        let preview = vec![
            row(&["成绩单"]),
            row(&["(2023-2024-1)"]),
            row(&["", "", "", "", "线性代数"]),
            row(&["", ""]),
            row(&[" 编号 ", "学号", "姓名"]),
        ];

        assert_eq!(
            detect_layout(&preview),
            Detection::Detected {
                layout: Layout::IdNumbered,
                header_row: 4
            }
        );
    }

    #[test]
    fn test_first_marker_row_wins() {
        let preview = vec![row(&["编号", "序号"]), row(&["序号"])];

        // Same row: sequence marker takes precedence
        assert_eq!(
            detect_layout(&preview),
            Detection::Detected {
                layout: Layout::SequenceNumbered,
                header_row: 0
            }
        );
    }

    #[test]
    fn test_marker_must_match_whole_cell() {
        let preview = vec![row(&["序号列", "编号：3"])];
        assert_eq!(detect_layout(&preview), Detection::Unknown);
    }

    #[test]
    fn test_unknown_layout() {
        let preview = vec![row(&["姓名", "成绩"]), row(&["张三", "90"])];
        let detection = detect_layout(&preview);
        assert_eq!(detection, Detection::Unknown);
        assert_eq!(detection.tag(), "unknown");
    }

    #[test]
    fn test_empty_preview() {
        assert_eq!(detect_layout(&[]), Detection::Unknown);
    }

    #[test]
    fn test_id_layout_course_info() {
        let grid = Grid::new(vec![
            row(&["厦门理工学院学生成绩单"]),
            row(&["（2022-2023学年第二学期）"]),
            row(&["", "", "", "课程：", " 程序设计基础 "]),
        ]);

        let info = Layout::IdNumbered.course_info(&grid);
        assert_eq!(info.semester, "2022-2023学年第二学期");
        assert_eq!(info.course_name, "程序设计基础");
    }

    #[test]
    fn test_missing_title_cells_give_empty_info() {
        let info = Layout::SequenceNumbered.course_info(&Grid::default());
        assert_eq!(info, CourseInfo::default());
    }
}
