use super::{GradeRow, ScoreCategory};
use crate::sheet::Layout;
use serde::{Deserialize, Serialize};

/// Course metadata taken from the sheet's title cells
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInfo {
    /// Semester text, e.g. "2023-2024学年第一学期"
    pub semester: String,

    /// Course name
    pub course_name: String,
}

/// Cleaned grade sheet: student rows plus course metadata
#[derive(Debug, Clone)]
pub struct Roster {
    /// Layout the sheet was detected as
    pub layout: Layout,

    /// Course metadata
    pub course: CourseInfo,

    /// Student rows, in sheet order
    rows: Vec<GradeRow>,
}

impl Roster {
    /// Create a roster from already-cleaned rows
    pub fn new(layout: Layout, course: CourseInfo, rows: Vec<GradeRow>) -> Self {
        Self {
            layout,
            course,
            rows,
        }
    }

    /// All student rows
    pub fn rows(&self) -> &[GradeRow] {
        &self.rows
    }

    /// Number of students
    pub fn student_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the roster has no students
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The column of scores for one category, in sheet order
    pub fn scores(&self, category: ScoreCategory) -> Vec<f64> {
        self.rows.iter().map(|row| row.score(category)).collect()
    }
}
