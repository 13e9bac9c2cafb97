use super::ScoreCategory;
use serde::{Deserialize, Serialize};

/// A single student's record from the grade sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRow {
    /// Row identifier (sequence or ID number), always numeric
    pub id: f64,

    /// Student number as printed on the sheet
    pub student_number: String,

    /// Student name
    pub name: String,

    /// Scores indexed by `ScoreCategory::index`
    pub scores: [f64; 4],

    /// Free-text remark (optional)
    pub remark: Option<String>,
}

impl GradeRow {
    /// Score for one category
    pub fn score(&self, category: ScoreCategory) -> f64 {
        self.scores[category.index()]
    }
}
