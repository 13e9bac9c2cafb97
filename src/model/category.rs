use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four graded components of a course, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreCategory {
    /// Day-to-day (online learning) work
    Formative,

    /// Lab work
    Lab,

    /// Final examination
    Final,

    /// Overall course grade
    Overall,
}

impl ScoreCategory {
    /// All categories in the order they appear in the report
    pub const ALL: [ScoreCategory; 4] = [
        ScoreCategory::Formative,
        ScoreCategory::Lab,
        ScoreCategory::Final,
        ScoreCategory::Overall,
    ];

    /// Column label used on the grade sheet
    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::Formative => "平时",
            ScoreCategory::Lab => "实验",
            ScoreCategory::Final => "期末",
            ScoreCategory::Overall => "总评",
        }
    }

    /// Title used for the distribution chart
    pub fn chart_title(&self) -> String {
        format!("{}成绩分布", self.label())
    }

    /// Title of the score table in the report
    pub fn table_title(&self) -> &'static str {
        match self {
            ScoreCategory::Formative => "网络学习部分成绩情况表",
            ScoreCategory::Lab => "实验部分成绩情况表",
            ScoreCategory::Final => "期末考试成绩情况表",
            ScoreCategory::Overall => "课程总评成绩情况表",
        }
    }

    /// Position in report order (0-based)
    pub fn index(&self) -> usize {
        match self {
            ScoreCategory::Formative => 0,
            ScoreCategory::Lab => 1,
            ScoreCategory::Final => 2,
            ScoreCategory::Overall => 3,
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_order() {
        for (i, category) in ScoreCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_chart_title() {
        assert_eq!(ScoreCategory::Final.chart_title(), "期末成绩分布");
        assert_eq!(ScoreCategory::Overall.to_string(), "总评");
    }
}
