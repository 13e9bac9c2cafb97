//! Score statistics and score-band distributions
//!
//! Everything here is a pure function of a score column: the same input
//! always produces the same summary and bucket counts.

mod bands;
mod summary;

pub use bands::{distribute, Band, DistributionBucket, COARSE_BANDS, FINE_BANDS};
pub use summary::{format_score, round2, summarize, StatsSummary};

use crate::model::{Roster, ScoreCategory};
use serde::Serialize;

/// Statistics and both distributions for one score category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAnalysis {
    pub category: ScoreCategory,

    pub summary: StatsSummary,

    /// Ten 10-point bands, shown in the score table
    pub table: Vec<DistributionBucket>,

    /// Five bands (below 60, then 10-point bands), drawn as the chart
    pub chart: Vec<DistributionBucket>,
}

impl CategoryAnalysis {
    /// `(label, count)` pairs of the chart distribution, in band order
    pub fn chart_bars(&self) -> Vec<(String, usize)> {
        self.chart
            .iter()
            .map(|bucket| (bucket.label(), bucket.count))
            .collect()
    }
}

/// Analyze a single score column
pub fn analyze(category: ScoreCategory, scores: &[f64]) -> CategoryAnalysis {
    CategoryAnalysis {
        category,
        summary: summarize(scores),
        table: distribute(scores, &FINE_BANDS),
        chart: distribute(scores, &COARSE_BANDS),
    }
}

/// Analyze every score category of a roster, in report order
pub fn analyze_roster(roster: &Roster) -> Vec<CategoryAnalysis> {
    ScoreCategory::ALL
        .iter()
        .map(|&category| analyze(category, &roster.scores(category)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scores() {
        let analysis = analyze(ScoreCategory::Overall, &[55.0, 60.0, 65.0, 99.0, 100.0]);

        assert_eq!(analysis.summary.count, 5);
        assert_eq!(analysis.summary.min, Some(55.0));
        assert_eq!(analysis.summary.max, Some(100.0));
        assert_eq!(analysis.summary.mean, Some(75.8));

        let counts: Vec<usize> = analysis.chart.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 2, 0, 0, 2]);
    }

    #[test]
    fn test_chart_bars_labels() {
        let analysis = analyze(ScoreCategory::Lab, &[59.5, 60.0]);
        let bars = analysis.chart_bars();

        assert_eq!(bars.len(), 5);
        assert_eq!(bars[0], ("0-60分".to_string(), 1));
        assert_eq!(bars[1], ("60-70分".to_string(), 1));
        assert_eq!(bars[4].0, "90-100分");
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let scores = [12.5, 47.0, 88.0, 90.0, 73.25, 0.0, 100.0];
        let first = analyze(ScoreCategory::Final, &scores);
        let second = analyze(ScoreCategory::Final, &scores);
        assert_eq!(first, second);
    }
}
