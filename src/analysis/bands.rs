//! Fixed score bands on the 0-100 scale

use super::summary::round2;
use serde::Serialize;

/// A score band: `[lower, upper)`, or `[lower, upper]` when `closed`
///
/// Only the top band of a set is closed, so adjacent bands never share a
/// boundary score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Band {
    pub lower: u32,
    pub upper: u32,
    pub closed: bool,
}

impl Band {
    pub const fn half_open(lower: u32, upper: u32) -> Self {
        Self {
            lower,
            upper,
            closed: false,
        }
    }

    pub const fn closed(lower: u32, upper: u32) -> Self {
        Self {
            lower,
            upper,
            closed: true,
        }
    }

    pub fn contains(&self, score: f64) -> bool {
        let lower = self.lower as f64;
        let upper = self.upper as f64;
        if self.closed {
            score >= lower && score <= upper
        } else {
            score >= lower && score < upper
        }
    }

    /// Label used in prompts and on the chart, e.g. `60-70分`
    pub fn label(&self) -> String {
        format!("{}-{}分", self.lower, self.upper)
    }

    /// Integer span used in the score table header, e.g. `60-69`, `90-100`
    pub fn span_label(&self) -> String {
        if self.closed {
            format!("{}-{}", self.lower, self.upper)
        } else {
            format!("{}-{}", self.lower, self.upper.saturating_sub(1))
        }
    }
}

/// Ten 10-point bands for the score table
pub const FINE_BANDS: [Band; 10] = [
    Band::half_open(0, 10),
    Band::half_open(10, 20),
    Band::half_open(20, 30),
    Band::half_open(30, 40),
    Band::half_open(40, 50),
    Band::half_open(50, 60),
    Band::half_open(60, 70),
    Band::half_open(70, 80),
    Band::half_open(80, 90),
    Band::closed(90, 100),
];

/// Five bands for the distribution chart
pub const COARSE_BANDS: [Band; 5] = [
    Band::half_open(0, 60),
    Band::half_open(60, 70),
    Band::half_open(70, 80),
    Band::half_open(80, 90),
    Band::closed(90, 100),
];

/// Members of one band
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionBucket {
    pub band: Band,
    pub count: usize,
    /// Share of all scores, in percent, rounded to two decimals
    pub percentage: f64,
}

impl DistributionBucket {
    pub fn label(&self) -> String {
        self.band.label()
    }
}

/// Count scores per band
///
/// Percentages are taken over all scores (0 when there are none). Scores
/// outside every band are not counted anywhere.
pub fn distribute(scores: &[f64], bands: &[Band]) -> Vec<DistributionBucket> {
    let total = scores.len();

    let buckets: Vec<DistributionBucket> = bands
        .iter()
        .map(|band| {
            let count = scores.iter().filter(|&&score| band.contains(score)).count();
            DistributionBucket {
                band: *band,
                count,
                percentage: percentage(count, total),
            }
        })
        .collect();

    let counted: usize = buckets.iter().map(|b| b.count).sum();
    if counted < total {
        log::debug!("{} score(s) fall outside every band", total - counted);
    }

    buckets
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(count as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(buckets: &[DistributionBucket]) -> Vec<usize> {
        buckets.iter().map(|b| b.count).collect()
    }

    #[test]
    fn test_boundaries_belong_to_upper_band() {
        let buckets = distribute(&[10.0, 20.0, 89.999, 90.0], &FINE_BANDS);
        assert_eq!(counts(&buckets), vec![0, 1, 1, 0, 0, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn test_top_band_is_closed() {
        let buckets = distribute(&[100.0], &COARSE_BANDS);
        assert_eq!(counts(&buckets), vec![0, 0, 0, 0, 1]);
        assert_eq!(buckets[4].percentage, 100.0);
    }

    #[test]
    fn test_partition_covers_every_score_once() {
        let scores: Vec<f64> = (0..=400).map(|i| i as f64 * 0.25).collect();

        let fine: usize = distribute(&scores, &FINE_BANDS).iter().map(|b| b.count).sum();
        let coarse: usize = distribute(&scores, &COARSE_BANDS).iter().map(|b| b.count).sum();

        assert_eq!(fine, scores.len());
        assert_eq!(coarse, scores.len());

        for score in &scores {
            let hits = FINE_BANDS.iter().filter(|b| b.contains(*score)).count();
            assert_eq!(hits, 1, "score {} matched {} bands", score, hits);
        }
    }

    #[test]
    fn test_no_scores_gives_zero_percent() {
        for bucket in distribute(&[], &FINE_BANDS) {
            assert_eq!(bucket.count, 0);
            assert_eq!(bucket.percentage, 0.0);
        }
    }

    #[test]
    fn test_percentages_are_rounded() {
        let buckets = distribute(&[50.0, 75.0, 76.0], &COARSE_BANDS);
        assert_eq!(buckets[0].percentage, 33.33);
        assert_eq!(buckets[2].percentage, 66.67);
    }

    #[test]
    fn test_out_of_range_scores_are_not_counted() {
        let buckets = distribute(&[-5.0, 105.0, 80.0], &COARSE_BANDS);
        assert_eq!(counts(&buckets), vec![0, 0, 0, 1, 0]);
        assert_eq!(buckets[3].percentage, 33.33);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FINE_BANDS[0].span_label(), "0-9");
        assert_eq!(FINE_BANDS[6].span_label(), "60-69");
        assert_eq!(FINE_BANDS[9].span_label(), "90-100");
        assert_eq!(COARSE_BANDS[0].label(), "0-60分");
    }
}
