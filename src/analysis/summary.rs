use serde::Serialize;

/// Count, extremes and mean of one score column
///
/// Extremes and mean are `None` for an empty column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub count: usize,
    pub max: Option<f64>,
    pub min: Option<f64>,
    /// Rounded to two decimals
    pub mean: Option<f64>,
}

impl StatsSummary {
    pub fn max_text(&self) -> String {
        self.max.map(format_score).unwrap_or_else(|| "N/A".to_string())
    }

    pub fn min_text(&self) -> String {
        self.min.map(format_score).unwrap_or_else(|| "N/A".to_string())
    }

    /// Mean with exactly two decimals
    pub fn mean_text(&self) -> String {
        self.mean
            .map(|mean| format!("{:.2}", mean))
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// Summarize a score column
pub fn summarize(scores: &[f64]) -> StatsSummary {
    if scores.is_empty() {
        return StatsSummary {
            count: 0,
            max: None,
            min: None,
            mean: None,
        };
    }

    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;

    StatsSummary {
        count: scores.len(),
        max: Some(max),
        min: Some(min),
        mean: Some(round2(mean)),
    }
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Shortest display of a score: `100`, `78.5`, `66.67`
pub fn format_score(value: f64) -> String {
    format!("{}", round2(value))
}
