//! Batch-level score aggregation.

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::screening::round2;
use crate::screening::scoring::ScoreResult;

/// Aggregate statistics over one scored batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total: usize,
    /// Mean score, rounded to 2 decimals.
    pub avg_score: f64,
    pub highest_score: f64,
    pub lowest_score: f64,
    /// Percentage of candidates at or above the cutoff, rounded to 2
    /// decimals.
    pub pass_percentage: f64,
}

/// Reduces a scored batch into an [`AnalyticsSummary`]. An empty batch is
/// an error, not a summary of NaNs.
pub fn summarize_scores(
    results: &[ScoreResult],
    cutoff: f64,
) -> Result<AnalyticsSummary, EngineError> {
    if results.is_empty() {
        return Err(EngineError::EmptyAnalyticsInput);
    }

    let total = results.len();
    let sum: f64 = results.iter().map(|r| r.score).sum();
    let highest_score = results.iter().map(|r| r.score).fold(f64::MIN, f64::max);
    let lowest_score = results.iter().map(|r| r.score).fold(f64::MAX, f64::min);
    let passed = results.iter().filter(|r| r.score >= cutoff).count();

    Ok(AnalyticsSummary {
        total,
        avg_score: round2(sum / total as f64),
        highest_score,
        lowest_score,
        pass_percentage: round2(passed as f64 / total as f64 * 100.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(scores: &[f64]) -> Vec<ScoreResult> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| ScoreResult {
                filename: format!("resume-{i}.pdf"),
                score,
            })
            .collect()
    }

    #[test]
    fn test_summary_worked_example() {
        let summary = summarize_scores(&results(&[40.0, 60.0, 80.0, 100.0]), 70.0).unwrap();
        assert_eq!(
            summary,
            AnalyticsSummary {
                total: 4,
                avg_score: 70.0,
                highest_score: 100.0,
                lowest_score: 40.0,
                pass_percentage: 50.0,
            }
        );
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let summary = summarize_scores(&results(&[70.0, 69.99]), 70.0).unwrap();
        assert_eq!(summary.pass_percentage, 50.0);
    }

    #[test]
    fn test_single_result() {
        let summary = summarize_scores(&results(&[33.33]), 50.0).unwrap();
        assert_eq!(summary.total, 1);
        assert_eq!(summary.avg_score, 33.33);
        assert_eq!(summary.highest_score, 33.33);
        assert_eq!(summary.lowest_score, 33.33);
        assert_eq!(summary.pass_percentage, 0.0);
    }

    #[test]
    fn test_average_is_rounded() {
        let summary = summarize_scores(&results(&[33.33, 33.33, 33.33]), 0.0).unwrap();
        assert_eq!(summary.avg_score, 33.33);
        assert_eq!(summary.pass_percentage, 100.0);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let err = summarize_scores(&[], 70.0).unwrap_err();
        assert!(matches!(err, EngineError::EmptyAnalyticsInput));
    }

    #[test]
    fn test_summary_serializes_all_fields() {
        let summary = summarize_scores(&results(&[50.0]), 50.0).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["pass_percentage"], 100.0);
    }
}
