//! Trend semantics - replay a facility's snapshot history
//!
//! Global invariants enforced:
//! - History is sorted by snapshot date before scoring (stable, undated first)
//! - Every snapshot is rescored, not only the latest
//! - Direction compares window means; fewer than 2 points is neutral
//! - Input snapshots are never mutated

use crate::composite::{composite_from_categories, CompositeScore, CompositeWeights};
use crate::metrics::FacilityMetrics;
use crate::scoring::score_all;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of trailing points considered for direction
pub const DEFAULT_TREND_WINDOW: usize = 6;

/// Points averaged at each end of the window
const WINDOW_EDGE: usize = 3;

/// Mean differences within this tolerance are stable
const FLAT_EPSILON: f64 = 1e-9;

/// Direction of a score series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
    Neutral,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
            TrendDirection::Neutral => "neutral",
        }
    }
}

/// Scores for one historical snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ScorePoint {
    pub snapshot_date: Option<NaiveDate>,
    pub facility_id: Option<String>,
    pub regulatory: u32,
    pub staffing: u32,
    pub financial: u32,
    pub composite: CompositeScore,
}

/// Per-category directions reported next to the composite direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CategoryDirections {
    pub regulatory: TrendDirection,
    pub staffing: TrendDirection,
    pub financial: TrendDirection,
}

/// Complete trend analysis for one facility
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct TrendAnalysis {
    pub series: Vec<ScorePoint>,
    pub direction: TrendDirection,
    pub categories: CategoryDirections,
    pub window: usize,
}

impl TrendAnalysis {
    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize trend analysis to JSON")
    }

    /// Composite scores in chronological order
    pub fn composite_series(&self) -> Vec<u32> {
        self.series.iter().map(|p| p.composite.score).collect()
    }
}

/// Trend with default weights and window
pub fn trend(history: &[FacilityMetrics]) -> TrendAnalysis {
    trend_with_config(history, &CompositeWeights::default(), DEFAULT_TREND_WINDOW)
}

/// Trend with explicit weights and window size
pub fn trend_with_config(
    history: &[FacilityMetrics],
    weights: &CompositeWeights,
    window: usize,
) -> TrendAnalysis {
    let mut ordered: Vec<&FacilityMetrics> = history.iter().collect();
    ordered.sort_by_key(|m| m.snapshot_date());

    let series: Vec<ScorePoint> = ordered
        .into_iter()
        .map(|metrics| {
            let categories = score_all(metrics);
            ScorePoint {
                snapshot_date: metrics.snapshot_date(),
                facility_id: metrics.facility_id.clone(),
                regulatory: categories.regulatory.score,
                staffing: categories.staffing.score,
                financial: categories.financial.score,
                composite: composite_from_categories(&categories, weights),
            }
        })
        .collect();

    let of = |pick: fn(&ScorePoint) -> u32| -> TrendDirection {
        let values: Vec<f64> = series.iter().map(|p| f64::from(pick(p))).collect();
        direction_of(&values, window)
    };

    let direction = of(|p| p.composite.score);
    let categories = CategoryDirections {
        regulatory: of(|p| p.regulatory),
        staffing: of(|p| p.staffing),
        financial: of(|p| p.financial),
    };

    TrendAnalysis {
        series,
        direction,
        categories,
        window,
    }
}

/// Direction of a chronological series over its trailing window
///
/// Within the last `window` values, the mean of the first `k` is compared
/// with the mean of the last `k`, where `k = min(3, len / 2)`.
pub fn direction_of(values: &[f64], window: usize) -> TrendDirection {
    let start = values.len().saturating_sub(window.max(2));
    let tail = &values[start..];
    if tail.len() < 2 {
        return TrendDirection::Neutral;
    }

    let k = WINDOW_EDGE.min(tail.len() / 2);
    let old = mean(&tail[..k]);
    let new = mean(&tail[tail.len() - k..]);
    let diff = new - old;

    if diff.abs() <= FLAT_EPSILON {
        TrendDirection::Stable
    } else if diff > 0.0 {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(date: &str, deficiencies: f64) -> FacilityMetrics {
        FacilityMetrics {
            snapshot_date: Some(date.to_string()),
            ..Default::default()
        }
        .with("total_deficiencies", deficiencies)
    }

    #[test]
    fn test_direction_three_points_decreasing() {
        assert_eq!(
            direction_of(&[70.0, 60.0, 50.0], DEFAULT_TREND_WINDOW),
            TrendDirection::Decreasing
        );
    }

    #[test]
    fn test_direction_neutral_for_short_series() {
        assert_eq!(direction_of(&[], 6), TrendDirection::Neutral);
        assert_eq!(direction_of(&[42.0], 6), TrendDirection::Neutral);
    }

    #[test]
    fn test_direction_stable_and_increasing() {
        assert_eq!(direction_of(&[40.0, 40.0], 6), TrendDirection::Stable);
        assert_eq!(direction_of(&[10.0, 20.0], 6), TrendDirection::Increasing);
    }

    #[test]
    fn test_direction_uses_trailing_window() {
        // Early spike falls outside the 6-point window
        let values = [100.0, 100.0, 10.0, 10.0, 10.0, 20.0, 20.0, 20.0];
        assert_eq!(direction_of(&values, 6), TrendDirection::Increasing);
    }

    #[test]
    fn test_trend_sorts_by_date() {
        let history = vec![
            snapshot("2024-03-01", 2.0),
            snapshot("2024-01-01", 18.0),
            snapshot("2024-02-01", 8.0),
        ];
        let analysis = trend(&history);
        let dates: Vec<String> = analysis
            .series
            .iter()
            .map(|p| p.snapshot_date.unwrap().to_string())
            .collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-02-01", "2024-03-01"]);
        assert_eq!(analysis.categories.regulatory, TrendDirection::Decreasing);
        assert_eq!(analysis.direction, TrendDirection::Decreasing);
    }

    #[test]
    fn test_undated_snapshots_sort_first() {
        let undated = FacilityMetrics::default().with("total_deficiencies", 1.0);
        let history = vec![snapshot("2024-01-01", 3.0), undated];
        let analysis = trend(&history);
        assert_eq!(analysis.series[0].snapshot_date, None);
        assert_eq!(analysis.series.len(), 2);
    }

    #[test]
    fn test_empty_history() {
        let analysis = trend(&[]);
        assert!(analysis.series.is_empty());
        assert_eq!(analysis.direction, TrendDirection::Neutral);
    }
}
