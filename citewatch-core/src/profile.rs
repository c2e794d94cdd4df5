//! One-call facility evaluation
//!
//! Global invariants enforced:
//! - A profile is a pure function of its record, weights and peer data
//! - Batch results keep input order

use crate::benchmark::{compare_facility, MetricComparison, PeerBenchmarks};
use crate::composite::{composite_from_categories, CompositeScore, CompositeWeights};
use crate::metrics::FacilityMetrics;
use crate::scoring::{score_all, CategoryScores};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Category scores, composite and optional peer comparisons for one facility
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct FacilityRiskProfile {
    pub facility_id: Option<String>,
    pub facility_name: Option<String>,
    pub state: Option<String>,
    pub snapshot_date: Option<String>,
    pub categories: CategoryScores,
    pub composite: CompositeScore,
    /// Sub-factors across all categories that used a default value
    pub defaulted_factors: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmarks: Option<Vec<MetricComparison>>,
}

/// Evaluate one facility record
pub fn evaluate(
    metrics: &FacilityMetrics,
    weights: &CompositeWeights,
    benchmarks: Option<&PeerBenchmarks>,
) -> FacilityRiskProfile {
    let categories = score_all(metrics);
    let composite = composite_from_categories(&categories, weights);
    let defaulted_factors = categories.regulatory.defaulted_factors()
        + categories.staffing.defaulted_factors()
        + categories.financial.defaulted_factors();

    FacilityRiskProfile {
        facility_id: metrics.facility_id.clone(),
        facility_name: metrics.facility_name.clone(),
        state: metrics.state.clone(),
        snapshot_date: metrics.snapshot_date.clone(),
        categories,
        composite,
        defaulted_factors,
        benchmarks: benchmarks.map(|peers| compare_facility(metrics, peers)),
    }
}

/// Evaluate many records in parallel
pub fn evaluate_batch(
    records: &[FacilityMetrics],
    weights: &CompositeWeights,
    benchmarks: Option<&PeerBenchmarks>,
) -> Vec<FacilityRiskProfile> {
    records
        .par_iter()
        .map(|metrics| evaluate(metrics, weights, benchmarks))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::RiskLabel;

    #[test]
    fn test_evaluate_worst_regulatory() {
        let metrics = FacilityMetrics {
            facility_id: Some("015009".to_string()),
            ..Default::default()
        }
        .with("total_deficiencies", 18.0)
        .with("total_penalty_amount", 120_000.0)
        .with("health_inspection_rating", 1.0)
        .with("special_focus_facility", true);

        let profile = evaluate(&metrics, &CompositeWeights::default(), None);
        assert_eq!(profile.facility_id.as_deref(), Some("015009"));
        assert_eq!(profile.categories.regulatory.score, 100);
        // 40 + 0.35 * 8 + 0.25 * 15 = 46.55
        assert_eq!(profile.composite.score, 47);
        assert_eq!(profile.composite.label, RiskLabel::Medium);
        assert!(profile.benchmarks.is_none());
    }

    #[test]
    fn test_defaulted_factor_count() {
        let profile = evaluate(&FacilityMetrics::default(), &CompositeWeights::default(), None);
        assert_eq!(profile.defaulted_factors, 12);
    }

    #[test]
    fn test_batch_preserves_order() {
        let records: Vec<FacilityMetrics> = (0..64)
            .map(|i| FacilityMetrics {
                facility_id: Some(format!("F{:03}", i)),
                ..Default::default()
            }
            .with("total_deficiencies", f64::from(i)))
            .collect();

        let profiles = evaluate_batch(&records, &CompositeWeights::default(), None);
        assert_eq!(profiles.len(), records.len());
        for (record, profile) in records.iter().zip(&profiles) {
            assert_eq!(record.facility_id, profile.facility_id);
            assert_eq!(
                profile,
                &evaluate(record, &CompositeWeights::default(), None)
            );
        }
    }

    #[test]
    fn test_benchmarks_attached_when_supplied() {
        let peers = PeerBenchmarks::default();
        let profile = evaluate(
            &FacilityMetrics::default(),
            &CompositeWeights::default(),
            Some(&peers),
        );
        let comparisons = profile.benchmarks.unwrap();
        assert!(comparisons.iter().all(|c| !c.comparison.is_applicable()));
    }
}
