//! Category risk scoring
//!
//! Three independent scorers (regulatory, staffing, financial) map a facility
//! snapshot to an integer in [0, 100] by summing ladder awards over a fixed set
//! of sub-factors.
//!
//! Global invariants enforced:
//! - No error paths: missing or non-numeric fields use the factor's default
//! - Sub-factor points are non-negative and bounded by the factor's ladder
//! - Category totals are capped at 100
//! - Factor order in a breakdown matches the factor table order

use crate::ladder::{Ladder, Rung};
use crate::metrics::{FacilityMetrics, ValueSource};
use serde::{Deserialize, Serialize};

/// Cap applied to every category total
pub const MAX_CATEGORY_SCORE: u32 = 100;

/// Risk category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Regulatory,
    Staffing,
    Financial,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 3] = [
        RiskCategory::Regulatory,
        RiskCategory::Staffing,
        RiskCategory::Financial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Regulatory => "regulatory",
            RiskCategory::Staffing => "staffing",
            RiskCategory::Financial => "financial",
        }
    }

    /// Factor table for this category
    pub fn factors(&self) -> &'static [FactorSpec] {
        match self {
            RiskCategory::Regulatory => REGULATORY_FACTORS,
            RiskCategory::Staffing => STAFFING_FACTORS,
            RiskCategory::Financial => FINANCIAL_FACTORS,
        }
    }
}

/// How a factor's field is read
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FactorInput {
    /// Numeric field, default used when absent
    Number { default: f64 },
    /// Boolean field read as 1.0 / 0.0
    Flag { default: bool },
}

/// Static description of one sub-factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub input: FactorInput,
    pub ladder: Ladder,
}

pub const REGULATORY_FACTORS: &[FactorSpec] = &[
    FactorSpec {
        id: "deficiencies",
        label: "Deficiency count",
        primary: "total_deficiencies",
        secondary: "deficiency_count",
        input: FactorInput::Number { default: 0.0 },
        ladder: Ladder::above(&[
            Rung::new(15.0, 35),
            Rung::new(10.0, 25),
            Rung::new(5.0, 15),
            Rung::new(0.0, 5),
        ]),
    },
    FactorSpec {
        id: "penalties",
        label: "Penalty dollars",
        primary: "total_penalty_amount",
        secondary: "total_fines",
        input: FactorInput::Number { default: 0.0 },
        ladder: Ladder::above(&[
            Rung::new(100_000.0, 30),
            Rung::new(50_000.0, 20),
            Rung::new(10_000.0, 10),
            Rung::new(0.0, 5),
        ]),
    },
    FactorSpec {
        id: "inspection_rating",
        label: "Health inspection rating",
        primary: "health_inspection_rating",
        secondary: "overall_rating",
        input: FactorInput::Number { default: 3.0 },
        ladder: Ladder::below(&[Rung::new(2.0, 25), Rung::new(3.0, 15), Rung::new(4.0, 5)]),
    },
    FactorSpec {
        id: "special_focus",
        label: "Special focus facility",
        primary: "special_focus_facility",
        secondary: "sff_status",
        input: FactorInput::Flag { default: false },
        ladder: Ladder::above(&[Rung::new(0.0, 10)]),
    },
];

pub const STAFFING_FACTORS: &[FactorSpec] = &[
    FactorSpec {
        id: "rn_turnover",
        label: "RN turnover %",
        primary: "rn_turnover",
        secondary: "registered_nurse_turnover",
        input: FactorInput::Number { default: 0.0 },
        ladder: Ladder::above(&[
            Rung::new(60.0, 30),
            Rung::new(45.0, 20),
            Rung::new(30.0, 10),
            Rung::new(20.0, 5),
        ]),
    },
    FactorSpec {
        id: "nurse_turnover",
        label: "Total nursing turnover %",
        primary: "total_nurse_turnover",
        secondary: "nursing_staff_turnover",
        input: FactorInput::Number { default: 0.0 },
        ladder: Ladder::above(&[
            Rung::new(60.0, 25),
            Rung::new(50.0, 18),
            Rung::new(40.0, 10),
            Rung::new(30.0, 5),
        ]),
    },
    FactorSpec {
        id: "staffing_rating",
        label: "Staffing rating",
        primary: "staffing_rating",
        secondary: "rn_staffing_rating",
        input: FactorInput::Number { default: 3.0 },
        ladder: Ladder::below(&[Rung::new(2.0, 25), Rung::new(3.0, 15), Rung::new(4.0, 5)]),
    },
    FactorSpec {
        id: "administrator_tenure",
        label: "Administrator tenure (days)",
        primary: "administrator_tenure_days",
        secondary: "administrator_days_in_role",
        input: FactorInput::Number { default: 730.0 },
        ladder: Ladder::below(&[
            Rung::new(180.0, 20),
            Rung::new(365.0, 15),
            Rung::new(730.0, 8),
            Rung::new(1095.0, 3),
        ]),
    },
];

pub const FINANCIAL_FACTORS: &[FactorSpec] = &[
    FactorSpec {
        id: "medicaid_dependency",
        label: "Medicaid dependency %",
        primary: "medicaid_percentage",
        secondary: "medicaid_pct",
        input: FactorInput::Number { default: 60.0 },
        ladder: Ladder::above(&[
            Rung::new(80.0, 35),
            Rung::new(70.0, 25),
            Rung::new(60.0, 15),
            Rung::new(50.0, 5),
        ]),
    },
    FactorSpec {
        id: "occupancy",
        label: "Occupancy %",
        primary: "occupancy_rate",
        secondary: "occupancy_pct",
        input: FactorInput::Number { default: 85.0 },
        ladder: Ladder::below(&[
            Rung::new(70.0, 30),
            Rung::new(80.0, 20),
            Rung::new(85.0, 10),
            Rung::new(90.0, 5),
        ]),
    },
    FactorSpec {
        id: "quality_rating",
        label: "Quality rating",
        primary: "quality_rating",
        secondary: "qm_rating",
        input: FactorInput::Number { default: 3.0 },
        ladder: Ladder::below(&[Rung::new(2.0, 20), Rung::new(3.0, 12), Rung::new(4.0, 5)]),
    },
    FactorSpec {
        id: "vbp_adjustment",
        label: "VBP adjustment factor",
        primary: "vbp_adjustment_factor",
        secondary: "vbp_incentive_multiplier",
        input: FactorInput::Number { default: 1.0 },
        ladder: Ladder::below(&[Rung::new(0.98, 15), Rung::new(0.99, 10), Rung::new(1.0, 5)]),
    },
];

/// Points awarded for one sub-factor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct FactorContribution {
    pub factor: String,
    pub label: String,
    pub value: f64,
    pub source: ValueSource,
    pub points: u32,
    pub max_points: u32,
}

/// A category score with its sub-factor breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct CategoryScore {
    pub category: RiskCategory,
    pub score: u32,
    pub factors: Vec<FactorContribution>,
}

impl CategoryScore {
    /// Number of factors that fell back to their default value
    pub fn defaulted_factors(&self) -> usize {
        self.factors
            .iter()
            .filter(|f| f.source == ValueSource::Default)
            .count()
    }
}

/// All three category scores for one snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct CategoryScores {
    pub regulatory: CategoryScore,
    pub staffing: CategoryScore,
    pub financial: CategoryScore,
}

/// Evaluate a single factor against a record
pub fn evaluate_factor(spec: &FactorSpec, metrics: &FacilityMetrics) -> FactorContribution {
    let (value, source) = match spec.input {
        FactorInput::Number { default } => {
            let observed = metrics.read_number(spec.primary, spec.secondary, default);
            (observed.value, observed.source)
        }
        FactorInput::Flag { default } => {
            let observed = metrics.read_flag(spec.primary, spec.secondary, default);
            (if observed.value { 1.0 } else { 0.0 }, observed.source)
        }
    };

    let max_points = spec.ladder.max_points();
    FactorContribution {
        factor: spec.id.to_string(),
        label: spec.label.to_string(),
        value,
        source,
        points: spec.ladder.award(value).min(max_points),
        max_points,
    }
}

/// Score a record against an arbitrary factor table
pub fn score_factors(
    category: RiskCategory,
    factors: &[FactorSpec],
    metrics: &FacilityMetrics,
) -> CategoryScore {
    let factors: Vec<FactorContribution> = factors
        .iter()
        .map(|spec| evaluate_factor(spec, metrics))
        .collect();
    let total: u32 = factors.iter().map(|f| f.points).sum();

    CategoryScore {
        category,
        score: total.min(MAX_CATEGORY_SCORE),
        factors,
    }
}

/// Score one category using its built-in factor table
pub fn score_category(category: RiskCategory, metrics: &FacilityMetrics) -> CategoryScore {
    score_factors(category, category.factors(), metrics)
}

pub fn score_regulatory(metrics: &FacilityMetrics) -> CategoryScore {
    score_category(RiskCategory::Regulatory, metrics)
}

pub fn score_staffing(metrics: &FacilityMetrics) -> CategoryScore {
    score_category(RiskCategory::Staffing, metrics)
}

pub fn score_financial(metrics: &FacilityMetrics) -> CategoryScore {
    score_category(RiskCategory::Financial, metrics)
}

/// Score all three categories
pub fn score_all(metrics: &FacilityMetrics) -> CategoryScores {
    CategoryScores {
        regulatory: score_regulatory(metrics),
        staffing: score_staffing(metrics),
        financial: score_financial(metrics),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points_for(score: &CategoryScore, factor: &str) -> u32 {
        score
            .factors
            .iter()
            .find(|f| f.factor == factor)
            .map(|f| f.points)
            .unwrap()
    }

    #[test]
    fn test_factor_tables_cap_at_100() {
        for category in RiskCategory::ALL {
            let max: u32 = category
                .factors()
                .iter()
                .map(|f| f.ladder.max_points())
                .sum();
            assert_eq!(max, 100, "{} factors should sum to 100", category.as_str());
        }
    }

    #[test]
    fn test_regulatory_worst_case() {
        let metrics = FacilityMetrics::default()
            .with("total_deficiencies", 18.0)
            .with("total_penalty_amount", 120_000.0)
            .with("health_inspection_rating", 1.0)
            .with("special_focus_facility", true);
        let score = score_regulatory(&metrics);
        assert_eq!(points_for(&score, "deficiencies"), 35);
        assert_eq!(points_for(&score, "penalties"), 30);
        assert_eq!(points_for(&score, "inspection_rating"), 25);
        assert_eq!(points_for(&score, "special_focus"), 10);
        assert_eq!(score.score, 100);
    }

    #[test]
    fn test_regulatory_empty_record_uses_defaults() {
        let score = score_regulatory(&FacilityMetrics::default());
        // Only the default inspection rating of 3 awards points
        assert_eq!(score.score, 5);
        assert_eq!(score.defaulted_factors(), 4);
    }

    #[test]
    fn test_inspection_rating_falls_back_to_overall() {
        let metrics = FacilityMetrics::default().with("overall_rating", 2.0);
        let score = score_regulatory(&metrics);
        let factor = score
            .factors
            .iter()
            .find(|f| f.factor == "inspection_rating")
            .unwrap();
        assert_eq!(factor.source, ValueSource::Secondary);
        assert_eq!(factor.points, 15);
    }

    #[test]
    fn test_staffing_mid_range() {
        let metrics = FacilityMetrics::default()
            .with("rn_turnover", "50")
            .with("total_nurse_turnover", 41.0)
            .with("staffing_rating", 2.0)
            .with("administrator_tenure_days", 200.0);
        let score = score_staffing(&metrics);
        assert_eq!(points_for(&score, "rn_turnover"), 20);
        assert_eq!(points_for(&score, "nurse_turnover"), 10);
        assert_eq!(points_for(&score, "staffing_rating"), 15);
        assert_eq!(points_for(&score, "administrator_tenure"), 15);
        assert_eq!(score.score, 60);
    }

    #[test]
    fn test_staffing_default_tenure_is_population_typical() {
        let score = score_staffing(&FacilityMetrics::default());
        // tenure 730 -> only "< 1095" clears, rating 3 -> "< 4" clears
        assert_eq!(points_for(&score, "administrator_tenure"), 3);
        assert_eq!(points_for(&score, "staffing_rating"), 5);
        assert_eq!(score.score, 8);
    }

    #[test]
    fn test_financial_defaults() {
        let score = score_financial(&FacilityMetrics::default());
        assert_eq!(points_for(&score, "medicaid_dependency"), 5);
        assert_eq!(points_for(&score, "occupancy"), 5);
        assert_eq!(points_for(&score, "quality_rating"), 5);
        assert_eq!(points_for(&score, "vbp_adjustment"), 0);
        assert_eq!(score.score, 15);
    }

    #[test]
    fn test_financial_distressed_facility() {
        let metrics = FacilityMetrics::default()
            .with("medicaid_percentage", 85.0)
            .with("occupancy_rate", 65.0)
            .with("quality_rating", 1.0)
            .with("vbp_adjustment_factor", 0.97);
        assert_eq!(score_financial(&metrics).score, 100);
    }

    #[test]
    fn test_garbage_inputs_coerce_to_defaults() {
        let metrics = FacilityMetrics::default()
            .with("total_deficiencies", "lots")
            .with("total_penalty_amount", "unknown")
            .with("special_focus_facility", "perhaps");
        let score = score_regulatory(&metrics);
        assert_eq!(score.score, 5);
        assert_eq!(score.defaulted_factors(), 4);
    }

    #[test]
    fn test_breakdown_order_matches_table() {
        let score = score_financial(&FacilityMetrics::default());
        let ids: Vec<&str> = score.factors.iter().map(|f| f.factor.as_str()).collect();
        assert_eq!(
            ids,
            vec!["medicaid_dependency", "occupancy", "quality_rating", "vbp_adjustment"]
        );
    }
}
