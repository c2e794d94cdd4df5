//! Composite risk score
//!
//! Global invariants enforced:
//! - Deterministic, total computation
//! - Default weights sum to 1.0
//! - Scores are integers in [0, 100]
//! - Label boundaries are fixed at 25 / 50 / 75

use crate::scoring::{CategoryScores, MAX_CATEGORY_SCORE};
use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of the "Low Risk" label
pub const LOW_RISK_MAX: u32 = 25;
/// Upper bound (inclusive) of the "Medium Risk" label
pub const MEDIUM_RISK_MAX: u32 = 50;
/// Upper bound (inclusive) of the "High Risk" label
pub const HIGH_RISK_MAX: u32 = 75;

/// Discrete composite risk label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
    #[serde(rename = "Severe Risk")]
    Severe,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low Risk",
            RiskLabel::Medium => "Medium Risk",
            RiskLabel::High => "High Risk",
            RiskLabel::Severe => "Severe Risk",
        }
    }

    /// Foreground color token for the presentation layer
    pub fn color_token(&self) -> &'static str {
        match self {
            RiskLabel::Low => "risk-low",
            RiskLabel::Medium => "risk-medium",
            RiskLabel::High => "risk-high",
            RiskLabel::Severe => "risk-severe",
        }
    }

    /// Background tint token for the presentation layer
    pub fn tint_token(&self) -> &'static str {
        match self {
            RiskLabel::Low => "risk-low-subtle",
            RiskLabel::Medium => "risk-medium-subtle",
            RiskLabel::High => "risk-high-subtle",
            RiskLabel::Severe => "risk-severe-subtle",
        }
    }
}

/// Category weights for the composite score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeWeights {
    pub regulatory: f64,
    pub staffing: f64,
    pub financial: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        CompositeWeights {
            regulatory: 0.40,
            staffing: 0.35,
            financial: 0.25,
        }
    }
}

impl CompositeWeights {
    pub fn sum(&self) -> f64 {
        self.regulatory + self.staffing + self.financial
    }
}

/// Composite score and its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CompositeScore {
    pub score: u32,
    pub label: RiskLabel,
}

/// Composite score with default weights
///
/// Formula:
/// score = round(0.40 * regulatory + 0.35 * staffing + 0.25 * financial)
pub fn composite(regulatory: u32, staffing: u32, financial: u32) -> CompositeScore {
    composite_with_weights(regulatory, staffing, financial, &CompositeWeights::default())
}

/// Composite score with custom weights
pub fn composite_with_weights(
    regulatory: u32,
    staffing: u32,
    financial: u32,
    weights: &CompositeWeights,
) -> CompositeScore {
    let cap = MAX_CATEGORY_SCORE as f64;
    let weighted = regulatory.min(MAX_CATEGORY_SCORE) as f64 * weights.regulatory
        + staffing.min(MAX_CATEGORY_SCORE) as f64 * weights.staffing
        + financial.min(MAX_CATEGORY_SCORE) as f64 * weights.financial;
    let score = weighted.round().clamp(0.0, cap) as u32;

    CompositeScore {
        score,
        label: assign_label(score),
    }
}

/// Composite score straight from category results
pub fn composite_from_categories(
    categories: &CategoryScores,
    weights: &CompositeWeights,
) -> CompositeScore {
    composite_with_weights(
        categories.regulatory.score,
        categories.staffing.score,
        categories.financial.score,
        weights,
    )
}

/// Label for a composite score
pub fn assign_label(score: u32) -> RiskLabel {
    if score <= LOW_RISK_MAX {
        RiskLabel::Low
    } else if score <= MEDIUM_RISK_MAX {
        RiskLabel::Medium
    } else if score <= HIGH_RISK_MAX {
        RiskLabel::High
    } else {
        RiskLabel::Severe
    }
}
