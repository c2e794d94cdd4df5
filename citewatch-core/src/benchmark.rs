//! Benchmark comparison against peer aggregates
//!
//! Global invariants enforced:
//! - A missing or non-numeric side yields `NotApplicable`, never a zero delta
//! - Directionality is per metric (lower-is-better vs higher-is-better)
//! - Peer fields are resolved only through `BENCHMARK_METRICS`
//! - Output order follows the metric table, then market/state/national

use crate::metrics::{FacilityMetrics, LenientValue};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Peer-comparison granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Market,
    State,
    National,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Market, Scope::State, Scope::National];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Market => "market",
            Scope::State => "state",
            Scope::National => "national",
        }
    }
}

/// Peer aggregates keyed by scope, then by peer field name
///
/// A scope that is missing, `null`, or not an object reads as empty, so
/// every comparison at that scope is `NotApplicable`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeerBenchmarks {
    #[serde(deserialize_with = "lenient_scope")]
    pub market: BTreeMap<String, LenientValue>,
    #[serde(deserialize_with = "lenient_scope")]
    pub state: BTreeMap<String, LenientValue>,
    #[serde(deserialize_with = "lenient_scope")]
    pub national: BTreeMap<String, LenientValue>,
}

fn lenient_scope<'de, D>(deserializer: D) -> Result<BTreeMap<String, LenientValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let fields = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Object(fields) => fields,
        other => {
            tracing::debug!(value = %other, "peer scope is not an object, treating as empty");
            return Ok(BTreeMap::new());
        }
    };
    Ok(fields
        .into_iter()
        .filter_map(|(field, value)| {
            serde_json::from_value::<LenientValue>(value)
                .ok()
                .map(|value| (field, value))
        })
        .collect())
}

impl PeerBenchmarks {
    pub fn scope(&self, scope: Scope) -> &BTreeMap<String, LenientValue> {
        match scope {
            Scope::Market => &self.market,
            Scope::State => &self.state,
            Scope::National => &self.national,
        }
    }

    /// Numeric peer value for a peer-side field name
    pub fn value(&self, scope: Scope, peer_field: &str) -> Option<f64> {
        self.scope(scope)
            .get(peer_field)
            .and_then(LenientValue::as_number)
    }
}

/// How a metric's delta is interpreted and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompareOptions {
    pub is_percentage: bool,
    pub lower_is_better: bool,
}

/// Whether the facility beats its peers on a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Better,
    Worse,
    Same,
}

/// Result of comparing a facility value with a peer value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Comparison {
    NotApplicable,
    Compared {
        delta: f64,
        formatted_delta: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        relative_delta_pct: Option<f64>,
        is_favorable: bool,
        outcome: Outcome,
    },
}

impl Comparison {
    pub fn is_applicable(&self) -> bool {
        matches!(self, Comparison::Compared { .. })
    }

    pub fn delta(&self) -> Option<f64> {
        match self {
            Comparison::Compared { delta, .. } => Some(*delta),
            Comparison::NotApplicable => None,
        }
    }

    pub fn is_favorable(&self) -> Option<bool> {
        match self {
            Comparison::Compared { is_favorable, .. } => Some(*is_favorable),
            Comparison::NotApplicable => None,
        }
    }
}

/// Compare a facility value with a peer value
pub fn compare(facility: Option<f64>, peer: Option<f64>, options: CompareOptions) -> Comparison {
    let (facility, peer) = match (facility, peer) {
        (Some(f), Some(p)) if f.is_finite() && p.is_finite() => (f, p),
        _ => return Comparison::NotApplicable,
    };

    let delta = facility - peer;
    let is_favorable = if options.lower_is_better {
        delta < 0.0
    } else {
        delta > 0.0
    };
    let outcome = if delta == 0.0 {
        Outcome::Same
    } else if is_favorable {
        Outcome::Better
    } else {
        Outcome::Worse
    };
    let relative_delta_pct = if peer != 0.0 {
        Some(delta / peer.abs() * 100.0)
    } else {
        None
    };

    Comparison::Compared {
        delta,
        formatted_delta: format_delta(delta, options.is_percentage),
        relative_delta_pct,
        is_favorable,
        outcome,
    }
}

/// Format a delta with an explicit sign and one decimal place
pub fn format_delta(delta: f64, is_percentage: bool) -> String {
    // Avoid "-0.0" for deltas that round to zero
    let rounded = (delta * 10.0).round() / 10.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let suffix = if is_percentage { "%" } else { "" };
    format!("{:+.1}{}", rounded, suffix)
}

/// A benchmarked metric and its facility/peer field names
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkMetric {
    pub key: &'static str,
    pub label: &'static str,
    pub facility_field: &'static str,
    /// Alternate facility-side field, read when `facility_field` is unusable
    pub facility_fallback: Option<&'static str>,
    pub peer_field: &'static str,
    pub options: CompareOptions,
}

impl BenchmarkMetric {
    /// Facility-side value, falling back to the alternate field
    pub fn facility_value(&self, metrics: &FacilityMetrics) -> Option<f64> {
        metrics
            .number(self.facility_field)
            .or_else(|| self.facility_fallback.and_then(|field| metrics.number(field)))
    }
}

const fn metric(
    key: &'static str,
    label: &'static str,
    facility_fallback: Option<&'static str>,
    peer_field: &'static str,
    is_percentage: bool,
    lower_is_better: bool,
) -> BenchmarkMetric {
    BenchmarkMetric {
        key,
        label,
        facility_field: key,
        facility_fallback,
        peer_field,
        options: CompareOptions {
            is_percentage,
            lower_is_better,
        },
    }
}

/// Facility field to peer field translation table.
///
/// Facility fallbacks mirror the scorers' secondary fields where both name
/// the same measure.
pub const BENCHMARK_METRICS: &[BenchmarkMetric] = &[
    metric(
        "overall_rating",
        "Overall rating",
        None,
        "avg_overall_rating",
        false,
        false,
    ),
    metric(
        "health_inspection_rating",
        "Health inspection rating",
        None,
        "avg_health_inspection_rating",
        false,
        false,
    ),
    metric(
        "quality_rating",
        "Quality rating",
        Some("qm_rating"),
        "avg_quality_rating",
        false,
        false,
    ),
    metric(
        "staffing_rating",
        "Staffing rating",
        None,
        "avg_staffing_rating",
        false,
        false,
    ),
    metric(
        "total_deficiencies",
        "Deficiencies",
        Some("deficiency_count"),
        "avg_deficiencies",
        false,
        true,
    ),
    metric(
        "total_penalty_amount",
        "Penalty dollars",
        Some("total_fines"),
        "avg_penalty_amount",
        false,
        true,
    ),
    metric(
        "rn_turnover",
        "RN turnover",
        Some("registered_nurse_turnover"),
        "avg_rn_turnover",
        true,
        true,
    ),
    metric(
        "total_nurse_turnover",
        "Nursing turnover",
        Some("nursing_staff_turnover"),
        "avg_total_nurse_turnover",
        true,
        true,
    ),
    metric(
        "occupancy_rate",
        "Occupancy",
        Some("occupancy_pct"),
        "avg_occupancy_rate",
        true,
        false,
    ),
    metric(
        "medicaid_percentage",
        "Medicaid share",
        Some("medicaid_pct"),
        "avg_medicaid_percentage",
        true,
        true,
    ),
];

/// Look up a benchmark metric by key
pub fn benchmark_metric(key: &str) -> Option<&'static BenchmarkMetric> {
    BENCHMARK_METRICS.iter().find(|m| m.key == key)
}

/// Peer-side field name for a facility-side field name
pub fn peer_field_for(facility_field: &str) -> Option<&'static str> {
    BENCHMARK_METRICS
        .iter()
        .find(|m| m.facility_field == facility_field)
        .map(|m| m.peer_field)
}

/// One metric compared at one scope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MetricComparison {
    pub metric: String,
    pub label: String,
    pub scope: Scope,
    pub facility_value: Option<f64>,
    pub peer_value: Option<f64>,
    pub comparison: Comparison,
}

/// Compare one table metric for a facility at one scope
pub fn compare_metric(
    metric: &BenchmarkMetric,
    scope: Scope,
    metrics: &FacilityMetrics,
    benchmarks: &PeerBenchmarks,
) -> MetricComparison {
    let facility_value = metric.facility_value(metrics);
    let peer_value = benchmarks.value(scope, metric.peer_field);

    MetricComparison {
        metric: metric.key.to_string(),
        label: metric.label.to_string(),
        scope,
        facility_value,
        peer_value,
        comparison: compare(facility_value, peer_value, metric.options),
    }
}

/// Compare every table metric at every scope
pub fn compare_facility(
    metrics: &FacilityMetrics,
    benchmarks: &PeerBenchmarks,
) -> Vec<MetricComparison> {
    BENCHMARK_METRICS
        .iter()
        .flat_map(|metric| {
            Scope::ALL
                .iter()
                .map(move |scope| compare_metric(metric, *scope, metrics, benchmarks))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOWER_BETTER: CompareOptions = CompareOptions {
        is_percentage: false,
        lower_is_better: true,
    };
    const HIGHER_BETTER: CompareOptions = CompareOptions {
        is_percentage: false,
        lower_is_better: false,
    };

    #[test]
    fn test_lower_is_better_directionality() {
        let result = compare(Some(10.0), Some(5.0), LOWER_BETTER);
        assert_eq!(result.is_favorable(), Some(false));
        assert_eq!(result.delta(), Some(5.0));
    }

    #[test]
    fn test_higher_is_better_directionality() {
        let result = compare(Some(5.0), Some(3.0), HIGHER_BETTER);
        assert_eq!(result.is_favorable(), Some(true));
        match result {
            Comparison::Compared { outcome, .. } => assert_eq!(outcome, Outcome::Better),
            Comparison::NotApplicable => panic!("expected a comparison"),
        }
    }

    #[test]
    fn test_missing_side_is_not_zero() {
        let missing = compare(Some(4.0), None, HIGHER_BETTER);
        assert_eq!(missing, Comparison::NotApplicable);
        assert_eq!(missing.delta(), None);

        let zero = compare(Some(4.0), Some(4.0), HIGHER_BETTER);
        assert_ne!(missing, zero);
        assert_eq!(zero.delta(), Some(0.0));
        match zero {
            Comparison::Compared {
                outcome,
                is_favorable,
                ..
            } => {
                assert_eq!(outcome, Outcome::Same);
                assert!(!is_favorable);
            }
            Comparison::NotApplicable => panic!("equal values are comparable"),
        }
    }

    #[test]
    fn test_non_finite_is_not_applicable() {
        assert_eq!(
            compare(Some(f64::NAN), Some(1.0), HIGHER_BETTER),
            Comparison::NotApplicable
        );
    }

    #[test]
    fn test_format_delta_sign() {
        assert_eq!(format_delta(2.0, false), "+2.0");
        assert_eq!(format_delta(-1.5, false), "-1.5");
        assert_eq!(format_delta(0.0, false), "+0.0");
        assert_eq!(format_delta(-0.01, false), "+0.0");
        assert_eq!(format_delta(12.34, true), "+12.3%");
    }

    #[test]
    fn test_relative_delta() {
        match compare(Some(6.0), Some(4.0), HIGHER_BETTER) {
            Comparison::Compared {
                relative_delta_pct, ..
            } => assert_eq!(relative_delta_pct, Some(50.0)),
            Comparison::NotApplicable => panic!("expected a comparison"),
        }
        match compare(Some(6.0), Some(0.0), HIGHER_BETTER) {
            Comparison::Compared {
                relative_delta_pct, ..
            } => assert_eq!(relative_delta_pct, None),
            Comparison::NotApplicable => panic!("expected a comparison"),
        }
    }

    #[test]
    fn test_translation_table_uses_prefixed_peer_fields() {
        assert_eq!(peer_field_for("overall_rating"), Some("avg_overall_rating"));
        assert_eq!(peer_field_for("total_deficiencies"), Some("avg_deficiencies"));
        assert_eq!(peer_field_for("not_a_metric"), None);
        for metric in BENCHMARK_METRICS {
            assert!(metric.peer_field.starts_with("avg_"), "{}", metric.key);
        }
    }

    #[test]
    fn test_compare_facility_per_scope() {
        let metrics = FacilityMetrics::default()
            .with("overall_rating", 4.0)
            .with("total_deficiencies", 12.0);
        let benchmarks: PeerBenchmarks = serde_json::from_str(
            r#"{
                "market": {"avg_overall_rating": 3.2, "avg_deficiencies": "8.5"},
                "state": {"avg_overall_rating": 3.0},
                "national": {}
            }"#,
        )
        .unwrap();

        let results = compare_facility(&metrics, &benchmarks);
        assert_eq!(results.len(), BENCHMARK_METRICS.len() * 3);

        let find = |metric: &str, scope: Scope| {
            results
                .iter()
                .find(|r| r.metric == metric && r.scope == scope)
                .unwrap()
        };

        assert_eq!(
            find("overall_rating", Scope::Market).comparison.is_favorable(),
            Some(true)
        );
        assert_eq!(
            find("total_deficiencies", Scope::Market)
                .comparison
                .is_favorable(),
            Some(false)
        );
        assert!(!find("total_deficiencies", Scope::State)
            .comparison
            .is_applicable());
        assert!(!find("overall_rating", Scope::National)
            .comparison
            .is_applicable());
        assert!(!find("quality_rating", Scope::Market).comparison.is_applicable());
    }

    #[test]
    fn test_facility_side_uses_secondary_field() {
        let metrics = FacilityMetrics::default()
            .with("deficiency_count", 12.0)
            .with("occupancy_rate", "n/a")
            .with("occupancy_pct", 78.0);
        let benchmarks: PeerBenchmarks = serde_json::from_str(
            r#"{"market": {"avg_deficiencies": 8, "avg_occupancy_rate": 82}}"#,
        )
        .unwrap();

        let scored = crate::scoring::score_regulatory(&metrics);
        assert_eq!(scored.factors[0].value, 12.0);

        let deficiencies = compare_metric(
            benchmark_metric("total_deficiencies").unwrap(),
            Scope::Market,
            &metrics,
            &benchmarks,
        );
        assert_eq!(deficiencies.facility_value, Some(12.0));
        assert_eq!(deficiencies.comparison.is_favorable(), Some(false));

        let occupancy = compare_metric(
            benchmark_metric("occupancy_rate").unwrap(),
            Scope::Market,
            &metrics,
            &benchmarks,
        );
        assert_eq!(occupancy.facility_value, Some(78.0));
    }

    #[test]
    fn test_fallbacks_match_scorer_secondary_fields() {
        use crate::scoring::RiskCategory;

        for metric in BENCHMARK_METRICS {
            let Some(fallback) = metric.facility_fallback else {
                continue;
            };
            let paired = RiskCategory::ALL
                .iter()
                .flat_map(|category| category.factors())
                .any(|spec| spec.primary == metric.facility_field && spec.secondary == fallback);
            assert!(paired, "{} falls back to {}", metric.key, fallback);
        }
    }

    #[test]
    fn test_null_scope_is_not_applicable() {
        let benchmarks: PeerBenchmarks = serde_json::from_str(
            r#"{"market": null, "state": {"avg_deficiencies": 5}, "national": "unavailable"}"#,
        )
        .unwrap();
        assert!(benchmarks.market.is_empty());
        assert!(benchmarks.national.is_empty());
        assert_eq!(benchmarks.value(Scope::State, "avg_deficiencies"), Some(5.0));

        let metrics = FacilityMetrics::default().with("total_deficiencies", 7.0);
        let deficiencies = benchmark_metric("total_deficiencies").unwrap();
        let market = compare_metric(deficiencies, Scope::Market, &metrics, &benchmarks);
        assert_eq!(market.comparison, Comparison::NotApplicable);
        let state = compare_metric(deficiencies, Scope::State, &metrics, &benchmarks);
        assert_eq!(state.comparison.delta(), Some(2.0));
    }

    #[test]
    fn test_not_applicable_serializes_with_status() {
        let json = serde_json::to_value(Comparison::NotApplicable).unwrap();
        assert_eq!(json, serde_json::json!({"status": "not_applicable"}));
    }
}
