//! Reporting and output generation
//!
//! Global invariants enforced:
//! - Deterministic output ordering
//! - Byte-for-byte identical output across runs
//! - "Not applicable" comparisons are rendered as `n/a`, never as a zero delta

use crate::benchmark::Comparison;
use crate::gaps::GapAlert;
use crate::profile::FacilityRiskProfile;
use crate::registry::TagResolution;
use crate::trends::TrendAnalysis;
use serde::Serialize;

/// Sort profiles deterministically
pub fn sort_profiles(mut profiles: Vec<FacilityRiskProfile>) -> Vec<FacilityRiskProfile> {
    profiles.sort_by(|a, b| {
        // 1. Composite descending
        b.composite
            .score
            .cmp(&a.composite.score)
            // 2. Facility id ascending (missing ids last)
            .then_with(|| match (&a.facility_id, &b.facility_id) {
                (Some(x), Some(y)) => x.cmp(y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            })
            // 3. Facility name ascending
            .then_with(|| a.facility_name.cmp(&b.facility_name))
    });
    profiles
}

/// Render a table of facility profiles
pub fn render_profiles_text(profiles: &[FacilityRiskProfile]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<6} {:<12} {:<5} {:<5} {:<5} {:<10} {}\n",
        "SCORE", "LABEL", "REG", "STAFF", "FIN", "ID", "FACILITY"
    ));

    for profile in profiles {
        output.push_str(&format!(
            "{:<6} {:<12} {:<5} {:<5} {:<5} {:<10} {}\n",
            profile.composite.score,
            profile.composite.label.as_str(),
            profile.categories.regulatory.score,
            profile.categories.staffing.score,
            profile.categories.financial.score,
            truncate_or_pad(profile.facility_id.as_deref().unwrap_or("-"), 10),
            profile.facility_name.as_deref().unwrap_or("-"),
        ));
    }

    output
}

/// Render one profile with its factor breakdown and peer comparisons
pub fn render_profile_detail(profile: &FacilityRiskProfile) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} ({})\n",
        profile.facility_name.as_deref().unwrap_or("Unnamed facility"),
        profile.facility_id.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Composite: {} {}\n",
        profile.composite.score,
        profile.composite.label.as_str()
    ));
    if profile.defaulted_factors > 0 {
        output.push_str(&format!(
            "Defaulted factors: {}\n",
            profile.defaulted_factors
        ));
    }

    let categories = &profile.categories;
    for category in [&categories.regulatory, &categories.staffing, &categories.financial] {
        output.push_str(&format!(
            "\n{:<30} {:>3}/100\n",
            category.category.as_str().to_uppercase(),
            category.score
        ));
        for factor in &category.factors {
            let marker = if factor.source == crate::metrics::ValueSource::Default {
                " (default)"
            } else {
                ""
            };
            output.push_str(&format!(
                "  {:<28} {:>10} {:>3}/{:<3}{}\n",
                truncate_or_pad(&factor.label, 28),
                format_value(factor.value),
                factor.points,
                factor.max_points,
                marker
            ));
        }
    }

    if let Some(ref comparisons) = profile.benchmarks {
        output.push_str(&format!(
            "\n{:<26} {:<9} {:>10} {:>10} {:>9} {}\n",
            "METRIC", "SCOPE", "FACILITY", "PEER", "DELTA", "OUTCOME"
        ));
        for c in comparisons {
            let (delta, outcome) = match &c.comparison {
                Comparison::NotApplicable => ("n/a".to_string(), "-".to_string()),
                Comparison::Compared {
                    formatted_delta,
                    is_favorable,
                    ..
                } => {
                    let outcome = if *is_favorable { "favorable" } else { "unfavorable" };
                    (formatted_delta.clone(), outcome.to_string())
                }
            };
            output.push_str(&format!(
                "{:<26} {:<9} {:>10} {:>10} {:>9} {}\n",
                truncate_or_pad(&c.label, 26),
                c.scope.as_str(),
                c.facility_value.map(format_value).unwrap_or_else(|| "-".to_string()),
                c.peer_value.map(format_value).unwrap_or_else(|| "-".to_string()),
                delta,
                outcome
            ));
        }
    }

    output
}

/// Render a trend series and its direction
pub fn render_trend_text(analysis: &TrendAnalysis) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12} {:<6} {:<12} {:<5} {:<5} {}\n",
        "DATE", "SCORE", "LABEL", "REG", "STAFF", "FIN"
    ));
    for point in &analysis.series {
        let date = point
            .snapshot_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "undated".to_string());
        output.push_str(&format!(
            "{:<12} {:<6} {:<12} {:<5} {:<5} {}\n",
            date,
            point.composite.score,
            point.composite.label.as_str(),
            point.regulatory,
            point.staffing,
            point.financial
        ));
    }

    output.push_str(&format!(
        "\nDirection (last {} points): {}\n",
        analysis.window,
        analysis.direction.as_str()
    ));
    output.push_str(&format!(
        "  regulatory: {}  staffing: {}  financial: {}\n",
        analysis.categories.regulatory.as_str(),
        analysis.categories.staffing.as_str(),
        analysis.categories.financial.as_str()
    ));

    output
}

/// Render gap alerts with their top cited tags
pub fn render_gaps_text(alerts: &[GapAlert]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<10} {:<9} {:<10} {:<8} {}\n",
        "ALERT", "TIER", "FACILITIES", "AVG", "SYSTEM"
    ));
    for alert in alerts {
        let avg = alert
            .scorecard_average
            .map(|a| format!("{:.1}", a))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{:<10} {:<9} {:<10} {:<8} {}\n",
            alert.alert.as_str(),
            alert.tier.as_str(),
            alert.citing_facilities,
            avg,
            alert.system_name
        ));
        for tag in &alert.top_tags {
            output.push_str(&format!(
                "           {:<8} x{:<4} {}\n",
                tag.definition.tag, tag.count, tag.definition.name
            ));
        }
    }

    output
}

/// Render tag resolutions, one per input
pub fn render_tags_text(resolutions: &[(String, TagResolution)]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12} {:<8} {:<30} {}\n",
        "INPUT", "TAG", "CATEGORY", "NAME"
    ));
    for (raw, resolution) in resolutions {
        let definition = resolution.definition();
        output.push_str(&format!(
            "{:<12} {:<8} {:<30} {}\n",
            truncate_or_pad(raw, 12),
            truncate_or_pad(&definition.tag, 8),
            truncate_or_pad(&definition.category, 30),
            definition.name
        ));
    }

    output
}

/// Render any engine output as pretty JSON
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

/// Truncate or pad string to fixed width
fn truncate_or_pad(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let kept: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        format!("{:<width$}", s, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::PeerBenchmarks;
    use crate::composite::CompositeWeights;
    use crate::metrics::FacilityMetrics;
    use crate::profile::evaluate;

    fn profile(id: &str, deficiencies: f64) -> FacilityRiskProfile {
        let metrics = FacilityMetrics {
            facility_id: Some(id.to_string()),
            facility_name: Some(format!("Facility {}", id)),
            ..Default::default()
        }
        .with("total_deficiencies", deficiencies);
        evaluate(&metrics, &CompositeWeights::default(), None)
    }

    #[test]
    fn test_sort_profiles_by_score_then_id() {
        let sorted = sort_profiles(vec![profile("B", 2.0), profile("C", 20.0), profile("A", 2.0)]);
        let ids: Vec<&str> = sorted
            .iter()
            .map(|p| p.facility_id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_render_is_deterministic() {
        let profiles = vec![profile("A", 7.0), profile("B", 12.0)];
        assert_eq!(render_profiles_text(&profiles), render_profiles_text(&profiles));
        assert_eq!(render_json(&profiles), render_json(&profiles));
    }

    #[test]
    fn test_detail_marks_missing_benchmarks_as_na() {
        let metrics = FacilityMetrics::default().with("overall_rating", 4.0);
        let peers: PeerBenchmarks =
            serde_json::from_str(r#"{"market": {"avg_overall_rating": 3.5}}"#).unwrap();
        let profile = evaluate(&metrics, &CompositeWeights::default(), Some(&peers));
        let text = render_profile_detail(&profile);
        assert!(text.contains("+0.5"));
        assert!(text.contains("n/a"));
        assert!(text.contains("(default)"));
    }

    #[test]
    fn test_truncate_or_pad_handles_multibyte() {
        assert_eq!(truncate_or_pad("Résidence Saint-Jérôme", 10), "Résiden...");
        assert_eq!(truncate_or_pad("abc", 5), "abc  ");
    }
}
