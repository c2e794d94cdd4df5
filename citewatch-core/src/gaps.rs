//! Clinical-system gap classification
//!
//! Fuses external regulatory risk (how many cohort facilities were cited
//! under a system's tags) with internal audit performance (scorecard
//! percentages) into one alert per system.
//!
//! Global invariants enforced:
//! - Citation tags are matched through the registry normalizer only
//! - "No scorecard rows" (NO_DATA) is distinct from "below target"
//! - Tier counts distinct facilities, not citations
//! - Deterministic ordering of tag evidence and alerts

use crate::metrics::{lenient_flag, lenient_text, lenient_text_or_empty, LenientValue};
use crate::registry::{normalize_code, CitationDefinition, Registry};
use crate::systems::{ClinicalSystem, CLINICAL_SYSTEMS};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One citation issued to a cohort member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortCitation {
    #[serde(default, deserialize_with = "lenient_text_or_empty")]
    pub facility_id: String,
    /// Tag in any spelling the normalizer accepts, bare numbers included
    #[serde(default, deserialize_with = "lenient_text_or_empty")]
    pub tag: String,
    /// Scope/severity grid letter (A-L)
    #[serde(default, deserialize_with = "lenient_text")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub corrected: Option<bool>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub survey_date: Option<String>,
}

/// One internal audit result for a clinical system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardRow {
    #[serde(default, deserialize_with = "lenient_text")]
    pub facility_id: Option<String>,
    /// System id or display name
    #[serde(default, deserialize_with = "lenient_text_or_empty")]
    pub system: String,
    #[serde(default)]
    pub percentage: Option<LenientValue>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub period: Option<String>,
}

impl ScorecardRow {
    /// Percentage when it is a finite number in [0, 100]
    pub fn usable_percentage(&self) -> Option<f64> {
        self.percentage
            .as_ref()
            .and_then(LenientValue::as_number)
            .filter(|p| (0.0..=100.0).contains(p))
    }
}

/// External regulatory risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    High,
    Moderate,
    Low,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::High => "HIGH",
            RiskTier::Moderate => "MODERATE",
            RiskTier::Low => "LOW",
        }
    }
}

/// Gap alert, declared from most to least severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GapAlertKind {
    Urgent,
    Attention,
    Monitor,
    Improve,
    NoData,
    Strong,
}

impl GapAlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GapAlertKind::Urgent => "URGENT",
            GapAlertKind::Attention => "ATTENTION",
            GapAlertKind::Monitor => "MONITOR",
            GapAlertKind::Improve => "IMPROVE",
            GapAlertKind::NoData => "NO_DATA",
            GapAlertKind::Strong => "STRONG",
        }
    }
}

/// Scorecard evidence for one system across the cohort
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScorecardSummary {
    /// No rows reference the system
    NoData,
    /// Rows exist but none has a usable percentage
    Unscored { rows: usize },
    Average { value: f64, rows: usize },
}

impl ScorecardSummary {
    pub fn average(&self) -> Option<f64> {
        match self {
            ScorecardSummary::Average { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn rows(&self) -> usize {
        match self {
            ScorecardSummary::NoData => 0,
            ScorecardSummary::Unscored { rows } | ScorecardSummary::Average { rows, .. } => *rows,
        }
    }
}

/// Tier cutoffs and alert target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapThresholds {
    /// Citing facilities needed for HIGH
    pub high_min_facilities: usize,
    /// Citing facilities needed for MODERATE
    pub moderate_min_facilities: usize,
    /// Scorecard average at or above which performance is on target
    pub target_score: f64,
    /// Number of most-cited tags reported per system
    pub top_tags: usize,
}

impl Default for GapThresholds {
    fn default() -> Self {
        GapThresholds {
            high_min_facilities: 3,
            moderate_min_facilities: 1,
            target_score: 75.0,
            top_tags: 5,
        }
    }
}

/// A cited tag and how often it was cited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagCount {
    pub definition: CitationDefinition,
    pub count: usize,
}

/// Gap classification for one clinical system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GapAlert {
    pub system_id: String,
    pub system_name: String,
    pub tier: RiskTier,
    pub citing_facilities: usize,
    pub citation_count: usize,
    pub scorecard: ScorecardSummary,
    pub scorecard_average: Option<f64>,
    pub alert: GapAlertKind,
    pub top_tags: Vec<TagCount>,
}

/// A citation after registry resolution
struct ResolvedCitation<'a> {
    citation: &'a CohortCitation,
    code: Option<String>,
    definition: CitationDefinition,
}

fn resolve_citations<'a>(
    citations: &'a [CohortCitation],
    registry: &Registry,
) -> Vec<ResolvedCitation<'a>> {
    citations
        .iter()
        .map(|citation| ResolvedCitation {
            citation,
            code: registry
                .matched_code(&citation.tag)
                .or_else(|| normalize_code(&citation.tag)),
            definition: registry.resolve(&citation.tag),
        })
        .collect()
}

/// Tier for a number of distinct citing facilities
pub fn external_tier(citing_facilities: usize, thresholds: &GapThresholds) -> RiskTier {
    if citing_facilities >= thresholds.high_min_facilities {
        RiskTier::High
    } else if citing_facilities >= thresholds.moderate_min_facilities {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

/// Collapse a system's scorecard rows into a summary
pub fn summarize_scorecards(system: &ClinicalSystem, rows: &[ScorecardRow]) -> ScorecardSummary {
    let matching: Vec<&ScorecardRow> = rows
        .iter()
        .filter(|row| system.matches_label(&row.system))
        .collect();
    if matching.is_empty() {
        return ScorecardSummary::NoData;
    }

    let usable: Vec<f64> = matching
        .iter()
        .filter_map(|row| row.usable_percentage())
        .collect();
    if usable.is_empty() {
        return ScorecardSummary::Unscored {
            rows: matching.len(),
        };
    }

    ScorecardSummary::Average {
        value: usable.iter().sum::<f64>() / usable.len() as f64,
        rows: matching.len(),
    }
}

/// Alert decision table
pub fn decide_alert(tier: RiskTier, scorecard: &ScorecardSummary, target: f64) -> GapAlertKind {
    if matches!(scorecard, ScorecardSummary::NoData) {
        return GapAlertKind::NoData;
    }
    let on_target = scorecard.average().map(|avg| avg >= target);

    match (tier, on_target) {
        (RiskTier::High, Some(true)) => GapAlertKind::Monitor,
        (RiskTier::High, _) => GapAlertKind::Urgent,
        (RiskTier::Moderate, Some(true)) => GapAlertKind::Monitor,
        (RiskTier::Moderate, _) => GapAlertKind::Attention,
        (RiskTier::Low, Some(true)) => GapAlertKind::Strong,
        (RiskTier::Low, Some(false)) => GapAlertKind::Improve,
        (RiskTier::Low, None) => GapAlertKind::NoData,
    }
}

fn top_tags(cited: &[&ResolvedCitation<'_>], limit: usize) -> Vec<TagCount> {
    let mut counts: BTreeMap<&str, (usize, &CitationDefinition)> = BTreeMap::new();
    for resolved in cited {
        counts
            .entry(resolved.definition.tag.as_str())
            .or_insert((0, &resolved.definition))
            .0 += 1;
    }

    let mut tags: Vec<TagCount> = counts
        .into_values()
        .map(|(count, definition)| TagCount {
            definition: definition.clone(),
            count,
        })
        .collect();
    tags.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.definition.tag.cmp(&b.definition.tag))
    });
    tags.truncate(limit);
    tags
}

fn classify_resolved(
    system: &ClinicalSystem,
    citations: &[ResolvedCitation<'_>],
    scorecards: &[ScorecardRow],
    thresholds: &GapThresholds,
) -> GapAlert {
    let cited: Vec<&ResolvedCitation<'_>> = citations
        .iter()
        .filter(|r| r.code.as_deref().is_some_and(|code| system.covers(code)))
        .collect();
    let citing_facilities = cited
        .iter()
        .map(|r| r.citation.facility_id.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let tier = external_tier(citing_facilities, thresholds);
    let scorecard = summarize_scorecards(system, scorecards);
    let alert = decide_alert(tier, &scorecard, thresholds.target_score);

    tracing::debug!(
        system = system.id,
        tier = tier.as_str(),
        citing_facilities,
        alert = alert.as_str(),
        "classified clinical system"
    );

    GapAlert {
        system_id: system.id.to_string(),
        system_name: system.name.to_string(),
        tier,
        citing_facilities,
        citation_count: cited.len(),
        scorecard,
        scorecard_average: scorecard.average(),
        alert,
        top_tags: top_tags(&cited, thresholds.top_tags),
    }
}

/// Classify one system with the built-in registry and default thresholds
pub fn classify(
    system: &ClinicalSystem,
    citations: &[CohortCitation],
    scorecards: &[ScorecardRow],
) -> GapAlert {
    classify_with(
        system,
        citations,
        scorecards,
        Registry::builtin(),
        &GapThresholds::default(),
    )
}

/// Classify one system with an explicit registry and thresholds
pub fn classify_with(
    system: &ClinicalSystem,
    citations: &[CohortCitation],
    scorecards: &[ScorecardRow],
    registry: &Registry,
    thresholds: &GapThresholds,
) -> GapAlert {
    let resolved = resolve_citations(citations, registry);
    classify_resolved(system, &resolved, scorecards, thresholds)
}

/// Classify every catalog system, most severe first, then by system id
pub fn classify_all(
    citations: &[CohortCitation],
    scorecards: &[ScorecardRow],
    registry: &Registry,
    thresholds: &GapThresholds,
) -> Vec<GapAlert> {
    let resolved = resolve_citations(citations, registry);
    let mut alerts: Vec<GapAlert> = CLINICAL_SYSTEMS
        .iter()
        .map(|system| classify_resolved(system, &resolved, scorecards, thresholds))
        .collect();
    alerts.sort_by(|a, b| a.alert.cmp(&b.alert).then_with(|| a.system_id.cmp(&b.system_id)));
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::find_system;

    fn citation(facility: &str, tag: &str) -> CohortCitation {
        CohortCitation {
            facility_id: facility.to_string(),
            tag: tag.to_string(),
            severity: None,
            corrected: None,
            survey_date: None,
        }
    }

    fn scorecard(system: &str, percentage: Option<LenientValue>) -> ScorecardRow {
        ScorecardRow {
            facility_id: None,
            system: system.to_string(),
            percentage,
            period: Some("2024-Q1".to_string()),
        }
    }

    fn infection_control() -> &'static ClinicalSystem {
        find_system("infection_control").unwrap()
    }

    #[test]
    fn test_decision_table() {
        let avg = |value| ScorecardSummary::Average { value, rows: 1 };
        let unscored = ScorecardSummary::Unscored { rows: 2 };
        let t = 75.0;

        assert_eq!(decide_alert(RiskTier::High, &avg(60.0), t), GapAlertKind::Urgent);
        assert_eq!(decide_alert(RiskTier::High, &unscored, t), GapAlertKind::Urgent);
        assert_eq!(decide_alert(RiskTier::High, &avg(75.0), t), GapAlertKind::Monitor);
        assert_eq!(decide_alert(RiskTier::Moderate, &avg(74.9), t), GapAlertKind::Attention);
        assert_eq!(decide_alert(RiskTier::Moderate, &unscored, t), GapAlertKind::Attention);
        assert_eq!(decide_alert(RiskTier::Moderate, &avg(80.0), t), GapAlertKind::Monitor);
        assert_eq!(decide_alert(RiskTier::Low, &avg(50.0), t), GapAlertKind::Improve);
        assert_eq!(decide_alert(RiskTier::Low, &avg(90.0), t), GapAlertKind::Strong);
        assert_eq!(decide_alert(RiskTier::Low, &unscored, t), GapAlertKind::NoData);
    }

    #[test]
    fn test_no_rows_overrides_tier() {
        for tier in [RiskTier::High, RiskTier::Moderate, RiskTier::Low] {
            assert_eq!(
                decide_alert(tier, &ScorecardSummary::NoData, 75.0),
                GapAlertKind::NoData
            );
        }
    }

    #[test]
    fn test_tier_counts_distinct_facilities() {
        let thresholds = GapThresholds::default();
        assert_eq!(external_tier(0, &thresholds), RiskTier::Low);
        assert_eq!(external_tier(1, &thresholds), RiskTier::Moderate);
        assert_eq!(external_tier(2, &thresholds), RiskTier::Moderate);
        assert_eq!(external_tier(3, &thresholds), RiskTier::High);

        // Five citations, but only two facilities
        let citations = vec![
            citation("A", "F880"),
            citation("A", "F-0880"),
            citation("A", "881"),
            citation("B", "f880"),
            citation("B", "F0882"),
        ];
        let alert = classify(infection_control(), &citations, &[]);
        assert_eq!(alert.citing_facilities, 2);
        assert_eq!(alert.citation_count, 5);
        assert_eq!(alert.tier, RiskTier::Moderate);
        assert_eq!(alert.alert, GapAlertKind::NoData);
    }

    #[test]
    fn test_high_tier_with_unscored_rows_is_urgent() {
        let citations = vec![
            citation("A", "F880"),
            citation("B", "F880"),
            citation("C", "F880"),
        ];
        let rows = vec![scorecard("Infection Control", None)];
        let alert = classify(infection_control(), &citations, &rows);
        assert_eq!(alert.tier, RiskTier::High);
        assert_eq!(alert.scorecard, ScorecardSummary::Unscored { rows: 1 });
        assert_eq!(alert.scorecard_average, None);
        assert_eq!(alert.alert, GapAlertKind::Urgent);
    }

    #[test]
    fn test_low_tier_strong_performance() {
        let rows = vec![
            scorecard("infection_control", Some(LenientValue::from(88.0))),
            scorecard("INFECTION CONTROL", Some(LenientValue::from("92%"))),
            scorecard("Falls & Accidents", Some(LenientValue::from(10.0))),
        ];
        let alert = classify(infection_control(), &[citation("A", "F689")], &rows);
        assert_eq!(alert.tier, RiskTier::Low);
        assert_eq!(alert.scorecard_average, Some(90.0));
        assert_eq!(alert.alert, GapAlertKind::Strong);
    }

    #[test]
    fn test_unusable_percentages_are_skipped() {
        let rows = vec![
            scorecard("infection_control", Some(LenientValue::from("n/a"))),
            scorecard("infection_control", Some(LenientValue::from(140.0))),
            scorecard("infection_control", Some(LenientValue::from(60.0))),
        ];
        let summary = summarize_scorecards(infection_control(), &rows);
        assert_eq!(summary, ScorecardSummary::Average { value: 60.0, rows: 3 });
    }

    #[test]
    fn test_top_tags_order_and_limit() {
        let citations = vec![
            citation("A", "F882"),
            citation("B", "F880"),
            citation("C", "F880"),
            citation("A", "F881"),
            citation("B", "F881"),
            citation("C", "F883"),
        ];
        let thresholds = GapThresholds {
            top_tags: 3,
            ..Default::default()
        };
        let alert = classify_with(
            infection_control(),
            &citations,
            &[],
            Registry::builtin(),
            &thresholds,
        );
        let tags: Vec<(&str, usize)> = alert
            .top_tags
            .iter()
            .map(|t| (t.definition.tag.as_str(), t.count))
            .collect();
        assert_eq!(tags, vec![("F-0880", 2), ("F-0881", 2), ("F-0882", 1)]);
    }

    #[test]
    fn test_numeric_ids_and_tags_are_accepted() {
        let citations: Vec<CohortCitation> = serde_json::from_str(
            r#"[
                {"facility_id": 15009, "tag": 880, "corrected": "Y"},
                {"facility_id": "15010", "tag": "F-0880", "severity": null},
                {"facility_id": 15011, "tag": 441.0},
                {"facility_id": {"nested": true}, "tag": ["F880"]}
            ]"#,
        )
        .unwrap();
        assert_eq!(citations[0].facility_id, "15009");
        assert_eq!(citations[0].tag, "880");
        assert_eq!(citations[0].corrected, Some(true));
        assert_eq!(citations[2].tag, "441");
        assert_eq!(citations[3].facility_id, "");
        assert_eq!(citations[3].tag, "");

        let scorecards: Vec<ScorecardRow> = serde_json::from_str(
            r#"[{"facility_id": 15009, "system": "infection_control", "percentage": 60, "period": 2024}]"#,
        )
        .unwrap();
        assert_eq!(scorecards[0].period.as_deref(), Some("2024"));

        let alert = classify(infection_control(), &citations, &scorecards);
        assert_eq!(alert.citing_facilities, 3);
        assert_eq!(alert.tier, RiskTier::High);
        assert_eq!(alert.alert, GapAlertKind::Urgent);
    }

    #[test]
    fn test_unknown_tags_do_not_count() {
        let citations = vec![citation("A", "Z9999"), citation("B", ""), citation("C", "??")];
        let alert = classify(infection_control(), &citations, &[]);
        assert_eq!(alert.citing_facilities, 0);
        assert!(alert.top_tags.is_empty());
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = GapThresholds {
            high_min_facilities: 2,
            target_score: 90.0,
            ..Default::default()
        };
        let citations = vec![citation("A", "F689"), citation("B", "F689")];
        let rows = vec![scorecard("falls_accidents", Some(LenientValue::from(85.0)))];
        let alert = classify_with(
            find_system("falls_accidents").unwrap(),
            &citations,
            &rows,
            Registry::builtin(),
            &thresholds,
        );
        assert_eq!(alert.tier, RiskTier::High);
        assert_eq!(alert.alert, GapAlertKind::Urgent);
    }

    #[test]
    fn test_classify_all_orders_by_severity() {
        let citations = vec![
            citation("A", "F689"),
            citation("B", "F689"),
            citation("C", "F689"),
            citation("A", "F880"),
        ];
        let rows = vec![
            scorecard("falls_accidents", Some(LenientValue::from(40.0))),
            scorecard("infection_control", Some(LenientValue::from(50.0))),
            scorecard("food_safety", Some(LenientValue::from(95.0))),
        ];
        let alerts = classify_all(&citations, &rows, Registry::builtin(), &GapThresholds::default());
        assert_eq!(alerts.len(), CLINICAL_SYSTEMS.len());
        assert_eq!(alerts[0].system_id, "falls_accidents");
        assert_eq!(alerts[0].alert, GapAlertKind::Urgent);
        assert_eq!(alerts[1].system_id, "infection_control");
        assert_eq!(alerts[1].alert, GapAlertKind::Attention);
        assert_eq!(alerts.last().unwrap().system_id, "food_safety");
        assert_eq!(alerts.last().unwrap().alert, GapAlertKind::Strong);
        for pair in alerts.windows(2) {
            assert!(pair[0].alert <= pair[1].alert);
        }
    }

    #[test]
    fn test_alert_kind_serialization() {
        let json = serde_json::to_string(&GapAlertKind::NoData).unwrap();
        assert_eq!(json, "\"NO_DATA\"");
        let json = serde_json::to_string(&RiskTier::Moderate).unwrap();
        assert_eq!(json, "\"MODERATE\"");
    }
}
