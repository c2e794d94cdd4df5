//! Property tests for the engine's totality and bounds guarantees

use citewatch_core::composite::{assign_label, composite, composite_with_weights};
use citewatch_core::metrics::LenientValue;
use citewatch_core::registry::{normalize_code, resolve, resolve_detailed, TagResolution};
use citewatch_core::scoring::score_all;
use citewatch_core::trends::{direction_of, TrendDirection};
use citewatch_core::{CompositeWeights, FacilityMetrics};
use proptest::prelude::*;

const NUMERIC_FIELDS: &[&str] = &[
    "total_deficiencies",
    "total_penalty_amount",
    "health_inspection_rating",
    "overall_rating",
    "rn_turnover",
    "total_nurse_turnover",
    "staffing_rating",
    "administrator_tenure_days",
    "medicaid_percentage",
    "occupancy_rate",
    "quality_rating",
    "vbp_adjustment_factor",
];

fn lenient_value() -> impl Strategy<Value = LenientValue> {
    prop_oneof![
        any::<f64>().prop_map(LenientValue::Number),
        any::<bool>().prop_map(LenientValue::Flag),
        ".*".prop_map(LenientValue::Text),
        (-1.0e7f64..1.0e7).prop_map(|n| LenientValue::Text(format!("{:.2}", n))),
    ]
}

fn facility() -> impl Strategy<Value = FacilityMetrics> {
    proptest::collection::vec(
        (0..NUMERIC_FIELDS.len(), lenient_value()),
        0..NUMERIC_FIELDS.len(),
    )
    .prop_map(|fields| {
        fields
            .into_iter()
            .fold(FacilityMetrics::default(), |metrics, (idx, value)| {
                metrics.with(NUMERIC_FIELDS[idx], value)
            })
    })
}

proptest! {
    #[test]
    fn resolve_populates_every_field(s in ".*") {
        let definition = resolve(&s);
        prop_assert!(!definition.name.is_empty());
        prop_assert!(!definition.description.is_empty());
        prop_assert!(!definition.category.is_empty());

        match resolve_detailed(&s) {
            TagResolution::Known(known) => {
                prop_assert!(!known.tag.is_empty());
                prop_assert_eq!(known.tag.chars().next().map(String::from), Some(known.prefix.clone()));
            }
            TagResolution::Unknown(unknown) => {
                prop_assert_eq!(&unknown.tag, &s);
                let first = s.chars().find(char::is_ascii_alphanumeric);
                match first {
                    Some(c) if c.is_ascii_alphabetic() => {
                        prop_assert_eq!(unknown.prefix, c.to_ascii_uppercase().to_string());
                    }
                    _ => prop_assert!(unknown.prefix.is_empty()),
                }
            }
            TagResolution::Empty(empty) => {
                prop_assert!(s.trim().is_empty());
                prop_assert!(empty.tag.is_empty());
                prop_assert!(empty.prefix.is_empty());
            }
        }
    }

    #[test]
    fn unknown_tags_keep_raw_input(s in "[G-JL-Z][0-9]{1,5}") {
        let definition = resolve(&s);
        prop_assert_eq!(&definition.tag, &s);
        prop_assert_eq!(definition.prefix, s[..1].to_string());
    }

    #[test]
    fn resolve_is_idempotent_for_known_tags(s in "[fFeEkK]?-? ?0{0,2}[0-9]{1,4}") {
        if let TagResolution::Known(first) = resolve_detailed(&s) {
            let again = resolve(&first.tag);
            prop_assert_eq!(again, first);
        }
    }

    #[test]
    fn normalized_code_is_letter_and_digits(s in ".*") {
        if let Some(code) = normalize_code(&s) {
            let mut chars = code.chars();
            prop_assert!(chars.next().is_some_and(|c| c.is_ascii_uppercase()));
            let digits: Vec<char> = chars.collect();
            prop_assert!(digits.len() >= 4);
            prop_assert!(digits.iter().all(char::is_ascii_digit));
        }
    }

    #[test]
    fn category_scores_stay_in_bounds(metrics in facility()) {
        let scores = score_all(&metrics);
        for category in [&scores.regulatory, &scores.staffing, &scores.financial] {
            prop_assert!(category.score <= 100);
            let factor_sum: u32 = category.factors.iter().map(|f| f.points).sum();
            prop_assert_eq!(category.score, factor_sum.min(100));
            for factor in &category.factors {
                prop_assert!(factor.points <= factor.max_points);
            }
        }
    }

    #[test]
    fn composite_stays_in_bounds(r in 0u32..=100, s in 0u32..=100, f in 0u32..=100) {
        let result = composite(r, s, f);
        prop_assert!(result.score <= 100);
        prop_assert_eq!(result.label, assign_label(result.score));
        let lo = r.min(s).min(f);
        let hi = r.max(s).max(f);
        prop_assert!(result.score >= lo && result.score <= hi);
    }

    #[test]
    fn composite_is_monotonic_in_each_category(
        r in 0u32..100,
        s in 0u32..=100,
        f in 0u32..=100,
    ) {
        let weights = CompositeWeights::default();
        let base = composite_with_weights(r, s, f, &weights);
        let bumped = composite_with_weights(r + 1, s, f, &weights);
        prop_assert!(bumped.score >= base.score);
    }

    #[test]
    fn direction_of_constant_series_is_stable(value in -1.0e6f64..1.0e6, len in 2usize..20) {
        let values = vec![value; len];
        prop_assert_eq!(direction_of(&values, 6), TrendDirection::Stable);
    }
}
