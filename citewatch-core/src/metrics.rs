//! Facility snapshot records and lenient numeric values
//!
//! Global invariants enforced:
//! - Reading a field never fails; unusable input is treated as absent
//! - Field lookup by name is the single place scorers touch record fields
//! - A defaulted value is always distinguishable from a reported one

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A numeric (or flag) field exactly as the data layer supplied it.
///
/// Deserialization of this type never fails: numbers, strings, and booleans
/// are kept, anything else lands in `Other` and reads as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LenientValue {
    Number(f64),
    Flag(bool),
    Text(String),
    Other(serde_json::Value),
}

impl LenientValue {
    /// Numeric reading of the value, `None` when it is not numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            LenientValue::Number(n) if n.is_finite() => Some(*n),
            LenientValue::Number(_) => None,
            LenientValue::Flag(b) => Some(if *b { 1.0 } else { 0.0 }),
            LenientValue::Text(s) => parse_numeric_text(s),
            LenientValue::Other(_) => None,
        }
    }

    /// Boolean reading of the value, `None` when it cannot be interpreted.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            LenientValue::Flag(b) => Some(*b),
            LenientValue::Number(n) if n.is_finite() => Some(*n != 0.0),
            LenientValue::Number(_) => None,
            LenientValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "y" | "sff" | "1" => Some(true),
                "false" | "no" | "n" | "0" | "" => Some(false),
                _ => None,
            },
            LenientValue::Other(_) => None,
        }
    }
}

impl From<f64> for LenientValue {
    fn from(value: f64) -> Self {
        LenientValue::Number(value)
    }
}

impl From<bool> for LenientValue {
    fn from(value: bool) -> Self {
        LenientValue::Flag(value)
    }
}

impl From<&str> for LenientValue {
    fn from(value: &str) -> Self {
        LenientValue::Text(value.to_string())
    }
}

/// Parse a string-encoded number, tolerating currency, grouping and percent marks.
fn parse_numeric_text(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Text reading of an identifier-like JSON value.
///
/// Strings are kept, numbers are rendered without a fractional part when
/// they have none, anything else is absent.
fn text_of(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(|f| {
                    if f.fract() == 0.0 && f.abs() < 1e15 {
                        format!("{}", f as i64)
                    } else {
                        f.to_string()
                    }
                })
            }
        }
        _ => None,
    }
}

/// `deserialize_with` helper for optional text fields that may arrive as numbers
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(text_of)
}

/// Like [`lenient_text`], with unusable values read as an empty string
pub(crate) fn lenient_text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_text(deserializer).map(Option::unwrap_or_default)
}

/// `deserialize_with` helper for optional flags in any spelling [`LenientValue`] accepts
pub(crate) fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    LenientValue::deserialize(deserializer).map(|value| value.as_flag())
}

/// Where an observed value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Primary,
    Secondary,
    Default,
}

/// A value read from a record together with its provenance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observed<T> {
    pub value: T,
    pub source: ValueSource,
}

impl<T> Observed<T> {
    pub fn is_defaulted(&self) -> bool {
        self.source == ValueSource::Default
    }
}

/// Operational and regulatory attributes of a facility at one point in time.
///
/// Every metric is optional and lenient; unknown keys in the source document
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilityMetrics {
    #[serde(deserialize_with = "lenient_text")]
    pub facility_id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub facility_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub state: Option<String>,
    /// ISO date (`YYYY-MM-DD`); a trailing time component is ignored
    #[serde(deserialize_with = "lenient_text")]
    pub snapshot_date: Option<String>,

    pub overall_rating: Option<LenientValue>,
    pub health_inspection_rating: Option<LenientValue>,
    pub quality_rating: Option<LenientValue>,
    pub qm_rating: Option<LenientValue>,
    pub staffing_rating: Option<LenientValue>,
    pub rn_staffing_rating: Option<LenientValue>,

    pub total_deficiencies: Option<LenientValue>,
    pub deficiency_count: Option<LenientValue>,
    pub total_penalty_amount: Option<LenientValue>,
    pub total_fines: Option<LenientValue>,
    pub special_focus_facility: Option<LenientValue>,
    pub sff_status: Option<LenientValue>,

    pub rn_turnover: Option<LenientValue>,
    pub registered_nurse_turnover: Option<LenientValue>,
    pub total_nurse_turnover: Option<LenientValue>,
    pub nursing_staff_turnover: Option<LenientValue>,
    pub administrator_tenure_days: Option<LenientValue>,
    pub administrator_days_in_role: Option<LenientValue>,

    pub medicaid_percentage: Option<LenientValue>,
    pub medicaid_pct: Option<LenientValue>,
    pub occupancy_rate: Option<LenientValue>,
    pub occupancy_pct: Option<LenientValue>,
    pub vbp_adjustment_factor: Option<LenientValue>,
    pub vbp_incentive_multiplier: Option<LenientValue>,
}

impl FacilityMetrics {
    fn slot(&self, name: &str) -> Option<&Option<LenientValue>> {
        let slot = match name {
            "overall_rating" => &self.overall_rating,
            "health_inspection_rating" => &self.health_inspection_rating,
            "quality_rating" => &self.quality_rating,
            "qm_rating" => &self.qm_rating,
            "staffing_rating" => &self.staffing_rating,
            "rn_staffing_rating" => &self.rn_staffing_rating,
            "total_deficiencies" => &self.total_deficiencies,
            "deficiency_count" => &self.deficiency_count,
            "total_penalty_amount" => &self.total_penalty_amount,
            "total_fines" => &self.total_fines,
            "special_focus_facility" => &self.special_focus_facility,
            "sff_status" => &self.sff_status,
            "rn_turnover" => &self.rn_turnover,
            "registered_nurse_turnover" => &self.registered_nurse_turnover,
            "total_nurse_turnover" => &self.total_nurse_turnover,
            "nursing_staff_turnover" => &self.nursing_staff_turnover,
            "administrator_tenure_days" => &self.administrator_tenure_days,
            "administrator_days_in_role" => &self.administrator_days_in_role,
            "medicaid_percentage" => &self.medicaid_percentage,
            "medicaid_pct" => &self.medicaid_pct,
            "occupancy_rate" => &self.occupancy_rate,
            "occupancy_pct" => &self.occupancy_pct,
            "vbp_adjustment_factor" => &self.vbp_adjustment_factor,
            "vbp_incentive_multiplier" => &self.vbp_incentive_multiplier,
            _ => return None,
        };
        Some(slot)
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Option<LenientValue>> {
        let slot = match name {
            "overall_rating" => &mut self.overall_rating,
            "health_inspection_rating" => &mut self.health_inspection_rating,
            "quality_rating" => &mut self.quality_rating,
            "qm_rating" => &mut self.qm_rating,
            "staffing_rating" => &mut self.staffing_rating,
            "rn_staffing_rating" => &mut self.rn_staffing_rating,
            "total_deficiencies" => &mut self.total_deficiencies,
            "deficiency_count" => &mut self.deficiency_count,
            "total_penalty_amount" => &mut self.total_penalty_amount,
            "total_fines" => &mut self.total_fines,
            "special_focus_facility" => &mut self.special_focus_facility,
            "sff_status" => &mut self.sff_status,
            "rn_turnover" => &mut self.rn_turnover,
            "registered_nurse_turnover" => &mut self.registered_nurse_turnover,
            "total_nurse_turnover" => &mut self.total_nurse_turnover,
            "nursing_staff_turnover" => &mut self.nursing_staff_turnover,
            "administrator_tenure_days" => &mut self.administrator_tenure_days,
            "administrator_days_in_role" => &mut self.administrator_days_in_role,
            "medicaid_percentage" => &mut self.medicaid_percentage,
            "medicaid_pct" => &mut self.medicaid_pct,
            "occupancy_rate" => &mut self.occupancy_rate,
            "occupancy_pct" => &mut self.occupancy_pct,
            "vbp_adjustment_factor" => &mut self.vbp_adjustment_factor,
            "vbp_incentive_multiplier" => &mut self.vbp_incentive_multiplier,
            _ => return None,
        };
        Some(slot)
    }

    /// Raw field by name; `None` for unknown names and missing keys.
    pub fn field(&self, name: &str) -> Option<&LenientValue> {
        self.slot(name).and_then(Option::as_ref)
    }

    /// Numeric reading of a field by name.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.field(name).and_then(LenientValue::as_number)
    }

    /// Builder-style setter, mostly for callers assembling records in code.
    /// Unknown field names are ignored.
    pub fn with(mut self, name: &str, value: impl Into<LenientValue>) -> Self {
        if let Some(slot) = self.slot_mut(name) {
            *slot = Some(value.into());
        }
        self
    }

    /// Read a number from `primary`, then `secondary`, then fall back to `default`.
    pub fn read_number(&self, primary: &str, secondary: &str, default: f64) -> Observed<f64> {
        if let Some(value) = self.number(primary) {
            return Observed {
                value,
                source: ValueSource::Primary,
            };
        }
        if let Some(value) = self.number(secondary) {
            return Observed {
                value,
                source: ValueSource::Secondary,
            };
        }
        Observed {
            value: default,
            source: ValueSource::Default,
        }
    }

    /// Read a flag from `primary`, then `secondary`, then fall back to `default`.
    pub fn read_flag(&self, primary: &str, secondary: &str, default: bool) -> Observed<bool> {
        if let Some(value) = self.field(primary).and_then(LenientValue::as_flag) {
            return Observed {
                value,
                source: ValueSource::Primary,
            };
        }
        if let Some(value) = self.field(secondary).and_then(LenientValue::as_flag) {
            return Observed {
                value,
                source: ValueSource::Secondary,
            };
        }
        Observed {
            value: default,
            source: ValueSource::Default,
        }
    }

    /// Parsed snapshot date, if present and well-formed
    pub fn snapshot_date(&self) -> Option<NaiveDate> {
        let raw = self.snapshot_date.as_deref()?.trim();
        let date_part = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_strings_are_accepted() {
        assert_eq!(LenientValue::from("12").as_number(), Some(12.0));
        assert_eq!(LenientValue::from(" 45.5 ").as_number(), Some(45.5));
        assert_eq!(LenientValue::from("$120,000").as_number(), Some(120_000.0));
        assert_eq!(LenientValue::from("62%").as_number(), Some(62.0));
    }

    #[test]
    fn test_garbage_reads_as_absent() {
        assert_eq!(LenientValue::from("n/a").as_number(), None);
        assert_eq!(LenientValue::from("").as_number(), None);
        assert_eq!(LenientValue::Number(f64::NAN).as_number(), None);
        assert_eq!(
            LenientValue::Other(serde_json::json!([1, 2])).as_number(),
            None
        );
    }

    #[test]
    fn test_flag_readings() {
        assert_eq!(LenientValue::from("Yes").as_flag(), Some(true));
        assert_eq!(LenientValue::from("SFF").as_flag(), Some(true));
        assert_eq!(LenientValue::from("no").as_flag(), Some(false));
        assert_eq!(LenientValue::Number(2.0).as_flag(), Some(true));
        assert_eq!(LenientValue::from("maybe").as_flag(), None);
    }

    #[test]
    fn test_deserialize_mixed_record() {
        let json = r#"{
            "facility_id": "015009",
            "total_deficiencies": "18",
            "total_penalty_amount": 120000,
            "special_focus_facility": true,
            "occupancy_rate": null,
            "medicaid_percentage": {"unexpected": "shape"},
            "some_unrelated_column": 42
        }"#;
        let metrics: FacilityMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.number("total_deficiencies"), Some(18.0));
        assert_eq!(metrics.number("total_penalty_amount"), Some(120_000.0));
        assert_eq!(metrics.number("occupancy_rate"), None);
        assert_eq!(metrics.number("medicaid_percentage"), None);
    }

    #[test]
    fn test_numeric_identifiers_are_read_as_text() {
        let json = r#"{
            "facility_id": 15009,
            "facility_name": ["not", "a", "name"],
            "state": null,
            "total_deficiencies": 4
        }"#;
        let metrics: FacilityMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.facility_id.as_deref(), Some("15009"));
        assert_eq!(metrics.facility_name, None);
        assert_eq!(metrics.state, None);
        assert_eq!(metrics.number("total_deficiencies"), Some(4.0));

        let metrics: FacilityMetrics = serde_json::from_str(r#"{"facility_id": 15009.0}"#).unwrap();
        assert_eq!(metrics.facility_id.as_deref(), Some("15009"));
    }

    #[test]
    fn test_read_number_fallback_chain() {
        let metrics = FacilityMetrics::default().with("deficiency_count", 7.0);
        let observed = metrics.read_number("total_deficiencies", "deficiency_count", 0.0);
        assert_eq!(observed.value, 7.0);
        assert_eq!(observed.source, ValueSource::Secondary);

        let metrics = metrics.with("total_deficiencies", 0.0);
        let observed = metrics.read_number("total_deficiencies", "deficiency_count", 0.0);
        assert_eq!(observed.value, 0.0);
        assert_eq!(observed.source, ValueSource::Primary);

        let observed = FacilityMetrics::default().read_number("medicaid_percentage", "medicaid_pct", 60.0);
        assert_eq!(observed.value, 60.0);
        assert!(observed.is_defaulted());
    }

    #[test]
    fn test_non_numeric_primary_falls_through_to_secondary() {
        let metrics = FacilityMetrics::default()
            .with("occupancy_rate", "unknown")
            .with("occupancy_pct", "78.5");
        let observed = metrics.read_number("occupancy_rate", "occupancy_pct", 85.0);
        assert_eq!(observed.value, 78.5);
        assert_eq!(observed.source, ValueSource::Secondary);
    }

    #[test]
    fn test_snapshot_date_parsing() {
        let mut metrics = FacilityMetrics {
            snapshot_date: Some("2024-03-01T00:00:00Z".to_string()),
            ..Default::default()
        };
        assert_eq!(
            metrics.snapshot_date(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        metrics.snapshot_date = Some("March 2024".to_string());
        assert_eq!(metrics.snapshot_date(), None);
    }
}
