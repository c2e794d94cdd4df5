//! Configuration file support for Citewatch
//!
//! Loads engine parameters from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.citewatchrc.json` in the working directory
//! 3. `citewatch.config.json` in the working directory
//!
//! All fields are optional. CLI flags take precedence over config file values.

use crate::composite::CompositeWeights;
use crate::gaps::GapThresholds;
use crate::trends::DEFAULT_TREND_WINDOW;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Allowed distance of the composite weight sum from 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Citewatch configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CitewatchConfig {
    /// Category weights for the composite score
    #[serde(default)]
    pub composite_weights: Option<WeightConfig>,

    /// Gap classifier cutoffs
    #[serde(default)]
    pub gap_thresholds: Option<GapThresholdConfig>,

    /// Trailing points used for trend direction (default: 6)
    #[serde(default)]
    pub trend_window: Option<usize>,

    /// Citation registry file replacing the built-in table
    #[serde(default)]
    pub registry: Option<PathBuf>,
}

/// Custom composite weights
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightConfig {
    /// Regulatory weight (default: 0.40)
    pub regulatory: Option<f64>,
    /// Staffing weight (default: 0.35)
    pub staffing: Option<f64>,
    /// Financial weight (default: 0.25)
    pub financial: Option<f64>,
}

/// Custom gap classifier cutoffs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GapThresholdConfig {
    /// Citing facilities for a HIGH tier (default: 3)
    pub high_min_facilities: Option<usize>,
    /// Citing facilities for a MODERATE tier (default: 1)
    pub moderate_min_facilities: Option<usize>,
    /// Scorecard target percentage (default: 75)
    pub target_score: Option<f64>,
    /// Most-cited tags reported per system (default: 5)
    pub top_tags: Option<usize>,
}

/// Resolved configuration ready for the engine
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    pub weights: CompositeWeights,
    pub gap_thresholds: GapThresholds,
    pub trend_window: usize,
    /// Registry file, resolved against the config file's directory
    pub registry_path: Option<PathBuf>,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl WeightConfig {
    fn resolve(&self) -> CompositeWeights {
        let defaults = CompositeWeights::default();
        CompositeWeights {
            regulatory: self.regulatory.unwrap_or(defaults.regulatory),
            staffing: self.staffing.unwrap_or(defaults.staffing),
            financial: self.financial.unwrap_or(defaults.financial),
        }
    }
}

impl GapThresholdConfig {
    fn resolve(&self) -> GapThresholds {
        let defaults = GapThresholds::default();
        GapThresholds {
            high_min_facilities: self
                .high_min_facilities
                .unwrap_or(defaults.high_min_facilities),
            moderate_min_facilities: self
                .moderate_min_facilities
                .unwrap_or(defaults.moderate_min_facilities),
            target_score: self.target_score.unwrap_or(defaults.target_score),
            top_tags: self.top_tags.unwrap_or(defaults.top_tags),
        }
    }
}

impl CitewatchConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        // Weights are non-negative and sum to 1
        if let Some(ref w) = self.composite_weights {
            let resolved = w.resolve();
            for (name, v) in [
                ("regulatory", resolved.regulatory),
                ("staffing", resolved.staffing),
                ("financial", resolved.financial),
            ] {
                if !v.is_finite() || v < 0.0 {
                    anyhow::bail!("composite_weights.{} must be non-negative (got {})", name, v);
                }
            }
            let sum = resolved.sum();
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                anyhow::bail!(
                    "composite_weights must sum to 1.0 (got {}: regulatory {} + staffing {} + financial {})",
                    sum,
                    resolved.regulatory,
                    resolved.staffing,
                    resolved.financial
                );
            }
        }

        // Tier cutoffs are positive and ordered
        if let Some(ref g) = self.gap_thresholds {
            let resolved = g.resolve();
            if resolved.moderate_min_facilities == 0 {
                anyhow::bail!("gap_thresholds.moderate_min_facilities must be at least 1");
            }
            if resolved.moderate_min_facilities >= resolved.high_min_facilities {
                anyhow::bail!(
                    "gap_thresholds.moderate_min_facilities ({}) must be less than gap_thresholds.high_min_facilities ({})",
                    resolved.moderate_min_facilities,
                    resolved.high_min_facilities
                );
            }
            if !(0.0..=100.0).contains(&resolved.target_score) {
                anyhow::bail!(
                    "gap_thresholds.target_score must be between 0 and 100 (got {})",
                    resolved.target_score
                );
            }
            if resolved.top_tags == 0 {
                anyhow::bail!("gap_thresholds.top_tags must be at least 1");
            }
        }

        if let Some(window) = self.trend_window {
            if window < 2 {
                anyhow::bail!("trend_window must be at least 2 (got {})", window);
            }
        }

        Ok(())
    }

    /// Resolve config into the form the engine consumes
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        Ok(ResolvedConfig {
            weights: self
                .composite_weights
                .as_ref()
                .map(WeightConfig::resolve)
                .unwrap_or_default(),
            gap_thresholds: self
                .gap_thresholds
                .as_ref()
                .map(GapThresholdConfig::resolve)
                .unwrap_or_default(),
            trend_window: self.trend_window.unwrap_or(DEFAULT_TREND_WINDOW),
            registry_path: self.registry.clone(),
            config_path: None,
        })
    }
}

impl ResolvedConfig {
    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Result<Self> {
        CitewatchConfig::default().resolve()
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize resolved config to JSON")
    }
}

/// Discover and load a config file from a directory
///
/// Search order:
/// 1. `.citewatchrc.json`
/// 2. `citewatch.config.json`
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(root: &Path) -> Result<Option<(CitewatchConfig, PathBuf)>> {
    for name in [".citewatchrc.json", "citewatch.config.json"] {
        let path = root.join(name);
        if path.exists() {
            let config = load_config_file(&path)?;
            return Ok(Some((config, path)));
        }
    }
    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<CitewatchConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: CitewatchConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config in: {}", path.display()))?;

    Ok(config)
}

/// Load and resolve config
///
/// If `config_path` is provided, loads from that file.
/// Otherwise, discovers config in `root`.
/// Returns default config if nothing is found.
pub fn load_and_resolve(root: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let (config, source_path) = if let Some(path) = config_path {
        let config = load_config_file(path)?;
        (config, Some(path.to_path_buf()))
    } else {
        match discover_config(root)? {
            Some((config, path)) => (config, Some(path)),
            None => (CitewatchConfig::default(), None),
        }
    };

    let mut resolved = config.resolve()?;
    if let (Some(registry), Some(source)) = (&resolved.registry_path, &source_path) {
        if registry.is_relative() {
            let base = source.parent().unwrap_or(root);
            resolved.registry_path = Some(base.join(registry));
        }
    }
    match &source_path {
        Some(path) => tracing::info!(path = %path.display(), "loaded config"),
        None => tracing::debug!("no config file found, using defaults"),
    }
    resolved.config_path = source_path;
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config_is_valid() {
        let config = CitewatchConfig::default();
        config.validate().expect("default config should be valid");
        let resolved = config.resolve().expect("default config should resolve");
        assert_eq!(resolved.weights, CompositeWeights::default());
        assert_eq!(resolved.gap_thresholds, GapThresholds::default());
        assert_eq!(resolved.trend_window, 6);
        assert!(resolved.registry_path.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "composite_weights": {"regulatory": 0.5, "staffing": 0.3, "financial": 0.2},
            "gap_thresholds": {
                "high_min_facilities": 4,
                "moderate_min_facilities": 2,
                "target_score": 80,
                "top_tags": 3
            },
            "trend_window": 8,
            "registry": "/data/registry.json"
        }"#;
        let config: CitewatchConfig = serde_json::from_str(json).unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.weights.regulatory, 0.5);
        assert_eq!(resolved.gap_thresholds.high_min_facilities, 4);
        assert_eq!(resolved.gap_thresholds.target_score, 80.0);
        assert_eq!(resolved.gap_thresholds.top_tags, 3);
        assert_eq!(resolved.trend_window, 8);
        assert_eq!(
            resolved.registry_path,
            Some(PathBuf::from("/data/registry.json"))
        );
    }

    #[test]
    fn test_reject_unknown_fields() {
        let json = r#"{"weights": {"cc": 1.0}}"#;
        let result: Result<CitewatchConfig, _> = serde_json::from_str(json);
        assert!(result.is_err(), "unknown fields should be rejected");
    }

    #[test]
    fn test_reject_weights_not_summing_to_one() {
        let json = r#"{"composite_weights": {"regulatory": 0.5}}"#;
        let config: CitewatchConfig = serde_json::from_str(json).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sum to 1.0"));
    }

    #[test]
    fn test_reject_negative_weight() {
        let json = r#"{"composite_weights": {"regulatory": -0.2, "staffing": 0.7, "financial": 0.5}}"#;
        let config: CitewatchConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_weight_sum_tolerance() {
        let json = r#"{"composite_weights": {"regulatory": 0.3333333, "staffing": 0.3333333, "financial": 0.3333334}}"#;
        let config: CitewatchConfig = serde_json::from_str(json).unwrap();
        config.validate().unwrap();
    }

    #[test]
    fn test_reject_unordered_tier_thresholds() {
        let json = r#"{"gap_thresholds": {"high_min_facilities": 2, "moderate_min_facilities": 2}}"#;
        let config: CitewatchConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());

        let json = r#"{"gap_thresholds": {"moderate_min_facilities": 0}}"#;
        let config: CitewatchConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reject_out_of_range_target() {
        let json = r#"{"gap_thresholds": {"target_score": 120}}"#;
        let config: CitewatchConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reject_short_trend_window() {
        let json = r#"{"trend_window": 1}"#;
        let config: CitewatchConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_gap_thresholds_use_defaults_for_rest() {
        let json = r#"{"gap_thresholds": {"target_score": 70}}"#;
        let config: CitewatchConfig = serde_json::from_str(json).unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.gap_thresholds.target_score, 70.0);
        assert_eq!(resolved.gap_thresholds.high_min_facilities, 3); // default
        assert_eq!(resolved.gap_thresholds.top_tags, 5); // default
    }

    #[test]
    fn test_discover_priority_order() {
        let dir = tempfile::tempdir().unwrap();

        // Create both config files - .citewatchrc.json should win
        fs::write(dir.path().join(".citewatchrc.json"), r#"{"trend_window": 4}"#).unwrap();
        fs::write(
            dir.path().join("citewatch.config.json"),
            r#"{"trend_window": 10}"#,
        )
        .unwrap();

        let (config, path) = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.trend_window, Some(4));
        assert_eq!(path, dir.path().join(".citewatchrc.json"));
    }

    #[test]
    fn test_discover_config_json() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("citewatch.config.json");
        fs::write(&config_path, r#"{"trend_window": 3}"#).unwrap();

        let (config, path) = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.trend_window, Some(3));
        assert_eq!(path, config_path);
    }

    #[test]
    fn test_no_config_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_and_resolve_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = load_and_resolve(dir.path(), None).unwrap();
        assert!(resolved.config_path.is_none());
        assert_eq!(resolved.trend_window, DEFAULT_TREND_WINDOW);
    }

    #[test]
    fn test_load_and_resolve_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("custom.json");
        fs::write(&config_path, r#"{"registry": "tags/registry.json"}"#).unwrap();

        let resolved = load_and_resolve(dir.path(), Some(&config_path)).unwrap();
        assert_eq!(resolved.config_path, Some(config_path));
        assert_eq!(
            resolved.registry_path,
            Some(dir.path().join("tags/registry.json"))
        );
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(".citewatchrc.json");
        fs::write(&config_path, r#"{"trend_window": 0}"#).unwrap();

        let err = load_and_resolve(dir.path(), None).unwrap_err();
        assert!(format!("{:#}", err).contains(".citewatchrc.json"));
    }
}
