//! Citewatch core library - risk scoring and gap analysis for skilled-nursing facilities

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Engine functions are pure and total; only file loading can fail
// - Missing or malformed inputs fall back to documented defaults
// - "Not applicable" and "no data" are never conflated with zero
// - Reference tables are immutable after initialization
// - Identical input yields byte-for-byte identical output

pub mod benchmark;
pub mod composite;
pub mod config;
pub mod gaps;
pub mod ladder;
pub mod metrics;
pub mod profile;
pub mod registry;
pub mod report;
pub mod scoring;
pub mod systems;
pub mod trends;

pub use benchmark::{compare, compare_facility, Comparison, PeerBenchmarks};
pub use composite::{composite, CompositeScore, CompositeWeights, RiskLabel};
pub use config::ResolvedConfig;
pub use gaps::{classify, classify_all, CohortCitation, GapAlert, ScorecardRow};
pub use metrics::FacilityMetrics;
pub use profile::{evaluate, evaluate_batch, FacilityRiskProfile};
pub use registry::{resolve, CitationDefinition, Registry};
pub use report::{render_json, sort_profiles};
pub use scoring::{score_all, CategoryScore};
pub use trends::{trend, TrendAnalysis};
