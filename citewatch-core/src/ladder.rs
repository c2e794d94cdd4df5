//! Threshold ladders
//!
//! Each sub-factor's point award is a hand-tuned step function: an ordered
//! list of (threshold, points) rungs evaluated top-down, first match wins.
//!
//! Global invariants enforced:
//! - Comparisons are strict; a value equal to a threshold does not clear it
//! - No interpolation between rungs
//! - Values that clear no rung (including NaN) award zero points

use serde::{Deserialize, Serialize};

/// Direction a value must cross a rung's threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cutoff {
    /// `value > threshold` (more is riskier)
    Above,
    /// `value < threshold` (less is riskier)
    Below,
}

/// One step of a ladder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rung {
    pub threshold: f64,
    pub points: u32,
}

impl Rung {
    pub const fn new(threshold: f64, points: u32) -> Self {
        Rung { threshold, points }
    }
}

/// Ordered rungs plus the comparison they use
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ladder {
    pub cutoff: Cutoff,
    pub rungs: &'static [Rung],
}

impl Ladder {
    /// Rungs listed from the highest threshold down
    pub const fn above(rungs: &'static [Rung]) -> Self {
        Ladder {
            cutoff: Cutoff::Above,
            rungs,
        }
    }

    /// Rungs listed from the lowest threshold up
    pub const fn below(rungs: &'static [Rung]) -> Self {
        Ladder {
            cutoff: Cutoff::Below,
            rungs,
        }
    }

    /// Points for `value`: the first rung it clears, or zero
    pub fn award(&self, value: f64) -> u32 {
        self.rungs
            .iter()
            .find(|rung| match self.cutoff {
                Cutoff::Above => value > rung.threshold,
                Cutoff::Below => value < rung.threshold,
            })
            .map(|rung| rung.points)
            .unwrap_or(0)
    }

    /// Largest award this ladder can produce
    pub fn max_points(&self) -> u32 {
        self.rungs.iter().map(|rung| rung.points).max().unwrap_or(0)
    }
}
