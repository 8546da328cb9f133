use serde::{Deserialize, Serialize};

/// Point award for one session, with the intermediate terms kept for audit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: u64,
    pub base: f64,
    pub bonus: f64,
    pub penalty: f64,
    pub multiplier: f64,
}

impl ScoreBreakdown {
    /// Build a breakdown from its terms, rounding and flooring `raw_total` at 0.
    /// Overflowed terms are stored as `f64::MAX` so the record stays valid JSON.
    pub(crate) fn from_terms(
        raw_total: f64,
        base: f64,
        bonus: f64,
        penalty: f64,
        multiplier: f64,
    ) -> Self {
        Self {
            total: round_non_negative(raw_total),
            base: finite(base),
            bonus: finite(bonus),
            penalty: finite(penalty),
            multiplier: finite(multiplier),
        }
    }
}

/// Terms are non-negative, so only `+inf` and NaN need mapping.
fn finite(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

fn round_non_negative(value: f64) -> u64 {
    // NaN fails the comparison and lands on 0 as well
    if value > 0.0 { value.round() as u64 } else { 0 }
}
