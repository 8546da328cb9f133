//! Score calculation.
//!
//! - `ScoreBreakdown` - the point award for one session
//! - `calculate_score` - pure mapping from a `GameResult` and `ScoringRules`

mod breakdown;
mod calculator;

pub use breakdown::*;
pub use calculator::*;
