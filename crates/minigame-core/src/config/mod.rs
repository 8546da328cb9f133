//! Configuration for scoring and progress defaults.
//!
//! This module contains:
//! - `ScoringRules` - per-game scoring coefficients, loadable from TOML or JSON
//! - Default coefficient and settings constants

mod rules;

pub use rules::*;

/// Default scoring coefficients.
pub mod defaults {
    pub const PUZZLE_BASE_POINTS: f64 = 120.0;
    pub const PUZZLE_TIME_BONUS_PER_SECOND: f64 = 2.0;
    pub const PUZZLE_LEVEL_MULTIPLIER: f64 = 1.2;
    pub const PUZZLE_HINT_PENALTY: f64 = 15.0;

    pub const QUIZ_CORRECT_POINTS: f64 = 50.0;
    pub const QUIZ_WRONG_PENALTY: f64 = 12.0;
    /// Raised to the power of the streak length.
    pub const QUIZ_STREAK_MULTIPLIER: f64 = 1.15;

    pub const MATCHING_CORRECT_MATCH_POINTS: f64 = 40.0;
    pub const MATCHING_WRONG_MATCH_PENALTY: f64 = 10.0;
    /// Flat bonus for any timed matching session.
    pub const MATCHING_TIME_BONUS: f64 = 100.0;
}

/// Player settings used when a record does not set them.
pub mod settings {
    use crate::game::AnimationIntensity;

    pub const DEFAULT_SOUND: bool = true;
    pub const DEFAULT_ANIMATION_INTENSITY: AnimationIntensity = AnimationIntensity::Medium;
}
