use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::defaults;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PuzzleRules {
    pub base_points: f64,
    pub time_bonus_per_second: f64,
    pub level_multiplier: f64,
    pub hint_penalty: f64,
}

impl Default for PuzzleRules {
    fn default() -> Self {
        Self {
            base_points: defaults::PUZZLE_BASE_POINTS,
            time_bonus_per_second: defaults::PUZZLE_TIME_BONUS_PER_SECOND,
            level_multiplier: defaults::PUZZLE_LEVEL_MULTIPLIER,
            hint_penalty: defaults::PUZZLE_HINT_PENALTY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuizRules {
    pub correct_points: f64,
    pub wrong_penalty: f64,
    pub streak_multiplier: f64,
}

impl Default for QuizRules {
    fn default() -> Self {
        Self {
            correct_points: defaults::QUIZ_CORRECT_POINTS,
            wrong_penalty: defaults::QUIZ_WRONG_PENALTY,
            streak_multiplier: defaults::QUIZ_STREAK_MULTIPLIER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchingRules {
    pub correct_match_points: f64,
    pub wrong_match_penalty: f64,
    pub time_bonus: f64,
}

impl Default for MatchingRules {
    fn default() -> Self {
        Self {
            correct_match_points: defaults::MATCHING_CORRECT_MATCH_POINTS,
            wrong_match_penalty: defaults::MATCHING_WRONG_MATCH_PENALTY,
            time_bonus: defaults::MATCHING_TIME_BONUS,
        }
    }
}

/// Admin-configurable scoring coefficients for every game type.
///
/// Sections or fields missing from a rules file fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub puzzle: PuzzleRules,
    pub quiz: QuizRules,
    pub matching: MatchingRules,
}

impl ScoringRules {
    /// Load rules from a file.
    ///
    /// Files ending in `.toml` are parsed as TOML, anything else as JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        debug!("Loading scoring rules from {:?}", path);
        if is_toml {
            Self::parse_toml(&content)
        } else {
            Self::parse_json(&content)
        }
    }

    pub fn parse_toml(content: &str) -> Result<Self> {
        let rules: Self = toml::from_str(content)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn parse_json(content: &str) -> Result<Self> {
        let rules: Self = serde_json::from_str(content)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that every coefficient is finite and non-negative, and that the
    /// streak multiplier never shrinks a score.
    pub fn validate(&self) -> Result<()> {
        let coefficients = [
            ("puzzle.basePoints", self.puzzle.base_points),
            ("puzzle.timeBonusPerSecond", self.puzzle.time_bonus_per_second),
            ("puzzle.levelMultiplier", self.puzzle.level_multiplier),
            ("puzzle.hintPenalty", self.puzzle.hint_penalty),
            ("quiz.correctPoints", self.quiz.correct_points),
            ("quiz.wrongPenalty", self.quiz.wrong_penalty),
            ("quiz.streakMultiplier", self.quiz.streak_multiplier),
            ("matching.correctMatchPoints", self.matching.correct_match_points),
            ("matching.wrongMatchPenalty", self.matching.wrong_match_penalty),
            ("matching.timeBonus", self.matching.time_bonus),
        ];

        for (field, value) in coefficients {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidRules { field, value });
            }
        }

        if self.quiz.streak_multiplier < 1.0 {
            return Err(Error::InvalidRules {
                field: "quiz.streakMultiplier",
                value: self.quiz.streak_multiplier,
            });
        }

        Ok(())
    }
}
