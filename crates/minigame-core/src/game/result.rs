use serde::{Deserialize, Serialize};

use crate::game::GameType;

/// Raw facts of one finished play session, before scoring.
///
/// Counts stay signed and times stay floating point so that tampered or
/// noisy client values survive deserialization; the calculator clamps them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gameType", rename_all = "lowercase")]
pub enum GameResult {
    #[serde(rename_all = "camelCase")]
    Puzzle {
        level: i64,
        time_seconds: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hints_used: Option<i64>,
    },
    #[serde(rename_all = "camelCase")]
    Quiz {
        level: i64,
        correct: i64,
        mistakes: i64,
        streak: i64,
    },
    #[serde(rename_all = "camelCase")]
    Matching {
        level: i64,
        time_seconds: f64,
        correct: i64,
        mistakes: i64,
    },
}

impl GameResult {
    pub fn game_type(&self) -> GameType {
        match self {
            Self::Puzzle { .. } => GameType::Puzzle,
            Self::Quiz { .. } => GameType::Quiz,
            Self::Matching { .. } => GameType::Matching,
        }
    }

    /// Difficulty tier attempted, clamped to at least 1.
    pub fn level(&self) -> u32 {
        let raw = match self {
            Self::Puzzle { level, .. } | Self::Quiz { level, .. } | Self::Matching { level, .. } => {
                *level
            }
        };
        raw.clamp(1, u32::MAX as i64) as u32
    }
}
