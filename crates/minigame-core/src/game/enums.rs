use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameType {
    Puzzle,
    Quiz,
    Matching,
}

impl GameType {
    /// All game types in their canonical order.
    pub const ALL: [GameType; 3] = [Self::Puzzle, Self::Quiz, Self::Matching];
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AnimationIntensity {
    Low,
    #[default]
    Medium,
    High,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_game_type_names() {
        assert_eq!(GameType::Puzzle.to_string(), "puzzle");
        let name: &'static str = GameType::Matching.into();
        assert_eq!(name, "matching");
        assert_eq!(GameType::from_str("QUIZ").unwrap(), GameType::Quiz);
        assert!(GameType::from_str("chess").is_err());
    }

    #[test]
    fn test_game_type_iter_matches_all() {
        let iterated: Vec<GameType> = GameType::iter().collect();
        assert_eq!(iterated, GameType::ALL);
    }

    #[test]
    fn test_game_type_serde() {
        let json = serde_json::to_string(&GameType::Matching).unwrap();
        assert_eq!(json, "\"matching\"");
        let parsed: GameType = serde_json::from_str("\"puzzle\"").unwrap();
        assert_eq!(parsed, GameType::Puzzle);
    }

    #[test]
    fn test_animation_intensity_default() {
        assert_eq!(AnimationIntensity::default(), AnimationIntensity::Medium);
        assert_eq!(
            AnimationIntensity::from_str("high").unwrap(),
            AnimationIntensity::High
        );
    }
}
