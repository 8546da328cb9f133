use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::settings::{DEFAULT_ANIMATION_INTENSITY, DEFAULT_SOUND};
use crate::error::{Error, Result};
use crate::game::{AnimationIntensity, GameType};
use crate::score::ScoreBreakdown;

/// Level and unlock state for a single game type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerGameProgress {
    pub level: u32,
    /// Sorted ascending, no duplicates, always contains 1
    pub unlocked_levels: Vec<u32>,
    pub last_score: u64,
    pub updated_at: DateTime<Utc>,
}

impl PerGameProgress {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            level: 1,
            unlocked_levels: vec![1],
            last_score: 0,
            updated_at: now,
        }
    }

    pub fn is_unlocked(&self, level: u32) -> bool {
        self.unlocked_levels.binary_search(&level).is_ok()
    }

    fn validate(&self, game: GameType) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidProgress {
            game,
            reason: reason.to_string(),
        };

        if self.level == 0 {
            return Err(invalid("level must be at least 1"));
        }
        if self.unlocked_levels.first() != Some(&1) {
            return Err(invalid("unlocked levels must start at 1"));
        }
        if self.unlocked_levels.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(invalid("unlocked levels must be sorted without duplicates"));
        }
        Ok(())
    }
}

/// Progress for every game type. One field per game keeps all three present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerGame {
    pub puzzle: PerGameProgress,
    pub quiz: PerGameProgress,
    pub matching: PerGameProgress,
}

impl PerGame {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            puzzle: PerGameProgress::new(now),
            quiz: PerGameProgress::new(now),
            matching: PerGameProgress::new(now),
        }
    }

    pub fn get(&self, game: GameType) -> &PerGameProgress {
        match game {
            GameType::Puzzle => &self.puzzle,
            GameType::Quiz => &self.quiz,
            GameType::Matching => &self.matching,
        }
    }

    pub fn get_mut(&mut self, game: GameType) -> &mut PerGameProgress {
        match game {
            GameType::Puzzle => &mut self.puzzle,
            GameType::Quiz => &mut self.quiz,
            GameType::Matching => &mut self.matching,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (GameType, &PerGameProgress)> {
        GameType::ALL.into_iter().map(|game| (game, self.get(game)))
    }
}

/// Player settings. Unset fields fall back to the defaults when read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_intensity: Option<AnimationIntensity>,
}

impl ProgressSettings {
    pub fn new(sound: bool, animation_intensity: AnimationIntensity) -> Self {
        Self {
            sound: Some(sound),
            animation_intensity: Some(animation_intensity),
        }
    }

    pub fn sound(&self) -> bool {
        self.sound.unwrap_or(DEFAULT_SOUND)
    }

    pub fn animation_intensity(&self) -> AnimationIntensity {
        self.animation_intensity.unwrap_or(DEFAULT_ANIMATION_INTENSITY)
    }

    /// Fields set on `self` win; unset fields are taken from `base`.
    pub fn overlay(&self, base: &ProgressSettings) -> ProgressSettings {
        ProgressSettings {
            sound: self.sound.or(base.sound),
            animation_intensity: self.animation_intensity.or(base.animation_intensity),
        }
    }
}

/// Durable per-identity progress record (one per user or guest)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProgressPayload {
    pub total_score: u64,
    pub per_game: PerGame,
    pub last_played_game: Option<GameType>,
    pub last_activity_at: DateTime<Utc>,
    pub settings: ProgressSettings,
    pub updated_at: DateTime<Utc>,
}

impl GameProgressPayload {
    /// Fresh record: every game at level 1 with only level 1 unlocked.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            total_score: 0,
            per_game: PerGame::new(now),
            last_played_game: None,
            last_activity_at: now,
            settings: ProgressSettings::new(DEFAULT_SOUND, DEFAULT_ANIMATION_INTENSITY),
            updated_at: now,
        }
    }

    pub fn game(&self, game: GameType) -> &PerGameProgress {
        self.per_game.get(game)
    }

    /// Fold a scored session into the record.
    pub fn record_play(&mut self, game: GameType, score: &ScoreBreakdown, now: DateTime<Utc>) {
        self.total_score = self.total_score.saturating_add(score.total);

        let entry = self.per_game.get_mut(game);
        entry.last_score = score.total;
        entry.updated_at = now;

        self.last_played_game = Some(game);
        self.last_activity_at = now;
        self.updated_at = now;
    }

    /// Unlock `level` for `game`, raising the current level if it is higher.
    ///
    /// Returns whether anything changed. Timestamps are untouched otherwise.
    pub fn unlock_level(&mut self, game: GameType, level: u32, now: DateTime<Utc>) -> bool {
        if level == 0 {
            return false;
        }

        let entry = self.per_game.get_mut(game);
        let mut changed = false;

        if let Err(pos) = entry.unlocked_levels.binary_search(&level) {
            entry.unlocked_levels.insert(pos, level);
            changed = true;
        }
        if level > entry.level {
            entry.level = level;
            changed = true;
        }

        if changed {
            entry.updated_at = now;
            self.updated_at = now;
        }
        changed
    }

    /// Apply the fields set in `patch` on top of the current settings.
    pub fn update_settings(&mut self, patch: ProgressSettings, now: DateTime<Utc>) {
        self.settings = patch.overlay(&self.settings);
        self.updated_at = now;
    }

    /// Check the structural invariants the reconciler relies on.
    pub fn validate(&self) -> Result<()> {
        for (game, progress) in self.per_game.iter() {
            progress.validate(game)?;
        }
        Ok(())
    }
}
