//! Merging of two independently evolved progress records.
//!
//! Scalar fields follow whichever record was updated last. Counters that only
//! grow (total score, levels, unlocked sets, last scores) take the maximum or
//! the union, so a merge never takes progress away from the player.
//!
//! When two `updated_at` timestamps are equal the first argument (`local`)
//! is treated as the newest. Only `last_activity_at`, `last_played_game` and
//! settings precedence can depend on argument order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::Display;

use super::{GameProgressPayload, PerGame, PerGameProgress};

/// Which input of a merge was treated as the newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Local,
    Remote,
}

/// Newest side by top-level `updated_at`, ties going to `local`.
pub fn newest_side(local: &GameProgressPayload, remote: &GameProgressPayload) -> Side {
    pick(local.updated_at, remote.updated_at)
}

/// Merge `local` and `remote` copies of the same identity's progress.
///
/// Both inputs must satisfy [`GameProgressPayload::validate`].
pub fn reconcile(
    local: &GameProgressPayload,
    remote: &GameProgressPayload,
) -> GameProgressPayload {
    let (newest, other) = match newest_side(local, remote) {
        Side::Local => (local, remote),
        Side::Remote => (remote, local),
    };

    GameProgressPayload {
        total_score: local.total_score.max(remote.total_score),
        per_game: PerGame {
            puzzle: reconcile_game(&local.per_game.puzzle, &remote.per_game.puzzle),
            quiz: reconcile_game(&local.per_game.quiz, &remote.per_game.quiz),
            matching: reconcile_game(&local.per_game.matching, &remote.per_game.matching),
        },
        last_played_game: newest.last_played_game,
        last_activity_at: newest.last_activity_at,
        settings: newest.settings.overlay(&other.settings),
        updated_at: newest.updated_at,
    }
}

fn reconcile_game(local: &PerGameProgress, remote: &PerGameProgress) -> PerGameProgress {
    let updated_at = match pick(local.updated_at, remote.updated_at) {
        Side::Local => local.updated_at,
        Side::Remote => remote.updated_at,
    };

    PerGameProgress {
        level: local.level.max(remote.level),
        unlocked_levels: union_levels(&local.unlocked_levels, &remote.unlocked_levels),
        last_score: local.last_score.max(remote.last_score),
        updated_at,
    }
}

fn pick(local: DateTime<Utc>, remote: DateTime<Utc>) -> Side {
    if local >= remote {
        Side::Local
    } else {
        Side::Remote
    }
}

/// Sorted, de-duplicated union of two level sets.
fn union_levels(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut levels: Vec<u32> = a.iter().chain(b).copied().collect();
    levels.sort_unstable();
    levels.dedup();
    levels
}
