//! Play command: score a result and fold it into a progress file.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use minigame_core::storage::{read_progress_file, write_progress_file};
use minigame_core::{GameProgressPayload, calculate_score};
use tracing::{info, warn};

use crate::cli::ResultArgs;
use crate::cli_utils;

pub fn run(
    progress_path: &Path,
    result: &ResultArgs,
    unlock: Option<u32>,
    rules: Option<&Path>,
) -> Result<()> {
    let rules = cli_utils::load_rules(rules)?;
    let now = Utc::now();

    let mut progress = if progress_path.exists() {
        read_progress_file(progress_path)
            .with_context(|| format!("Failed to read progress from {:?}", progress_path))?
    } else {
        info!("No progress at {:?}, starting fresh", progress_path);
        GameProgressPayload::new(now)
    };

    let game_result = result.to_result();
    let game = game_result.game_type();
    let level = game_result.level();
    if !progress.game(game).is_unlocked(level) {
        warn!("{} level {} is not unlocked yet", game, level);
    }
    let breakdown = calculate_score(&game_result, &rules);
    progress.record_play(game, &breakdown, now);

    if let Some(level) = unlock
        && progress.unlock_level(game, level, now)
    {
        eprintln!("Unlocked {} level {}", game, level);
    }

    write_progress_file(progress_path, &progress)
        .with_context(|| format!("Failed to write progress to {:?}", progress_path))?;

    eprintln!(
        "{}: +{} points (total {})",
        game, breakdown.total, progress.total_score
    );
    cli_utils::emit_json(&breakdown, None)
}
