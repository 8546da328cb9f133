//! Settings command for changing player preferences in a progress file.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use minigame_core::storage::{read_progress_file, write_progress_file};
use minigame_core::{AnimationIntensity, ProgressSettings};

use crate::cli_utils;

pub fn run(
    progress_path: &Path,
    sound: Option<bool>,
    animation: Option<AnimationIntensity>,
) -> Result<()> {
    let mut progress = read_progress_file(progress_path)
        .with_context(|| format!("Failed to read progress from {:?}", progress_path))?;

    if sound.is_none() && animation.is_none() {
        eprintln!("No settings given, leaving {:?} unchanged", progress_path);
        return cli_utils::emit_json(&progress.settings, None);
    }

    let patch = ProgressSettings {
        sound,
        animation_intensity: animation,
    };
    progress.update_settings(patch, Utc::now());

    write_progress_file(progress_path, &progress)
        .with_context(|| format!("Failed to write progress to {:?}", progress_path))?;
    cli_utils::emit_json(&progress.settings, None)
}
