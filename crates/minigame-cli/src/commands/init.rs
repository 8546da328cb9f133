//! Init command for creating a fresh progress record.

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use minigame_core::GameProgressPayload;
use minigame_core::storage::write_progress_file;

pub fn run(output: Option<&Path>) -> Result<()> {
    let progress = GameProgressPayload::new(Utc::now());

    match output {
        Some(path) => {
            if path.exists() {
                bail!("Refusing to overwrite existing progress at {:?}", path);
            }
            write_progress_file(path, &progress)
                .with_context(|| format!("Failed to write progress to {:?}", path))?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&progress)?),
    }
    Ok(())
}
