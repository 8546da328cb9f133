//! Common CLI utility functions shared across commands.

use std::path::Path;

use anyhow::{Context, Result};
use minigame_core::ScoringRules;
use serde::Serialize;
use tracing::info;

/// Load scoring rules from `path`, or fall back to the defaults.
pub fn load_rules(path: Option<&Path>) -> Result<ScoringRules> {
    match path {
        Some(path) => {
            let rules = ScoringRules::load(path)
                .with_context(|| format!("Failed to load scoring rules from {:?}", path))?;
            info!("Loaded scoring rules from {:?}", path);
            Ok(rules)
        }
        None => Ok(ScoringRules::default()),
    }
}

/// Pretty-print `value` as JSON to `output`, or to stdout when `None`.
pub fn emit_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    if let Some(path) = output {
        std::fs::write(path, &content).with_context(|| format!("Failed to write {:?}", path))?;
        eprintln!("Wrote {}", path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}
