//! Score command for computing a single breakdown.

use std::path::Path;

use anyhow::Result;
use minigame_core::calculate_score;

use crate::cli::ResultArgs;
use crate::cli_utils;

pub fn run(result: &ResultArgs, rules: Option<&Path>) -> Result<()> {
    let rules = cli_utils::load_rules(rules)?;
    let breakdown = calculate_score(&result.to_result(), &rules);
    cli_utils::emit_json(&breakdown, None)
}
