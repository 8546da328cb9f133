//! Reconcile command for merging two progress files.

use std::path::Path;

use anyhow::{Context, Result};
use minigame_core::storage::read_progress_file;
use minigame_core::{newest_side, reconcile};

use crate::cli_utils;

pub fn run(local: &Path, remote: &Path, output: Option<&Path>) -> Result<()> {
    let local_copy = read_progress_file(local)
        .with_context(|| format!("Failed to read local progress from {:?}", local))?;
    let remote_copy = read_progress_file(remote)
        .with_context(|| format!("Failed to read remote progress from {:?}", remote))?;

    eprintln!("Newest record: {}", newest_side(&local_copy, &remote_copy));

    let merged = reconcile(&local_copy, &remote_copy);
    cli_utils::emit_json(&merged, output)
}
