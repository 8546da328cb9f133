//! Sync command for reconciling an identity across two progress directories.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use minigame_core::{JsonFileStore, SyncOutcome, sync_progress};

pub fn run(identity: &str, local_dir: &Path, remote_dir: &Path) -> Result<()> {
    let mut local = JsonFileStore::new(local_dir);
    let mut remote = JsonFileStore::new(remote_dir);

    let report = sync_progress(identity, &mut local, &mut remote, Utc::now())?;

    let summary = match report.outcome {
        SyncOutcome::Merged { newest } => format!("merged ({} was newest)", newest),
        SyncOutcome::CopiedFromLocal => "copied local to remote".to_string(),
        SyncOutcome::CopiedFromRemote => "copied remote to local".to_string(),
        SyncOutcome::Created => "created fresh progress".to_string(),
    };
    println!(
        "{}: {}, total score {}",
        identity, summary, report.progress.total_score
    );

    Ok(())
}
