//! Local/remote progress synchronization.
//!
//! Loads both copies of an identity's progress, reconciles them when both
//! exist, and writes the result back to both stores. Concurrent syncs for the
//! same identity must be serialized by the caller.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::progress::{GameProgressPayload, Side, newest_side, reconcile};
use crate::storage::ProgressStore;

/// How the synced record was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SyncOutcome {
    /// Both copies existed and were merged
    Merged { newest: Side },
    /// Only the local copy existed
    CopiedFromLocal,
    /// Only the remote copy existed
    CopiedFromRemote,
    /// Neither copy existed; a fresh record was created
    Created,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub outcome: SyncOutcome,
    pub progress: GameProgressPayload,
}

/// Bring `local` and `remote` to the same record for `identity`.
///
/// `now` is only used when a fresh record has to be created.
///
/// The local store is written before the remote one. If the remote write
/// fails, local already holds the merged record; running the sync again
/// converges because merging a record with its own merge is a no-op.
pub fn sync_progress<L, R>(
    identity: &str,
    local: &mut L,
    remote: &mut R,
    now: DateTime<Utc>,
) -> Result<SyncReport>
where
    L: ProgressStore + ?Sized,
    R: ProgressStore + ?Sized,
{
    let local_copy = local.load(identity)?;
    let remote_copy = remote.load(identity)?;

    let (outcome, progress) = match (local_copy, remote_copy) {
        (Some(l), Some(r)) => {
            let newest = newest_side(&l, &r);
            debug!(
                "Reconciling {}: local updated {}, remote updated {}",
                identity, l.updated_at, r.updated_at
            );
            (SyncOutcome::Merged { newest }, reconcile(&l, &r))
        }
        (Some(l), None) => (SyncOutcome::CopiedFromLocal, l),
        (None, Some(r)) => (SyncOutcome::CopiedFromRemote, r),
        (None, None) => (SyncOutcome::Created, GameProgressPayload::new(now)),
    };

    local.save(identity, &progress)?;
    remote.save(identity, &progress)?;

    info!(
        "Synced progress for {} ({:?}, total score {})",
        identity, outcome, progress.total_score
    );

    Ok(SyncReport { outcome, progress })
}
