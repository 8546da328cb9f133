//! Durable player progress and its reconciliation.
//!
//! - `GameProgressPayload` - per-identity record of score, unlocks and settings
//! - `reconcile` - merge a local and a remote copy without regressing progress

mod payload;
mod reconcile;

pub use payload::*;
pub use reconcile::*;
