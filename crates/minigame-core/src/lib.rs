pub mod config;
pub mod error;
pub mod game;
pub mod progress;
pub mod score;
pub mod storage;
pub mod sync;

pub use config::ScoringRules;
pub use error::{Error, Result};
pub use game::{AnimationIntensity, GameResult, GameType};
pub use progress::{
    GameProgressPayload, PerGame, PerGameProgress, ProgressSettings, Side, newest_side, reconcile,
};
pub use score::{ScoreBreakdown, calculate_score};
pub use storage::{JsonFileStore, MemoryStore, ProgressStore};
pub use sync::{SyncOutcome, SyncReport, sync_progress};
