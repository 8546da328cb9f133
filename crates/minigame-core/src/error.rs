use thiserror::Error;

use crate::game::GameType;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid scoring rule {field}: {value}")]
    InvalidRules { field: &'static str, value: f64 },

    #[error("Invalid {game} progress: {reason}")]
    InvalidProgress { game: GameType, reason: String },

    #[error("Invalid identity: {0:?}")]
    InvalidIdentity(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
