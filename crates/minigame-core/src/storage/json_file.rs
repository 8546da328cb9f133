use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::ProgressStore;
use crate::error::{Error, Result};
use crate::progress::GameProgressPayload;

/// Directory of pretty-printed JSON files, one `<identity>.json` per record.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// File backing `identity`. Identities must be non-empty and use only
    /// ASCII letters, digits, `-` and `_`.
    pub fn path_for(&self, identity: &str) -> Result<PathBuf> {
        let valid = !identity.is_empty()
            && identity
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(Error::InvalidIdentity(identity.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", identity)))
    }
}

/// Read and validate a progress record from a JSON file.
pub fn read_progress_file<P: AsRef<Path>>(path: P) -> Result<GameProgressPayload> {
    let content = fs::read_to_string(path)?;
    let progress: GameProgressPayload = serde_json::from_str(&content)?;
    progress.validate()?;
    Ok(progress)
}

/// Write a progress record as pretty-printed JSON, creating parent directories.
pub fn write_progress_file<P: AsRef<Path>>(
    path: P,
    progress: &GameProgressPayload,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(progress)?)?;
    Ok(())
}

impl ProgressStore for JsonFileStore {
    fn load(&self, identity: &str) -> Result<Option<GameProgressPayload>> {
        let path = self.path_for(identity)?;
        match read_progress_file(&path) {
            Ok(progress) => {
                debug!("Loaded progress for {} from {:?}", identity, path);
                Ok(Some(progress))
            }
            Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&mut self, identity: &str, progress: &GameProgressPayload) -> Result<()> {
        let path = self.path_for(identity)?;
        write_progress_file(&path, progress)?;
        debug!("Saved progress for {} to {:?}", identity, path);
        Ok(())
    }
}
