use std::collections::HashMap;

use crate::error::Result;
use crate::progress::GameProgressPayload;

/// Persistence for progress records, keyed by user or guest identity.
///
/// Implementations decide durability and locking; the sync layer only needs
/// read-your-writes within one call.
pub trait ProgressStore {
    /// Load the stored record, or `None` if the identity has none yet.
    fn load(&self, identity: &str) -> Result<Option<GameProgressPayload>>;

    /// Replace the stored record.
    fn save(&mut self, identity: &str, progress: &GameProgressPayload) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, GameProgressPayload>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self, identity: &str) -> Result<Option<GameProgressPayload>> {
        Ok(self.records.get(identity).cloned())
    }

    fn save(&mut self, identity: &str, progress: &GameProgressPayload) -> Result<()> {
        self.records.insert(identity.to_string(), progress.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_memory_store_operations() {
        let mut store = MemoryStore::new();
        assert!(store.load("guest-1").unwrap().is_none());

        let progress = GameProgressPayload::new(Utc::now());
        store.save("guest-1", &progress).unwrap();

        assert_eq!(store.load("guest-1").unwrap(), Some(progress));
        assert!(store.load("guest-2").unwrap().is_none());
    }
}
