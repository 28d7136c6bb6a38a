//! Roster file persistence
//!
//! The tracked-player roster lives in a small JSON file
//! (`{"players": ["nick", ...]}`). The store keeps it sorted
//! case-insensitively and pretty-printed; identifiers are resolved
//! elsewhere, this layer only deals in nicknames.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::faceit::FaceitClient;
use crate::report_core::Player;

#[derive(Debug)]
pub enum RosterError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        RosterError::Io(err)
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Serialization(err)
    }
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Io(e) => write!(f, "IO error: {}", e),
            RosterError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for RosterError {}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RosterFile {
    players: Vec<String>,
}

pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the roster nicknames in file order. A missing file is an empty
    /// roster, not an error.
    pub fn load(&self) -> Result<Vec<String>, RosterError> {
        if !self.path.exists() {
            log::info!("No roster file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)?;
        let roster: RosterFile = serde_json::from_str(&json)?;
        Ok(roster.players)
    }

    /// Add a nickname. Duplicate adds leave the file untouched and return
    /// `false`.
    pub fn add(&self, nickname: &str) -> Result<bool, RosterError> {
        let mut players = self.load()?;
        if players.iter().any(|p| p == nickname) {
            return Ok(false);
        }

        players.push(nickname.to_string());
        self.save(players)?;
        Ok(true)
    }

    /// Remove a nickname, returning whether it was present.
    pub fn remove(&self, nickname: &str) -> Result<bool, RosterError> {
        let mut players = self.load()?;
        let before = players.len();
        players.retain(|p| p != nickname);
        let removed = players.len() != before;

        if removed {
            self.save(players)?;
        }
        Ok(removed)
    }

    fn save(&self, mut players: Vec<String>) -> Result<(), RosterError> {
        players.sort_by_key(|p| p.to_lowercase());
        let json = serde_json::to_string_pretty(&RosterFile { players })?;
        fs::write(&self.path, json)?;
        log::debug!("Saved roster to {}", self.path.display());
        Ok(())
    }
}

/// Source of the ordered roster for one report run. May return an empty
/// roster.
#[async_trait]
pub trait RosterProvider: Send + Sync {
    async fn roster(&self) -> Vec<Player>;
}

/// Live roster: nicknames from the store, identifiers late-bound through
/// the stats API on every call, so roster edits are picked up without a
/// restart.
pub struct LiveRoster {
    store: RosterStore,
    client: Arc<FaceitClient>,
}

impl LiveRoster {
    pub fn new(store: RosterStore, client: Arc<FaceitClient>) -> Self {
        Self { store, client }
    }
}

#[async_trait]
impl RosterProvider for LiveRoster {
    async fn roster(&self) -> Vec<Player> {
        let nicknames = match self.store.load() {
            Ok(nicknames) => nicknames,
            Err(e) => {
                log::warn!("Failed to load roster file: {}", e);
                return Vec::new();
            }
        };
        self.client.resolve_roster(&nicknames).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, RosterStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = RosterStore::new(dir.path().join("players.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_is_empty_roster() {
        let (_dir, store) = temp_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_add_sorts_case_insensitively() {
        let (_dir, store) = temp_store();
        assert!(store.add("Zed").unwrap());
        assert!(store.add("alpha").unwrap());
        assert!(store.add("Mid").unwrap());

        assert_eq!(store.load().unwrap(), vec!["alpha", "Mid", "Zed"]);
    }

    #[test]
    fn test_duplicate_add_is_a_noop() {
        let (_dir, store) = temp_store();
        assert!(store.add("alpha").unwrap());
        assert!(!store.add("alpha").unwrap());
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_remove() {
        let (_dir, store) = temp_store();
        store.add("alpha").unwrap();
        store.add("beta").unwrap();

        assert!(store.remove("alpha").unwrap());
        assert!(!store.remove("alpha").unwrap());
        assert_eq!(store.load().unwrap(), vec!["beta"]);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let (_dir, store) = temp_store();
        fs::write(
            store.path.clone(),
            r#"{"players": "not-a-list"}"#,
        )
        .unwrap();
        assert!(matches!(store.load(), Err(RosterError::Serialization(_))));
    }
}
