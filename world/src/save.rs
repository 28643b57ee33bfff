//! Durable persistence for the workshop's game state.
//!
//! The entire persisted state is one JSON snapshot written through on every
//! mutating action. Stores are a trait seam so sessions can run against a
//! file, an in-memory buffer, or anything else that can hold one blob.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use pc_workshop_core::{ItemId, Order, PlacementRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key under which the snapshot is stored.
pub const SAVE_KEY: &str = "msc_save";

/// Balance a fresh session starts with.
pub const STARTING_MONEY: u32 = 1000;

/// Serialized snapshot of the persistent game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    /// Current balance.
    pub money: u32,
    /// Owned item ids in purchase order.
    pub inventory: Vec<ItemId>,
    /// Items currently placed into the chassis, with their zone kinds.
    #[serde(rename = "installedParts")]
    pub installed_parts: Vec<PlacementRecord>,
    /// Active order, if any.
    #[serde(rename = "currentOrder")]
    pub current_order: Option<Order>,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            money: STARTING_MONEY,
            inventory: Vec::new(),
            installed_parts: Vec::new(),
            current_order: None,
        }
    }
}

/// Errors that can occur while loading or saving a snapshot.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The underlying store could not be read or written.
    #[error("could not access the save store: {0}")]
    Io(#[from] io::Error),
    /// The stored snapshot could not be encoded or decoded.
    #[error("could not encode or decode the save snapshot: {0}")]
    Format(#[from] serde_json::Error),
}

/// Durable home for exactly one [`SaveData`] snapshot.
pub trait SaveStore: fmt::Debug {
    /// Loads the stored snapshot, or `None` when nothing was saved yet.
    fn load(&mut self) -> Result<Option<SaveData>, SaveError>;

    /// Replaces the stored snapshot.
    fn save(&mut self, data: &SaveData) -> Result<(), SaveError>;
}

/// File-backed store writing the snapshot as pretty JSON.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the provided file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store using the canonical save key inside a directory.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{SAVE_KEY}.json")))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for FileStore {
    fn load(&mut self) -> Result<Option<SaveData>, SaveError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        let data = serde_json::from_str(&contents)?;
        Ok(Some(data))
    }

    fn save(&mut self, data: &SaveData) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    data: Option<SaveData>,
}

impl MemoryStore {
    /// Creates an empty store, yielding defaults on first load.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a snapshot.
    #[must_use]
    pub fn with(data: SaveData) -> Self {
        Self { data: Some(data) }
    }

    /// The snapshot currently held by the store, if any.
    #[must_use]
    pub fn data(&self) -> Option<&SaveData> {
        self.data.as_ref()
    }
}

impl SaveStore for MemoryStore {
    fn load(&mut self) -> Result<Option<SaveData>, SaveError> {
        Ok(self.data.clone())
    }

    fn save(&mut self, data: &SaveData) -> Result<(), SaveError> {
        self.data = Some(data.clone());
        Ok(())
    }
}
