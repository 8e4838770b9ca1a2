//! Durable storage for the last-draw date.
//!
//! The gate persists a single value. Storage is behind a trait so
//! embedders and tests can substitute an in-memory fake for the on-disk
//! state file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Durable storage for the single last-draw-date value.
pub trait DrawStore {
    /// Load the stored date, or `None` if nothing was ever stored.
    fn load(&self) -> StoreResult<Option<String>>;

    /// Store a date, overwriting any prior value.
    fn save(&mut self, date: &str) -> StoreResult<()>;
}

/// In-memory store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    last: Option<String>,
}

impl MemoryStore {
    /// An empty store (no draw recorded).
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawStore for MemoryStore {
    fn load(&self) -> StoreResult<Option<String>> {
        Ok(self.last.clone())
    }

    fn save(&mut self, date: &str) -> StoreResult<()> {
        self.last = Some(date.to_string());
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct State {
    last_draw_date: Option<String>,
}

/// File-backed store: one JSON object holding the last-draw date.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// A store backed by the given state file. The file and its parent
    /// directory are created on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The state file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DrawStore for FileStore {
    fn load(&self) -> StoreResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let state: State = serde_json::from_str(&raw)?;
        Ok(state.last_draw_date)
    }

    fn save(&mut self, date: &str) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let state = State {
            last_draw_date: Some(date.to_string()),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&state)?)?;
        Ok(())
    }
}
