//! Day-stamped cache of the last drawn reading.
//!
//! Presentation-layer state: lets `status` (and a repeated `draw`) re-show
//! the reading drawn earlier the same day. The core gate only stores the
//! draw date; the reading itself is this layer's concern.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use omikuji_core::Reading;

/// A cached reading together with the day it was drawn.
#[derive(Debug, Serialize, Deserialize)]
struct CachedReading {
    date: String,
    reading: Reading,
}

/// Path of the cache file inside a state directory.
pub fn cache_path(state_dir: &Path) -> PathBuf {
    state_dir.join("reading.json")
}

/// Load the cached reading if it was drawn on `today`.
///
/// Stale, missing, or unreadable caches all read as `None`.
pub fn load_for(state_dir: &Path, today: &str) -> Option<Reading> {
    let raw = fs::read_to_string(cache_path(state_dir)).ok()?;
    let cached: CachedReading = serde_json::from_str(&raw).ok()?;
    (cached.date == today).then_some(cached.reading)
}

/// Cache a reading for `today`. Failures are dropped: the cache is a
/// convenience, not the gate.
pub fn save(state_dir: &Path, today: &str, reading: &Reading) {
    let cached = CachedReading {
        date: today.to_string(),
        reading: reading.clone(),
    };
    if let Ok(json) = serde_json::to_string_pretty(&cached) {
        let _ = fs::create_dir_all(state_dir);
        let _ = fs::write(cache_path(state_dir), json);
    }
}
