//! # Persistence
//!
//! Best-effort JSON storage under `~/.misbaha/`:
//!
//! - `state.json` — the whole tracker state, rewritten after every mutation.
//! - `content_cache.json` — the daily citation + hijri date, tagged with the
//!   calendar day it was fetched on (refetched on a new day).
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`) for crash
//! safety. Every failure here is absorbed: malformed or missing data falls
//! back to defaults on load, and a failed write is logged and dropped — the
//! in-memory state stays the source of truth. No versioning: the load path's
//! field-by-field merge is the forward-compatibility strategy.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::tracker::{Session, TrackerState};
use crate::providers::types::{DailyContent, HijriDate};

const STATE_FILE: &str = "state.json";
const CONTENT_CACHE_FILE: &str = "content_cache.json";

/// Returns `~/.misbaha/`, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home.join(".misbaha");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

// ============================================================================
// Tracker state blob
// ============================================================================

/// The on-disk shape of the tracker state. Every field defaults so a partial
/// or older blob still loads; `activeTab` deliberately doesn't round-trip.
#[derive(Serialize, Deserialize, Default, Debug)]
struct PersistedState {
    #[serde(default)]
    counts: HashMap<String, u32>,
    #[serde(default)]
    targets: HashMap<String, u32>,
    #[serde(rename = "totalCount", default)]
    total_count: u64,
    #[serde(default)]
    sessions: Vec<Session>,
}

impl From<&TrackerState> for PersistedState {
    fn from(state: &TrackerState) -> Self {
        Self {
            counts: state.counts.clone(),
            targets: state.targets.clone(),
            total_count: state.total_count,
            sessions: state.sessions.clone(),
        }
    }
}

/// Overlay a persisted blob onto the default state. Each map entry is merged
/// per key so categories missing from an old blob keep their defaults, and
/// loaded targets are re-clamped to the `>= 1` invariant.
fn merge(persisted: PersistedState) -> TrackerState {
    let mut state = TrackerState::new();
    state.counts.extend(persisted.counts);
    for (id, target) in persisted.targets {
        state.targets.insert(id, target.max(1));
    }
    state.total_count = persisted.total_count;
    state.sessions = persisted.sessions;
    state
}

/// Load the tracker state from `dir`, falling back to defaults on any
/// failure. Never fatal: a corrupt blob logs a warning and starts fresh.
pub fn load_state_from(dir: &Path) -> TrackerState {
    let path = dir.join(STATE_FILE);
    if !path.exists() {
        debug!("No saved state at {}, starting fresh", path.display());
        return TrackerState::new();
    }
    match fs::read_to_string(&path) {
        Ok(json) => match serde_json::from_str::<PersistedState>(&json) {
            Ok(persisted) => merge(persisted),
            Err(e) => {
                warn!("Malformed state blob at {}: {}", path.display(), e);
                TrackerState::new()
            }
        },
        Err(e) => {
            warn!("Failed to read state from {}: {}", path.display(), e);
            TrackerState::new()
        }
    }
}

pub fn save_state_to(dir: &Path, state: &TrackerState) -> io::Result<()> {
    atomic_write_json(&dir.join(STATE_FILE), &PersistedState::from(state))
}

/// Load the tracker state from the default data dir.
pub fn load_state() -> TrackerState {
    match data_dir() {
        Ok(dir) => load_state_from(&dir),
        Err(e) => {
            warn!("No data directory available: {}", e);
            TrackerState::new()
        }
    }
}

/// Persist the tracker state to the default data dir. Best-effort: failures
/// are logged and dropped.
pub fn save_state(state: &TrackerState) {
    let result = data_dir().and_then(|dir| save_state_to(&dir, state));
    if let Err(e) = result {
        warn!("Failed to save state: {}", e);
    } else {
        debug!("State saved (total={})", state.total_count);
    }
}

// ============================================================================
// Daily-content cache
// ============================================================================

/// Cached auxiliary content, valid for the calendar day it was fetched on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CachedContent {
    /// `YYYY-MM-DD` of the fetch.
    pub date: String,
    pub content: Option<DailyContent>,
    pub hijri: Option<HijriDate>,
}

pub fn load_cached_content_from(dir: &Path, today: &str) -> Option<CachedContent> {
    let path = dir.join(CONTENT_CACHE_FILE);
    let json = fs::read_to_string(&path).ok()?;
    let cached: CachedContent = match serde_json::from_str(&json) {
        Ok(c) => c,
        Err(e) => {
            warn!("Malformed content cache at {}: {}", path.display(), e);
            return None;
        }
    };
    (cached.date == today).then_some(cached)
}

pub fn save_cached_content_to(dir: &Path, cached: &CachedContent) -> io::Result<()> {
    atomic_write_json(&dir.join(CONTENT_CACHE_FILE), cached)
}

/// Today's cached content from the default data dir, if still fresh.
pub fn load_cached_content(today: &str) -> Option<CachedContent> {
    data_dir()
        .ok()
        .and_then(|dir| load_cached_content_from(&dir, today))
}

/// Best-effort cache write to the default data dir.
pub fn save_cached_content(cached: &CachedContent) {
    let result = data_dir().and_then(|dir| save_cached_content_to(&dir, cached));
    if let Err(e) = result {
        warn!("Failed to cache daily content: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch() -> tempfile::TempDir {
        tempfile::tempdir().expect("tempdir")
    }

    fn populated_state() -> TrackerState {
        let mut state = TrackerState::new();
        state.set_target(3);
        for _ in 0..3 {
            if state.increment() {
                state.record_session(1000, 42_000);
            }
        }
        state.select("custom");
        state.increment();
        state
    }

    #[test]
    fn test_state_round_trip() {
        let dir = scratch();
        let state = populated_state();
        save_state_to(dir.path(), &state).unwrap();

        let loaded = load_state_from(dir.path());
        assert_eq!(loaded.counts, state.counts);
        assert_eq!(loaded.targets, state.targets);
        assert_eq!(loaded.total_count, state.total_count);
        assert_eq!(loaded.sessions, state.sessions);
        // Active category resets to the default on load
        assert_eq!(loaded.active, "subhanallah");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = scratch();
        let loaded = load_state_from(dir.path());
        assert_eq!(loaded, TrackerState::new());
    }

    #[test]
    fn test_malformed_blob_yields_defaults() {
        let dir = scratch();
        fs::write(dir.path().join(STATE_FILE), "{not json").unwrap();
        let loaded = load_state_from(dir.path());
        assert_eq!(loaded, TrackerState::new());
    }

    #[test]
    fn test_partial_blob_merges_onto_defaults() {
        let dir = scratch();
        // Only a totalCount and one counter — old blob from a leaner schema
        fs::write(
            dir.path().join(STATE_FILE),
            r#"{"totalCount": 99, "counts": {"subhanallah": 12}}"#,
        )
        .unwrap();

        let loaded = load_state_from(dir.path());
        assert_eq!(loaded.total_count, 99);
        assert_eq!(loaded.counts["subhanallah"], 12);
        // Untouched fields keep their defaults
        assert_eq!(loaded.counts["custom"], 0);
        assert_eq!(loaded.targets["allahuakbar"], 34);
        assert!(loaded.sessions.is_empty());
    }

    #[test]
    fn test_zero_target_in_blob_is_reclamped() {
        let dir = scratch();
        fs::write(
            dir.path().join(STATE_FILE),
            r#"{"targets": {"subhanallah": 0}}"#,
        )
        .unwrap();
        let loaded = load_state_from(dir.path());
        assert_eq!(loaded.targets["subhanallah"], 1);
    }

    #[test]
    fn test_session_blob_field_names() {
        let dir = scratch();
        let mut state = TrackerState::new();
        state.set_target(1);
        state.increment();
        state.record_session(1000, 7_000);
        save_state_to(dir.path(), &state).unwrap();

        let raw = fs::read_to_string(dir.path().join(STATE_FILE)).unwrap();
        assert!(raw.contains("\"totalCount\""));
        assert!(raw.contains("\"dhikrType\""));
        assert!(raw.contains("\"timestamp\""));
    }

    #[test]
    fn test_content_cache_round_trip_and_expiry() {
        let dir = scratch();
        let cached = CachedContent {
            date: "2025-03-10".to_string(),
            content: Some(DailyContent::Hadith {
                text: "…".to_string(),
                source: "Sahih al-Bukhari".to_string(),
                reference: "5027".to_string(),
            }),
            hijri: None,
        };
        save_cached_content_to(dir.path(), &cached).unwrap();

        assert_eq!(
            load_cached_content_from(dir.path(), "2025-03-10"),
            Some(cached)
        );
        // Stale the next day
        assert!(load_cached_content_from(dir.path(), "2025-03-11").is_none());
    }

    #[test]
    fn test_content_cache_missing_is_none() {
        let dir = scratch();
        assert!(load_cached_content_from(dir.path(), "2025-03-10").is_none());
    }
}
