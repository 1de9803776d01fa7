//! # Counter & Session Tracker
//!
//! The one mutable entity in the app: per-category tallies, per-category
//! targets, a lifetime running total, and the log of completed sessions.
//!
//! Everything here is a pure, synchronous state transition — no I/O, no
//! clock reads (callers pass `now_ms` in), so every rule is directly
//! testable. Persistence lives in [`crate::core::store`]; the reducer in
//! [`crate::core::action`] decides when to call it.
//!
//! Invariants maintained by construction:
//! - `counts[c] >= 0` for every category (decrement at 0 is a no-op)
//! - `targets[c] >= 1` for every category (set_target clamps)
//! - `total_count` is a running ledger of increments minus decrements, not a
//!   recomputed sum — a per-category reset leaves earned credit in place

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::catalog::{self, DEFAULT_DHIKR_ID, DHIKR_KINDS, DhikrKind};

/// Suppression window for duplicate session records: a completion for the
/// same category within this many milliseconds of the last one is skipped.
/// Overridable via `[tracker] session_cooldown_ms` in the config file.
pub const DEFAULT_SESSION_COOLDOWN_MS: i64 = 1000;

/// A recorded instance of a category's count reaching its target.
/// Immutable once created. Field names match the persisted blob.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    #[serde(rename = "dhikrType")]
    pub dhikr_id: String,
    pub count: u32,
    pub target: u32,
    /// Completion time, epoch milliseconds.
    pub timestamp: i64,
}

/// The full tracker state. Most-recent session first.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackerState {
    pub counts: HashMap<String, u32>,
    pub targets: HashMap<String, u32>,
    pub total_count: u64,
    pub sessions: Vec<Session>,
    pub active: String,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerState {
    /// Fresh state: every catalog entry zeroed at its default target.
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        let mut targets = HashMap::new();
        for kind in DHIKR_KINDS {
            counts.insert(kind.id.to_string(), 0);
            targets.insert(kind.id.to_string(), kind.default_target);
        }
        Self {
            counts,
            targets,
            total_count: 0,
            sessions: Vec::new(),
            active: DEFAULT_DHIKR_ID.to_string(),
        }
    }

    /// Make sure `id` has count/target entries. Unknown ids are accepted and
    /// lazily initialized (count 0, target = catalog default or 1) so the
    /// invariants hold for every key that exists.
    fn ensure_entry(&mut self, id: &str) {
        if !self.counts.contains_key(id) {
            self.counts.insert(id.to_string(), 0);
        }
        if !self.targets.contains_key(id) {
            self.targets
                .insert(id.to_string(), catalog::default_target_for(id));
        }
    }

    /// Switch the active category. Any id is accepted; see [`Self::ensure_entry`].
    pub fn select(&mut self, id: &str) {
        self.ensure_entry(id);
        self.active = id.to_string();
    }

    /// Add one to the active count and the lifetime total.
    /// Returns true when the count crossed from below target to at-or-above —
    /// the caller should then attempt [`Self::record_session`].
    pub fn increment(&mut self) -> bool {
        let active = self.active.clone();
        self.ensure_entry(&active);
        let target = self.current_target();
        let count = self.counts.entry(self.active.clone()).or_insert(0);
        let was_below = *count < target;
        *count += 1;
        let crossed = was_below && *count >= target;
        self.total_count += 1;
        crossed
    }

    /// Subtract one from the active count and the lifetime total.
    /// No-op (returns false) when the active count is already 0.
    pub fn decrement(&mut self) -> bool {
        let active = self.active.clone();
        self.ensure_entry(&active);
        let count = self.counts.entry(self.active.clone()).or_insert(0);
        if *count == 0 {
            return false;
        }
        *count -= 1;
        self.total_count = self.total_count.saturating_sub(1);
        true
    }

    /// Zero the active count. Lifetime total, targets, and recorded sessions
    /// are untouched — progress already earned stays earned.
    pub fn reset_active(&mut self) {
        let active = self.active.clone();
        self.ensure_entry(&active);
        self.counts.insert(self.active.clone(), 0);
    }

    /// Set the active target, clamped to a minimum of 1. No upper bound.
    /// Returns true when the clamped target moved the active count from
    /// below-target to at-or-above (a lowered target can complete a cycle).
    pub fn set_target(&mut self, value: i64) -> bool {
        let active = self.active.clone();
        self.ensure_entry(&active);
        let clamped = value.max(1) as u32;
        let count = self.current_count();
        let was_below = count < self.current_target();
        self.targets.insert(self.active.clone(), clamped);
        was_below && count >= clamped
    }

    /// Drop the session history. Counts, targets, and total are untouched.
    pub fn clear_sessions(&mut self) {
        self.sessions.clear();
    }

    /// Record a completed session for the active category, unless the count
    /// isn't actually at target or the most recent session is for the same
    /// category within `cooldown_ms` of `now_ms` (rapid re-trigger at the
    /// same logical instant). Idempotent under repeated invocation with
    /// unchanged inputs. Returns true when a session was inserted.
    pub fn record_session(&mut self, cooldown_ms: i64, now_ms: i64) -> bool {
        let count = self.current_count();
        let target = self.current_target();
        if count < target || count == 0 {
            return false;
        }
        if let Some(last) = self.sessions.first()
            && last.dhikr_id == self.active
            && now_ms - last.timestamp < cooldown_ms
        {
            return false;
        }
        self.sessions.insert(
            0,
            Session {
                id: uuid::Uuid::new_v4().to_string(),
                dhikr_id: self.active.clone(),
                count,
                target,
                timestamp: now_ms,
            },
        );
        true
    }

    // ------------------------------------------------------------------
    // Derived values (computed, never stored)
    // ------------------------------------------------------------------

    pub fn current_count(&self) -> u32 {
        self.count_for(&self.active)
    }

    pub fn count_for(&self, id: &str) -> u32 {
        self.counts.get(id).copied().unwrap_or(0)
    }

    pub fn current_target(&self) -> u32 {
        self.targets.get(&self.active).copied().unwrap_or(1).max(1)
    }

    /// Progress toward the active target as a percentage, clamped at 100.
    pub fn progress(&self) -> f64 {
        let pct = self.current_count() as f64 / self.current_target() as f64 * 100.0;
        pct.min(100.0)
    }

    /// Catalog entry for the active category, falling back to a placeholder
    /// for unknown ids.
    pub fn active_kind(&self) -> &'static DhikrKind {
        catalog::find_or_placeholder(&self.active)
    }
}
