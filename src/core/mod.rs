//! # Core Application Logic
//!
//! This module contains Misbaha's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • tracker (counters)   │
//!                    │  • state (App)          │
//!                    │  • action + update()    │
//!                    │  • store (persistence)  │
//!                    │  • config               │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │ providers  │      │  feedback  │
//!     │ (ratatui)  │      │ (content,  │      │  (tones)   │
//!     │            │      │  account)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The static dhikr catalog
//! - [`tracker`]: `TrackerState` — counts, targets, total, sessions
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`state`]: The `App` struct — all application state in one place
//! - [`store`]: Best-effort JSON persistence
//! - [`config`]: TOML config with defaults → file → env → CLI resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod state;
pub mod store;
pub mod tracker;
