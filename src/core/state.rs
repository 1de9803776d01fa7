//! # Application State
//!
//! Core business state for Misbaha. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── tracker: TrackerState          // counts, targets, total, sessions
//! ├── user: Option<UserProfile>      // None = guest mode
//! ├── preferences: Preferences       // read-only flags from the account provider
//! ├── daily_content: Option<…>       // decorative citation (async-loaded)
//! ├── hijri_date: Option<…>          // decorative calendar date (async-loaded)
//! ├── status_message: String         // status bar text
//! └── session_cooldown_ms / flags    // resolved configuration
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations. The App is
//! explicitly owned by the event loop — there is no global singleton.

use crate::core::config::ResolvedConfig;
use crate::core::tracker::{DEFAULT_SESSION_COOLDOWN_MS, TrackerState};
use crate::providers::types::{DailyContent, HijriDate, Preferences, UserProfile};

pub struct App {
    pub tracker: TrackerState,
    /// Current identity; `None` means guest mode.
    pub user: Option<UserProfile>,
    pub preferences: Preferences,
    pub daily_content: Option<DailyContent>,
    pub hijri_date: Option<HijriDate>,
    pub status_message: String,
    /// Duplicate-session suppression window (config override of the default).
    pub session_cooldown_ms: i64,
    // Resolved config flags; each panel also honors the account preference.
    pub audio_enabled: bool,
    pub show_daily_content: bool,
    pub show_hijri_date: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            tracker: TrackerState::new(),
            user: None,
            preferences: Preferences::default(),
            daily_content: None,
            hijri_date: None,
            status_message: String::from("Bismillah — press Space to count"),
            session_cooldown_ms: DEFAULT_SESSION_COOLDOWN_MS,
            audio_enabled: true,
            show_daily_content: true,
            show_hijri_date: true,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            session_cooldown_ms: config.session_cooldown_ms,
            audio_enabled: config.audio_enabled,
            show_daily_content: config.show_daily_content,
            show_hijri_date: config.show_hijri_date,
            ..Self::new()
        }
    }

    /// Name shown in the title bar.
    pub fn user_label(&self) -> &str {
        self.user.as_ref().map(|u| u.name.as_str()).unwrap_or("guest")
    }

    /// Whether to render the citation panel: config/CLI flag AND preference.
    pub fn daily_panel_enabled(&self) -> bool {
        self.show_daily_content && self.preferences.show_daily_content
    }

    pub fn hijri_enabled(&self) -> bool {
        self.show_hijri_date && self.preferences.show_hijri_date
    }

    /// Whether feedback cues should actually play.
    pub fn sound_on(&self) -> bool {
        self.audio_enabled && self.preferences.audio_feedback
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
