//! # Actions
//!
//! Everything that can happen in Misbaha becomes an `Action`.
//! User presses Space? That's `Action::Increment`.
//! The content provider resolves? That's `Action::ContentLoaded(content)`.
//!
//! The `update()` function takes the current state and an action, then
//! mutates the state and returns an `Effect` describing the I/O the caller
//! must perform (persist, play a cue, quit). No I/O happens here, and the
//! clock is passed in, so every transition is testable:
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::App;
use crate::core::tracker::TrackerState;
use crate::providers::types::{DailyContent, HijriDate, UserProfile};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Switch the active category (any id accepted; unknown ids lazy-init).
    Select(String),
    Increment,
    Decrement,
    ResetActive,
    /// Raw target input; clamped to >= 1 by the tracker.
    SetTarget(i64),
    ClearSessions,
    /// Replace everything with the pristine default state. The UI gates this
    /// behind an explicit confirmation; the reducer just does it.
    ResetAll,
    ProfileLoaded(Option<UserProfile>),
    ContentLoaded(DailyContent),
    HijriLoaded(HijriDate),
    Quit,
}

/// Feedback cue the caller should emit (fire-and-forget).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Click,
    Complete,
}

/// I/O the caller must perform after a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Write the tracker state to the store, optionally playing a cue first.
    Persist(Option<Cue>),
    Quit,
}

/// Shown in the status bar when a cycle completes; selected by how many
/// sessions are on record, so it rotates as you go.
const MOTIVATION: &[&str] = &[
    "MashaAllah! Keep up the good work!",
    "SubhanAllah! Your dedication is inspiring!",
    "Alhamdulillah! You're making great progress!",
    "Allah sees your efforts and dedication!",
    "Remember, consistency is key in worship!",
    "Every dhikr is a light in your heart!",
];

fn motivational_message(completed: usize) -> &'static str {
    MOTIVATION[completed % MOTIVATION.len()]
}

/// Reduce with the real clock. Thin wrapper over [`update_at`].
pub fn update(app: &mut App, action: Action) -> Effect {
    update_at(app, action, chrono::Utc::now().timestamp_millis())
}

/// Reduce `action` into `app` at wall-clock time `now_ms`.
pub fn update_at(app: &mut App, action: Action, now_ms: i64) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::Select(id) => {
            app.tracker.select(&id);
            app.status_message = format!("Counting {}", app.tracker.active_kind().name);
            Effect::Persist(None)
        }
        Action::Increment => {
            let crossed = app.tracker.increment();
            let recorded =
                crossed && app.tracker.record_session(app.session_cooldown_ms, now_ms);
            let cue = if recorded {
                app.status_message =
                    motivational_message(app.tracker.sessions.len()).to_string();
                Cue::Complete
            } else {
                Cue::Click
            };
            Effect::Persist(Some(cue))
        }
        Action::Decrement => {
            if !app.tracker.decrement() {
                // Already at zero: nothing changed, nothing to persist
                return Effect::None;
            }
            Effect::Persist(None)
        }
        Action::ResetActive => {
            app.tracker.reset_active();
            app.status_message = format!("{} counter reset", app.tracker.active_kind().name);
            Effect::Persist(None)
        }
        Action::SetTarget(value) => {
            let crossed = app.tracker.set_target(value);
            let recorded =
                crossed && app.tracker.record_session(app.session_cooldown_ms, now_ms);
            app.status_message = format!("Target set to {}", app.tracker.current_target());
            let cue = recorded.then_some(Cue::Complete);
            Effect::Persist(cue)
        }
        Action::ClearSessions => {
            app.tracker.clear_sessions();
            app.status_message = String::from("Session history cleared");
            Effect::Persist(None)
        }
        Action::ResetAll => {
            app.tracker = TrackerState::new();
            app.status_message = String::from("All counters and history reset");
            Effect::Persist(None)
        }
        Action::ProfileLoaded(user) => {
            if let Some(ref profile) = user {
                app.preferences = profile.preferences.clone();
                app.status_message = format!("As-salamu alaykum, {}", profile.name);
            }
            app.user = user;
            Effect::None
        }
        Action::ContentLoaded(content) => {
            app.daily_content = Some(content);
            Effect::None
        }
        Action::HijriLoaded(hijri) => {
            app.hijri_date = Some(hijri);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::types::Preferences;

    const NOW: i64 = 1_700_000_000_000;

    fn app() -> App {
        App::new()
    }

    #[test]
    fn test_increment_persists_with_click() {
        let mut app = app();
        let effect = update_at(&mut app, Action::Increment, NOW);
        assert_eq!(effect, Effect::Persist(Some(Cue::Click)));
        assert_eq!(app.tracker.current_count(), 1);
        assert_eq!(app.tracker.total_count, 1);
    }

    #[test]
    fn test_completing_increment_plays_complete_cue() {
        let mut app = app();
        update_at(&mut app, Action::SetTarget(2), NOW);
        update_at(&mut app, Action::Increment, NOW);
        let effect = update_at(&mut app, Action::Increment, NOW + 10);
        assert_eq!(effect, Effect::Persist(Some(Cue::Complete)));
        assert_eq!(app.tracker.sessions.len(), 1);
        // Status now carries a motivation line
        assert!(!app.status_message.is_empty());

        // Past the target: back to plain clicks, no extra session
        let effect = update_at(&mut app, Action::Increment, NOW + 20);
        assert_eq!(effect, Effect::Persist(Some(Cue::Click)));
        assert_eq!(app.tracker.sessions.len(), 1);
    }

    #[test]
    fn test_decrement_at_zero_is_a_silent_noop() {
        let mut app = app();
        let effect = update_at(&mut app, Action::Decrement, NOW);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.tracker.total_count, 0);
    }

    #[test]
    fn test_decrement_persists_without_cue() {
        let mut app = app();
        update_at(&mut app, Action::Increment, NOW);
        let effect = update_at(&mut app, Action::Decrement, NOW);
        assert_eq!(effect, Effect::Persist(None));
        assert_eq!(app.tracker.current_count(), 0);
    }

    #[test]
    fn test_select_switches_and_persists() {
        let mut app = app();
        let effect = update_at(&mut app, Action::Select("custom".to_string()), NOW);
        assert_eq!(effect, Effect::Persist(None));
        assert_eq!(app.tracker.active, "custom");
        assert!(app.status_message.contains("Custom Dhikr"));
    }

    #[test]
    fn test_lowered_target_can_complete_a_cycle() {
        let mut app = app();
        for i in 0..10 {
            update_at(&mut app, Action::Increment, NOW + i);
        }
        let effect = update_at(&mut app, Action::SetTarget(5), NOW + 5000);
        assert_eq!(effect, Effect::Persist(Some(Cue::Complete)));
        assert_eq!(app.tracker.sessions.len(), 1);
        assert_eq!(app.tracker.sessions[0].count, 10);
        assert_eq!(app.tracker.sessions[0].target, 5);
    }

    #[test]
    fn test_reset_all_restores_pristine_state() {
        let mut app = app();
        update_at(&mut app, Action::Increment, NOW);
        update_at(&mut app, Action::SetTarget(7), NOW);
        let effect = update_at(&mut app, Action::ResetAll, NOW);
        assert_eq!(effect, Effect::Persist(None));
        assert_eq!(app.tracker, TrackerState::new());
    }

    #[test]
    fn test_profile_loaded_applies_preferences() {
        let mut app = app();
        let profile = UserProfile {
            id: "1".to_string(),
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            preferences: Preferences {
                audio_feedback: false,
                ..Preferences::default()
            },
        };
        let effect = update_at(&mut app, Action::ProfileLoaded(Some(profile)), NOW);
        assert_eq!(effect, Effect::None);
        assert!(!app.sound_on());
        assert_eq!(app.user_label(), "Demo User");
    }

    #[test]
    fn test_guest_profile_keeps_default_preferences() {
        let mut app = app();
        update_at(&mut app, Action::ProfileLoaded(None), NOW);
        assert_eq!(app.user_label(), "guest");
        assert!(app.sound_on());
    }

    #[test]
    fn test_content_actions_fill_panels_without_persisting() {
        let mut app = app();
        let effect = update_at(
            &mut app,
            Action::HijriLoaded(HijriDate {
                day: 4,
                month: "Ramadan".to_string(),
                year: 1447,
                formatted: "4 Ramadan, 1447 AH".to_string(),
            }),
            NOW,
        );
        assert_eq!(effect, Effect::None);
        assert!(app.hijri_date.is_some());
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert_eq!(update_at(&mut app, Action::Quit, NOW), Effect::Quit);
    }
}
