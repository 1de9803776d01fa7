//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! Counting logic lives in `core`; background fetches send actions over
//! an mpsc channel that the loop drains between draws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, warn};
use std::sync::{Arc, mpsc};

use crate::core::action::{Action, Cue, Effect, update};
use crate::core::catalog::DHIKR_KINDS;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::store::{self, CachedContent};
use crate::feedback::{FeedbackEmitter, NullFeedback, ToneFeedback};
use crate::providers::{
    AccountProvider, AladhanContentProvider, ContentProvider, MockAccountProvider,
    MockContentProvider,
};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    HistoryEvent, HistoryState, TargetEditorState, TargetEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// History overlay (None = hidden)
    pub history: Option<HistoryState>,
    /// Target editor overlay (None = hidden)
    pub target_editor: Option<TargetEditorState>,
    /// Armed by the first press of R; the second press resets everything.
    pub confirm_reset_all: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            history: None,
            target_editor: None,
            confirm_reset_all: false,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a content provider from a resolved config's provider name.
pub fn build_content_provider(config: &ResolvedConfig) -> Arc<dyn ContentProvider> {
    match config.content_provider.as_str() {
        "aladhan" => Arc::new(AladhanContentProvider::new(
            Some(config.aladhan_base_url.clone()),
            Some(config.quran_base_url.clone()),
        )),
        // Default to the offline fixtures
        _ => Arc::new(MockContentProvider),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    app.tracker = store::load_state();
    let mut tui = TuiState::new();

    let feedback: Box<dyn FeedbackEmitter> = if config.audio_enabled {
        Box::new(ToneFeedback::spawn())
    } else {
        Box::new(NullFeedback)
    };

    let mut terminal = ratatui::init();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    spawn_profile_fetch(tx.clone());
    spawn_content_fetch(
        &config,
        app.show_daily_content,
        app.show_hijri_date,
        tx.clone(),
    );

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Reset-all confirmation disarms on any key except R
            if !matches!(event, TuiEvent::InputChar('R')) && tui.confirm_reset_all {
                tui.confirm_reset_all = false;
                app.status_message.clear();
            }

            // When the target editor is open, route all events to it
            if let Some(ref mut editor) = tui.target_editor {
                if let Some(target_event) = editor.handle_event(&event) {
                    match target_event {
                        TargetEvent::Commit(value) => {
                            let effect = update(&mut app, Action::SetTarget(value));
                            should_quit |= dispatch(effect, &app, feedback.as_ref());
                        }
                        TargetEvent::Cancel => {}
                    }
                    tui.target_editor = None;
                }
                continue;
            }

            // Same for the history overlay
            if let Some(ref mut history) = tui.history {
                if let Some(history_event) = history.handle_event(&event) {
                    match history_event {
                        HistoryEvent::Clear => {
                            let effect = update(&mut app, Action::ClearSessions);
                            should_quit |= dispatch(effect, &app, feedback.as_ref());
                        }
                        HistoryEvent::Dismiss => {
                            tui.history = None;
                        }
                    }
                }
                continue;
            }

            // Counting mode
            let effect = match event {
                TuiEvent::InputChar(' ') | TuiEvent::Submit | TuiEvent::InputChar('+') => {
                    update(&mut app, Action::Increment)
                }
                TuiEvent::InputChar('-') | TuiEvent::Backspace => {
                    update(&mut app, Action::Decrement)
                }
                TuiEvent::InputChar('r') => update(&mut app, Action::ResetActive),
                TuiEvent::InputChar('R') => {
                    if tui.confirm_reset_all {
                        tui.confirm_reset_all = false;
                        update(&mut app, Action::ResetAll)
                    } else {
                        tui.confirm_reset_all = true;
                        app.status_message =
                            "Press R again to reset ALL counts and history".to_string();
                        Effect::None
                    }
                }
                TuiEvent::Tab => {
                    let current = DHIKR_KINDS
                        .iter()
                        .position(|kind| kind.id == app.tracker.active)
                        .unwrap_or(0);
                    let next = DHIKR_KINDS[(current + 1) % DHIKR_KINDS.len()].id;
                    update(&mut app, Action::Select(next.to_string()))
                }
                TuiEvent::InputChar(c @ '1'..='4') => {
                    let index = c as usize - '1' as usize;
                    match DHIKR_KINDS.get(index) {
                        Some(kind) => update(&mut app, Action::Select(kind.id.to_string())),
                        None => Effect::None,
                    }
                }
                TuiEvent::InputChar('t') => {
                    tui.target_editor =
                        Some(TargetEditorState::new(app.tracker.current_target()));
                    Effect::None
                }
                TuiEvent::InputChar('h') => {
                    tui.history = Some(HistoryState::new());
                    Effect::None
                }
                TuiEvent::InputChar('q') | TuiEvent::Escape => update(&mut app, Action::Quit),
                _ => Effect::None,
            };
            should_quit |= dispatch(effect, &app, feedback.as_ref());
        }

        if should_quit {
            break;
        }

        // Handle background task actions (profile + content fetches)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if dispatch(effect, &app, feedback.as_ref()) {
                break;
            }
        }
    }

    // Counts survive restarts even if the last action's persist was missed
    store::save_state(&app.tracker);

    ratatui::restore();
    Ok(())
}

/// Perform the I/O an effect asks for. Returns true when the loop should exit.
fn dispatch(effect: Effect, app: &App, feedback: &dyn FeedbackEmitter) -> bool {
    match effect {
        Effect::None => false,
        Effect::Persist(cue) => {
            if app.sound_on() {
                match cue {
                    Some(Cue::Click) => feedback.play_click(),
                    Some(Cue::Complete) => feedback.play_complete(),
                    None => {}
                }
            }
            store::save_state(&app.tracker);
            false
        }
        Effect::Quit => true,
    }
}

fn spawn_profile_fetch(tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        let provider = MockAccountProvider::demo();
        match provider.current_user().await {
            Ok(user) => {
                let _ = tx.send(Action::ProfileLoaded(user));
            }
            Err(e) => warn!("Account lookup failed via {}: {}", provider.name(), e),
        }
    });
}

/// Fetch the daily citation and hijri date, serving today's cache when it
/// has them. Each piece fails independently; its panel just stays empty.
fn spawn_content_fetch(
    config: &ResolvedConfig,
    want_content: bool,
    want_hijri: bool,
    tx: mpsc::Sender<Action>,
) {
    if !want_content && !want_hijri {
        return;
    }
    let provider = build_content_provider(config);
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    tokio::spawn(async move {
        let mut cached = store::load_cached_content(&today).unwrap_or(CachedContent {
            date: today,
            content: None,
            hijri: None,
        });
        let mut dirty = false;

        if want_content {
            if cached.content.is_none() {
                match provider.daily_content().await {
                    Ok(content) => {
                        cached.content = Some(content);
                        dirty = true;
                    }
                    Err(e) => warn!("Daily content fetch failed via {}: {}", provider.name(), e),
                }
            }
            if let Some(content) = cached.content.clone() {
                let _ = tx.send(Action::ContentLoaded(content));
            }
        }

        if want_hijri {
            if cached.hijri.is_none() {
                match provider.hijri_date().await {
                    Ok(hijri) => {
                        cached.hijri = Some(hijri);
                        dirty = true;
                    }
                    Err(e) => warn!("Hijri date fetch failed via {}: {}", provider.name(), e),
                }
            }
            if let Some(hijri) = cached.hijri.clone() {
                let _ = tx.send(Action::HijriLoaded(hijri));
            }
        }

        if dirty {
            store::save_cached_content(&cached);
        }
    });
}
