//! # History Component
//!
//! Full-screen overlay listing completed sessions, most recent first.
//! Opened with `h`, dismissed with Esc. Clearing the history requires
//! pressing `c` twice.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HistoryState` lives in `TuiState`
//! - `History` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState};

use crate::core::catalog;
use crate::core::tracker::Session;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Persistent state for the history overlay.
pub struct HistoryState {
    pub confirm_clear: bool,
    pub scroll_state: ScrollViewState,
}

impl HistoryState {
    pub fn new() -> Self {
        Self {
            confirm_clear: false,
            scroll_state: ScrollViewState::default(),
        }
    }
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for HistoryState {
    type Event = HistoryEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<HistoryEvent> {
        // Reset clear confirmation on any non-clear key
        let is_clear_key = matches!(event, TuiEvent::InputChar('c'));
        if !is_clear_key {
            self.confirm_clear = false;
        }

        match event {
            TuiEvent::Escape | TuiEvent::InputChar('h') => Some(HistoryEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::CursorDown => {
                self.scroll_state.scroll_down();
                None
            }
            TuiEvent::InputChar('c') => {
                if self.confirm_clear {
                    self.confirm_clear = false;
                    Some(HistoryEvent::Clear)
                } else {
                    self.confirm_clear = true;
                    None
                }
            }
            _ => None,
        }
    }
}

/// Events emitted by the history overlay.
pub enum HistoryEvent {
    Clear,
    Dismiss,
}

/// Transient render wrapper for the history overlay.
pub struct History<'a> {
    state: &'a mut HistoryState,
    sessions: &'a [Session],
}

impl<'a> History<'a> {
    pub fn new(state: &'a mut HistoryState, sessions: &'a [Session]) -> Self {
        Self { state, sessions }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 70, area);
        frame.render_widget(Clear, overlay);

        let help_text = if self.state.confirm_clear {
            " Press c again to clear all history | Esc Cancel "
        } else {
            " ↑/↓ Scroll  c Clear  Esc Back "
        };

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Completed Sessions ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        if self.sessions.is_empty() {
            let empty = Paragraph::new("No completed sessions yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let content_height = self.sessions.len() as u16;
        let mut scroll_view = ScrollView::new(Size::new(inner.width, content_height));

        for (i, session) in self.sessions.iter().enumerate() {
            let name = catalog::find_or_placeholder(&session.dhikr_id).name;
            let date = format_timestamp(session.timestamp);
            let line = Line::from(vec![
                Span::styled("✓ ", Style::default().fg(Color::Green)),
                Span::styled(
                    format!("{:<16}", name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{:>5} / {:<5}", session.count, session.target)),
                Span::styled(format!("  {date}"), Style::default().fg(Color::DarkGray)),
            ]);
            scroll_view.render_widget(
                line,
                Rect::new(0, i as u16, inner.width, 1),
            );
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

/// Format a millisecond timestamp as "Jan 15, 20:32" in local time.
fn format_timestamp(ts_millis: i64) -> String {
    use chrono::{DateTime, Local, Utc};
    let dt: DateTime<Local> = DateTime::<Utc>::from_timestamp_millis(ts_millis)
        .unwrap_or_default()
        .with_timezone(&Local);
    dt.format("%b %d, %H:%M").to_string()
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
