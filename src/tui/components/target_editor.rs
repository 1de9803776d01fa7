//! # TargetEditor Component
//!
//! Small centered modal for typing a new target for the active
//! category. Digits only; Enter commits, Esc cancels. Opens pre-filled
//! with the current target so Enter alone keeps it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Keeps typed targets within the i64 range the reducer accepts.
const MAX_DIGITS: usize = 7;

/// Persistent state for the target editor overlay.
pub struct TargetEditorState {
    pub buffer: String,
}

impl TargetEditorState {
    pub fn new(current_target: u32) -> Self {
        Self {
            buffer: current_target.to_string(),
        }
    }
}

impl EventHandler for TargetEditorState {
    type Event = TargetEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<TargetEvent> {
        match event {
            TuiEvent::Escape => Some(TargetEvent::Cancel),
            TuiEvent::Submit => match self.buffer.parse::<i64>() {
                Ok(value) => Some(TargetEvent::Commit(value)),
                Err(_) => Some(TargetEvent::Cancel),
            },
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            TuiEvent::InputChar(c) if c.is_ascii_digit() => {
                if self.buffer.len() < MAX_DIGITS {
                    self.buffer.push(*c);
                }
                None
            }
            _ => None,
        }
    }
}

/// Events emitted by the target editor.
pub enum TargetEvent {
    Commit(i64),
    Cancel,
}

/// Transient render wrapper for the target editor overlay.
pub struct TargetEditor<'a> {
    state: &'a TargetEditorState,
    category_name: &'a str,
}

impl<'a> TargetEditor<'a> {
    pub fn new(state: &'a TargetEditorState, category_name: &'a str) -> Self {
        Self {
            state,
            category_name,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_box(40, 5, area);
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::Green))
            .title(format!(" Target for {} ", self.category_name))
            .title_bottom(Line::from(" Enter Save  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));

        let input = Line::from(vec![
            Span::styled(
                self.state.buffer.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(Color::Green)),
        ]);
        frame.render_widget(
            Paragraph::new(input)
                .alignment(Alignment::Center)
                .block(block),
            overlay,
        );
    }
}

/// Center a fixed-size box within the outer rect, clamped to fit.
fn centered_box(width: u16, height: u16, outer: Rect) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_append_and_backspace_removes() {
        let mut state = TargetEditorState::new(33);
        assert_eq!(state.buffer, "33");
        state.handle_event(&TuiEvent::InputChar('0'));
        assert_eq!(state.buffer, "330");
        state.handle_event(&TuiEvent::Backspace);
        state.handle_event(&TuiEvent::Backspace);
        assert_eq!(state.buffer, "3");
    }

    #[test]
    fn test_non_digits_ignored() {
        let mut state = TargetEditorState::new(33);
        state.handle_event(&TuiEvent::InputChar('x'));
        state.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(state.buffer, "33");
    }

    #[test]
    fn test_submit_commits_parsed_value() {
        let mut state = TargetEditorState::new(33);
        state.handle_event(&TuiEvent::InputChar('0'));
        assert!(matches!(
            state.handle_event(&TuiEvent::Submit),
            Some(TargetEvent::Commit(330))
        ));
    }

    #[test]
    fn test_submit_on_empty_buffer_cancels() {
        let mut state = TargetEditorState::new(1);
        state.handle_event(&TuiEvent::Backspace);
        assert!(matches!(
            state.handle_event(&TuiEvent::Submit),
            Some(TargetEvent::Cancel)
        ));
    }

    #[test]
    fn test_buffer_length_capped() {
        let mut state = TargetEditorState::new(1);
        for _ in 0..20 {
            state.handle_event(&TuiEvent::InputChar('9'));
        }
        assert_eq!(state.buffer.len(), MAX_DIGITS);
    }
}
