//! # TitleBar Component
//!
//! Single-line status bar at the top of the screen: app name, signed-in
//! user, hijri date (when loaded), and the current status message.
//!
//! Purely presentational. All fields are props copied from `App` each
//! frame, which keeps the component trivial to test with `TestBackend`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar {
    /// Display name of the current account, or "guest".
    pub user_label: String,
    /// Formatted hijri date, e.g. "4 Ramadan 1447 AH".
    pub hijri_date: Option<String>,
    /// Transient status (motivational message, confirmation prompt).
    pub status_message: String,
}

impl TitleBar {
    pub fn new(user_label: String, hijri_date: Option<String>, status_message: String) -> Self {
        Self {
            user_label,
            hijri_date,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Misbaha", Style::default().fg(Color::Green)),
            Span::raw(format!(" | {}", self.user_label)),
        ];
        if let Some(hijri) = &self.hijri_date {
            spans.push(Span::styled(
                format!(" | {hijri}"),
                Style::default().fg(Color::Cyan),
            ));
        }
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| title_bar.render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_shows_user_and_status() {
        let mut title_bar = TitleBar::new(
            "Demo User".to_string(),
            None,
            "Bismillah — press Space to count".to_string(),
        );
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Misbaha"));
        assert!(text.contains("Demo User"));
        assert!(text.contains("press Space"));
    }

    #[test]
    fn test_title_bar_shows_hijri_when_present() {
        let mut title_bar = TitleBar::new(
            "guest".to_string(),
            Some("4 Ramadan 1447 AH".to_string()),
            String::new(),
        );
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("4 Ramadan 1447 AH"));
        assert!(text.contains("guest"));
    }
}
