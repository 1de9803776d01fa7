//! # Counter Component
//!
//! The main counting surface: Arabic script for the active dhikr, the
//! big count over target, a progress gauge, and the lifetime total.
//!
//! Arabic text is centered by display width rather than char count;
//! Arabic glyphs and the shaping forms terminals produce do not map
//! one-to-one to `char`s, so `unicode-width` does the measuring.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::tracker::TrackerState;
use crate::tui::component::Component;

pub struct Counter {
    name: String,
    arabic_text: String,
    count: u32,
    target: u32,
    progress: f64,
    total_count: u64,
}

impl Counter {
    pub fn new(tracker: &TrackerState) -> Self {
        let kind = tracker.active_kind();
        Self {
            name: kind.name.to_string(),
            arabic_text: kind.arabic_text.to_string(),
            count: tracker.current_count(),
            target: tracker.current_target(),
            progress: tracker.progress(),
            total_count: tracker.total_count,
        }
    }
}

/// Center `text` within `width` columns using its display width.
fn center_by_width(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width >= width {
        return text.to_string();
    }
    let pad = (width - text_width) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

impl Component for Counter {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.name))
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [arabic_area, _, count_area, _, gauge_area, total_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        let arabic = center_by_width(&self.arabic_text, inner.width as usize);
        frame.render_widget(
            Paragraph::new(arabic).style(Style::default().fg(Color::White)),
            arabic_area,
        );

        let count_line = Line::from(vec![
            Span::styled(
                format!("{}", self.count),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" / {}", self.target),
                Style::default().fg(Color::Gray),
            ),
        ])
        .centered();
        frame.render_widget(count_line, count_area);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
            .ratio(self.progress / 100.0)
            .label(format!("{:.0}%", self.progress));
        frame.render_widget(gauge, gauge_area);

        let total = Line::from(Span::styled(
            format!("Total dhikr: {}", self.total_count),
            Style::default().fg(Color::DarkGray),
        ))
        .centered();
        frame.render_widget(total, total_area);
    }
}
