//! # CategoryTabs Component
//!
//! Tab row for switching between dhikr categories. Each tab shows the
//! category name plus its current count so progress is visible without
//! selecting the tab.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Tabs};

use crate::core::catalog::DHIKR_KINDS;
use crate::core::tracker::TrackerState;
use crate::tui::component::Component;

pub struct CategoryTabs {
    titles: Vec<String>,
    selected: usize,
}

impl CategoryTabs {
    pub fn new(tracker: &TrackerState) -> Self {
        let titles = DHIKR_KINDS
            .iter()
            .map(|kind| format!("{} ({})", kind.name, tracker.count_for(kind.id)))
            .collect();
        let selected = DHIKR_KINDS
            .iter()
            .position(|kind| kind.id == tracker.active)
            .unwrap_or(0);
        Self { titles, selected }
    }
}

impl Component for CategoryTabs {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let tabs = Tabs::new(self.titles.iter().map(|t| Line::from(t.as_str())))
            .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)))
            .select(self.selected)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }
}
