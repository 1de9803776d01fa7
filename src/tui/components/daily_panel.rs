//! # DailyPanel Component
//!
//! Bottom panel showing the daily citation (hadith or ayah). Hidden
//! entirely when daily content is disabled; shows a loading line until
//! the background fetch delivers content.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::providers::DailyContent;
use crate::tui::component::Component;

pub struct DailyPanel {
    pub content: Option<DailyContent>,
}

impl DailyPanel {
    pub fn new(content: Option<DailyContent>) -> Self {
        Self { content }
    }
}

impl Component for DailyPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = self
            .content
            .as_ref()
            .map(|c| format!(" {} ", c.label()))
            .unwrap_or_else(|| " Daily ".to_string());
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title);

        let lines: Vec<Line> = match &self.content {
            None => vec![Line::from(Span::styled(
                "Loading daily content...",
                Style::default().fg(Color::DarkGray),
            ))],
            Some(DailyContent::Hadith {
                text,
                source,
                reference,
            }) => vec![
                Line::from(text.as_str()),
                Line::from(Span::styled(
                    format!("— {source}, {reference}"),
                    Style::default().fg(Color::DarkGray),
                ))
                .alignment(Alignment::Right),
            ],
            Some(DailyContent::Ayah {
                surah,
                ayah,
                text,
                translation,
            }) => vec![
                Line::from(text.as_str()).alignment(Alignment::Right),
                Line::from(translation.as_str()),
                Line::from(Span::styled(
                    format!("— {surah} {ayah}"),
                    Style::default().fg(Color::DarkGray),
                ))
                .alignment(Alignment::Right),
            ],
        };

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(panel: &mut DailyPanel) -> String {
        let backend = TestBackend::new(80, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| panel.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_loading_placeholder_before_fetch() {
        let mut panel = DailyPanel::new(None);
        let text = render_to_text(&mut panel);
        assert!(text.contains("Loading daily content"));
    }

    #[test]
    fn test_hadith_shows_source_and_reference() {
        let mut panel = DailyPanel::new(Some(DailyContent::Hadith {
            text: "Actions are judged by intentions.".to_string(),
            source: "Sahih al-Bukhari".to_string(),
            reference: "Book 1, Hadith 1".to_string(),
        }));
        let text = render_to_text(&mut panel);
        assert!(text.contains("Hadith of the Day"));
        assert!(text.contains("Actions are judged"));
        assert!(text.contains("Sahih al-Bukhari"));
    }

    #[test]
    fn test_ayah_shows_citation() {
        let mut panel = DailyPanel::new(Some(DailyContent::Ayah {
            surah: "Al-Baqarah".to_string(),
            ayah: 152,
            text: "فَاذْكُرُونِي أَذْكُرْكُمْ".to_string(),
            translation: "So remember Me; I will remember you.".to_string(),
        }));
        let text = render_to_text(&mut panel);
        assert!(text.contains("Ayah of the Day"));
        assert!(text.contains("Al-Baqarah 152"));
        assert!(text.contains("remember Me"));
    }
}
