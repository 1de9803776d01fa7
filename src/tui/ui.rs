use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CategoryTabs, Counter, DailyPanel, History, TargetEditor, TitleBar,
};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let show_daily = app.daily_panel_enabled();
    let mut constraints = vec![Length(1), Length(3), Min(9)];
    if show_daily {
        constraints.push(Length(6));
    }
    constraints.push(Length(1));
    let areas = Layout::vertical(constraints).split(frame.area());

    let mut title_bar = TitleBar::new(
        app.user_label().to_string(),
        app.hijri_enabled()
            .then(|| app.hijri_date.as_ref().map(|h| h.formatted.clone()))
            .flatten(),
        app.status_message.clone(),
    );
    title_bar.render(frame, areas[0]);

    CategoryTabs::new(&app.tracker).render(frame, areas[1]);
    Counter::new(&app.tracker).render(frame, areas[2]);

    if show_daily {
        DailyPanel::new(app.daily_content.clone()).render(frame, areas[3]);
    }

    draw_footer(frame, areas[areas.len() - 1]);

    // Overlays draw last, on top of everything
    if let Some(ref mut history) = tui.history {
        History::new(history, &app.tracker.sessions).render(frame, frame.area());
    }
    if let Some(ref editor) = tui.target_editor {
        TargetEditor::new(editor, app.tracker.active_kind().name).render(frame, frame.area());
    }
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let hints = " Space Count  - Undo  r Reset  t Target  h History  Tab/1-4 Switch  q Quit ";
    frame.render_widget(
        Line::from(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
