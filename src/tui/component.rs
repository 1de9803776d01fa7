use ratatui::{Frame, layout::Rect};

use crate::tui::event::TuiEvent;

/// A renderable region of the screen. Components are created each frame
/// with their props copied or borrowed from application state, so
/// `render` only needs the frame and the area to draw into.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Components that consume input while they have focus (overlays).
/// Returns `Some` when the event produced something the event loop
/// must act on, `None` when the event was absorbed or ignored.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
