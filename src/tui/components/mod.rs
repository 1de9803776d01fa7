//! TUI components. Stateless components hold props copied from `App`
//! each frame; overlays keep persistent state in `TuiState` and render
//! through a transient wrapper.

pub mod category_tabs;
pub mod counter;
pub mod daily_panel;
pub mod history;
pub mod target_editor;
pub mod title_bar;

pub use category_tabs::CategoryTabs;
pub use counter::Counter;
pub use daily_panel::DailyPanel;
pub use history::{History, HistoryEvent, HistoryState};
pub use target_editor::{TargetEditor, TargetEditorState, TargetEvent};
pub use title_bar::TitleBar;
