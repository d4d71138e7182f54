pub mod input_pane;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod styles;
pub mod table_pane;
pub mod tabs_pane;

use crate::app::AppState;
use input_pane::render_input_pane;
use keybindings::{render_action_bar, render_keybindings};
use layout::create_layout;
use modal::render_dialog;
use ratatui::Frame;
use table_pane::render_table_pane;
use tabs_pane::render_tabs_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_tabs_pane(f, app, layout.tabs_area);
    render_input_pane(f, app, layout.input_area);
    render_table_pane(f, app, layout.table_area);
    render_action_bar(f, layout.actions_area);

    // Dialogs draw on top of everything
    render_dialog(f, app, size);
}
