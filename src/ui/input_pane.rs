use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, editing_border_style, hint_style, modal_title_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the task name input of the active day
pub fn render_input_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let editing = app.ui_mode == UiMode::EditingInput && app.current_dialog().is_none();
    let input = &app.active().input;

    let line = if input.is_empty() && !editing {
        Line::from(Span::styled("press i to type a task", hint_style()))
    } else {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(input.as_str(), modal_title_style()),
            if editing {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ])
    };

    let title = if editing {
        " New Task (Enter to add, Esc to leave) "
    } else {
        " New Task "
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if editing { editing_border_style() } else { border_style() })
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}
