use crate::ui::styles::{button_style, hint_style, ADD_BUTTON, CLEAR_BUTTON, DELETE_BUTTON, START_BUTTON};
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ←/→ day   "),
        Span::raw("↑/↓ select   "),
        Span::raw("i type task   "),
        Span::raw("d delete   "),
        Span::raw("c clear all   "),
        Span::raw("s start timer   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}

/// Render the coloured action buttons below the table
pub fn render_action_bar(f: &mut Frame, area: Rect) {
    let buttons = Line::from(vec![
        Span::raw(" "),
        Span::styled(" [i] Add Task ", button_style(ADD_BUTTON)),
        Span::raw("  "),
        Span::styled(" [d] Delete Task ", button_style(DELETE_BUTTON)),
        Span::raw("  "),
        Span::styled(" [c] Clear All ", button_style(CLEAR_BUTTON)),
        Span::raw("  "),
        Span::styled(" [s] Start Timer ", button_style(START_BUTTON)),
    ]);

    f.render_widget(Paragraph::new(buttons), area);
}
