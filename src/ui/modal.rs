use crate::app::{AppState, Dialog};
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Title and body lines of a dialog
fn dialog_content(dialog: &Dialog) -> (String, Style, Vec<Line<'static>>) {
    match dialog {
        Dialog::Warning { title, message } => (
            format!(" ⚠ {} ", title),
            error_style(),
            vec![
                Line::raw(""),
                Line::raw(format!("  {}", message)),
                Line::raw(""),
                Line::from(vec![
                    Span::styled("  [Enter]", modal_title_style()),
                    Span::raw(" OK"),
                ]),
            ],
        ),
        Dialog::Info { title, message } => (
            format!(" ⏰ {} ", title),
            modal_title_style(),
            vec![
                Line::raw(""),
                Line::raw(format!("  {}", message)),
                Line::raw(""),
                Line::from(vec![
                    Span::styled("  [Enter]", modal_title_style()),
                    Span::raw(" OK"),
                ]),
            ],
        ),
        Dialog::Confirm { title, message, .. } => (
            format!(" {} ", title),
            modal_title_style(),
            vec![
                Line::raw(""),
                Line::raw(format!("  {}", message)),
                Line::raw(""),
                Line::from(vec![
                    Span::styled("  [y]", modal_title_style()),
                    Span::raw(" Yes  "),
                    Span::styled("[n]", modal_title_style()),
                    Span::raw(" No"),
                ]),
            ],
        ),
        Dialog::TimePrompt { task, buffer, .. } => (
            " Task Timer ".to_string(),
            modal_title_style(),
            vec![
                Line::raw(""),
                Line::raw(format!("  Task: {}", task)),
                Line::raw("  Enter time in minutes (0 for no timer):"),
                Line::from(vec![
                    Span::raw("  > "),
                    Span::styled(buffer.clone(), modal_title_style()),
                    Span::styled("█", modal_title_style()), // Cursor
                ]),
                Line::raw(""),
                Line::raw("  Enter to confirm  ·  Esc to cancel"),
            ],
        ),
    }
}

/// Render the dialog at the front of the queue, if any
pub fn render_dialog(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(dialog) = app.current_dialog() else {
        return;
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let (title, title_style, lines) = dialog_content(dialog);
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, title_style))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Day;

    #[test]
    fn test_prompt_content_shows_buffer() {
        let dialog = Dialog::TimePrompt {
            day: Day::Monday,
            task: "Pushups".to_string(),
            buffer: "15".to_string(),
        };
        let (title, _, lines) = dialog_content(&dialog);

        assert_eq!(title, " Task Timer ");
        let body = format!("{:?}", lines);
        assert!(body.contains("Pushups"));
        assert!(body.contains("15"));
    }

    #[test]
    fn test_warning_content() {
        let dialog = Dialog::Warning {
            title: "No Selection",
            message: "Please select a task to delete!".to_string(),
        };
        let (title, style, lines) = dialog_content(&dialog);

        assert!(title.contains("No Selection"));
        assert_eq!(style, error_style());
        assert!(format!("{:?}", lines).contains("Please select a task to delete!"));
    }
}
