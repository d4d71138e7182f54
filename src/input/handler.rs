use crate::app::{AppState, Dialog};
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Handle keyboard input events, returns true when the app should quit
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Dialogs are modal: the one on screen takes every key
    if let Some(dialog) = app.current_dialog() {
        return match dialog {
            Dialog::Warning { .. } | Dialog::Info { .. } => handle_message_dialog(app, key),
            Dialog::Confirm { .. } => handle_confirm_dialog(app, key),
            Dialog::TimePrompt { .. } => handle_time_prompt(app, key),
        };
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::EditingInput => handle_input_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    let day = app.active_day;

    match key.code {
        // Day tabs
        KeyCode::Left | KeyCode::BackTab => app.prev_day(),
        KeyCode::Right | KeyCode::Tab => app.next_day(),

        // Row selection
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),

        // Focus the task input
        KeyCode::Char('i') | KeyCode::Char('a') => app.start_editing_input(),

        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => app.delete_task(day)?,
        KeyCode::Char('c') | KeyCode::Char('C') => app.request_clear_all(day),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter => {
            app.start_timer(day, Instant::now());
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),

        _ => {}
    }
    Ok(false)
}

/// Handle keys while typing a new task name
fn handle_input_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            let day = app.active_day;
            app.request_add_task(day);
        }
        KeyCode::Esc => app.stop_editing_input(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Warnings and the timer-done message only need acknowledging
fn handle_message_dialog(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_dialog();
    }
    Ok(false)
}

fn handle_confirm_dialog(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.answer_confirm(true)?,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.answer_confirm(false)?,
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the timer minutes prompt
fn handle_time_prompt(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.finish_time_prompt(true)?,
        KeyCode::Esc => app.finish_time_prompt(false)?,
        KeyCode::Backspace => app.prompt_backspace(),
        KeyCode::Char(c) => app.prompt_add_char(c),
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Day;
    use crate::persistence::TaskRecords;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tempfile::TempDir;

    fn create_test_app() -> (TempDir, AppState) {
        let temp_dir = tempfile::tempdir().unwrap();
        let records = TaskRecords::new(temp_dir.path());
        records
            .save(Day::Monday, &["Task 1".to_string(), "Task 2".to_string()])
            .unwrap();
        let app = AppState::load(records, Day::Monday).unwrap();
        (temp_dir, app)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_str(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_handle_navigation() {
        let (_dir, mut app) = create_test_app();
        assert_eq!(app.active().table.selected_index(), None);

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.active().table.selected_index(), Some(1));

        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.active().table.selected_index(), Some(0));

        handle_key(&mut app, key(KeyCode::Right)).unwrap();
        assert_eq!(app.active_day, Day::Tuesday);
        handle_key(&mut app, key(KeyCode::BackTab)).unwrap();
        assert_eq!(app.active_day, Day::Monday);
    }

    #[test]
    fn test_handle_quit() {
        let (_dir, mut app) = create_test_app();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(should_quit);
    }

    #[test]
    fn test_typing_q_in_input_does_not_quit() {
        let (_dir, mut app) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('i'))).unwrap();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();

        assert!(!should_quit);
        assert_eq!(app.active().input, "q");
    }

    #[test]
    fn test_handle_add_task() {
        let (_dir, mut app) = create_test_app();

        // Focus the input and type a name
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::EditingInput);
        type_str(&mut app, "New");

        // Enter opens the minutes prompt
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(matches!(app.current_dialog(), Some(Dialog::TimePrompt { .. })));

        type_str(&mut app, "25");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert!(app.current_dialog().is_none());
        assert_eq!(app.active().store.len(), 3);
        assert_eq!(app.active().store.remaining("New"), Some(25 * 60));
        assert_eq!(app.active().input, "");
        assert_eq!(app.ui_mode, UiMode::EditingInput);

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_handle_delete_with_delete_key() {
        let (_dir, mut app) = create_test_app();

        // Nothing selected: warning, then dismiss it
        handle_key(&mut app, key(KeyCode::Delete)).unwrap();
        assert!(matches!(app.current_dialog(), Some(Dialog::Warning { .. })));
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.current_dialog().is_none());

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        handle_key(&mut app, key(KeyCode::Delete)).unwrap();
        assert_eq!(app.active().store.names(), &["Task 2".to_string()]);
    }

    #[test]
    fn test_handle_clear_all() {
        let (_dir, mut app) = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('c'))).unwrap();
        // Unrelated keys leave the confirmation open
        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert!(matches!(app.current_dialog(), Some(Dialog::Confirm { .. })));

        handle_key(&mut app, key(KeyCode::Char('y'))).unwrap();
        assert!(app.active().store.is_empty());
    }

    #[test]
    fn test_handle_start_timer() {
        let (_dir, mut app) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('i'))).unwrap();
        type_str(&mut app, "Plank");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        type_str(&mut app, "2");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();

        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        handle_key(&mut app, key(KeyCode::Char('s'))).unwrap();

        assert_eq!(app.timers.chains_for(Day::Monday, "Plank"), 1);
        assert_eq!(app.active().time_left("Plank").unwrap().to_string(), "02:00");
    }
}
