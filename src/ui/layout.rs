use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub tabs_area: Rect,
    pub input_area: Rect,
    pub table_area: Rect,
    pub actions_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Day tabs (3 rows)
/// - Task input (3 rows)
/// - Task table (rest)
/// - Action buttons (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Tabs
            Constraint::Length(3), // Input
            Constraint::Min(0),    // Table
            Constraint::Length(1), // Actions
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        tabs_area: chunks[1],
        input_area: chunks[2],
        table_area: chunks[3],
        actions_area: chunks[4],
    }
}

/// Create centered modal area
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(10),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.tabs_area.height, 3);
        assert_eq!(layout.input_area.height, 3);
        assert_eq!(layout.actions_area.height, 1);
        assert!(layout.table_area.height > 0);
        assert!(layout.actions_area.y > layout.table_area.y);
    }

    #[test]
    fn test_modal_area_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let modal = create_modal_area(area);

        assert!(modal.height > 0);
        assert_eq!(modal.width, 60);
        assert_eq!(modal.x, 20);
    }
}
