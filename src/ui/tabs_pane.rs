use crate::app::AppState;
use crate::domain::Day;
use crate::ui::styles::{active_tab_style, border_style, default_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Tab label with the number of tasks on that day
fn tab_title(day: Day, task_count: usize) -> Line<'static> {
    if task_count == 0 {
        Line::from(format!(" {} ", day.label()))
    } else {
        Line::from(format!(" {} ({}) ", day.label(), task_count))
    }
}

/// Render the day tabs
pub fn render_tabs_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let titles: Vec<Line> = Day::ALL
        .iter()
        .map(|day| tab_title(*day, app.day(*day).store.len()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active_day.index())
        .style(default_style())
        .highlight_style(active_tab_style())
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Dayboard ", title_style())),
        );

    f.render_widget(tabs, area);
}
