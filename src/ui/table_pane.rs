use crate::app::AppState;
use crate::domain::{DisplayRow, RowStyle};
use crate::ui::styles::{border_style, default_style, header_style, selected_style, title_style, urgent_style};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

/// Render the two-column task table of the active day
pub fn render_table_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let ctx = app.active();

    let header = Row::new(vec![
        Cell::from("Task"),
        Cell::from(Line::from("Time Left").alignment(Alignment::Right)),
    ])
    .style(header_style());

    let rows: Vec<Row> = ctx.table.rows().iter().map(create_task_row).collect();
    let title = format!(" {} · {} task(s) ", ctx.day, ctx.table.len());

    let table = Table::new(rows, [Constraint::Percentage(75), Constraint::Percentage(25)])
        .header(header)
        .highlight_style(selected_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(title, title_style())),
        );

    let mut state = TableState::default();
    state.select(ctx.table.selected_index());
    f.render_stateful_widget(table, area, &mut state);
}

/// Build one table row; urgent rows get the red background
fn create_task_row(row: &DisplayRow) -> Row<'static> {
    let style = match row.style {
        RowStyle::Urgent => urgent_style(),
        RowStyle::Normal => default_style(),
    };

    Row::new(vec![
        Cell::from(row.task.clone()),
        Cell::from(Line::from(row.time_left.to_string()).alignment(Alignment::Right)),
    ])
    .style(style)
}
