//! Keybinding reference overlay.

use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Row, Table},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App) {
    let area = centered_rect(60, 60, f.size());
    f.render_widget(Clear, area);

    let rows = vec![
        Row::new(vec!["j / k, ↓ / ↑", "Move row selection"]),
        Row::new(vec!["h / l, ← / →", "Move column cursor"]),
        Row::new(vec!["s", "Sort column (asc → desc → off)"]),
        Row::new(vec!["n / p", "Next / previous page"]),
        Row::new(vec!["g / G", "First / last page"]),
        Row::new(vec![":", "Jump to page"]),
        Row::new(vec!["/", "Filter column"]),
        Row::new(vec!["z", "Cycle page size (10-50)"]),
        Row::new(vec!["e, Enter", "Edit selected row"]),
        Row::new(vec!["Tab / Shift-Tab", "Next / previous field (editing)"]),
        Row::new(vec!["Enter", "Save row (editing)"]),
        Row::new(vec!["r", "Regenerate calendar"]),
        Row::new(vec!["Esc", "Cancel / close"]),
        Row::new(vec!["q, Ctrl-C", "Quit"]),
    ];

    let table = Table::new(
        rows,
        [Constraint::Length(18), Constraint::Min(24)],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Keybindings")
            .border_style(Style::default().fg(app.theme.border_focus)),
    )
    .style(Style::default().fg(app.theme.text));

    f.render_widget(table, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
