//! The calendar table: one row per day of the current page.

use crate::state::App;
use crate::table::{Column, SortDirection};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let header_cells: Vec<Cell> = Column::ALL
        .iter()
        .map(|column| {
            let mut title = column.title().to_string();
            if let Some((active, direction)) = app.table.sort {
                if active == *column {
                    title.push_str(match direction {
                        SortDirection::Ascending => " ▲",
                        SortDirection::Descending => " ▼",
                    });
                }
            }
            let style = if *column == app.column_cursor {
                Style::default()
                    .fg(app.theme.border_focus)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(app.theme.text)
                    .add_modifier(Modifier::BOLD)
            };
            Cell::from(title).style(style)
        })
        .collect();
    let header = Row::new(header_cells).height(1);

    let page = app.page_record_indices();
    let rows: Vec<Row> = page
        .iter()
        .map(|&index| {
            let record = &app.records[index];
            let session = app.edit.as_ref().filter(|s| s.index == index);
            let cells: Vec<Cell> = Column::ALL
                .iter()
                .map(|column| match column {
                    Column::Actions => {
                        let label = if session.is_some() { "Save" } else { "Edit" };
                        Cell::from(label).style(Style::default().fg(app.theme.tertiary))
                    }
                    _ => match session {
                        Some(session) => {
                            let text = column.cell_text(&session.staged);
                            if session.field_column() == *column {
                                // Trailing cursor marks the field receiving input.
                                Cell::from(format!("{text}_")).style(
                                    Style::default()
                                        .fg(app.theme.primary)
                                        .add_modifier(Modifier::UNDERLINED),
                                )
                            } else {
                                Cell::from(text)
                                    .style(Style::default().fg(app.theme.secondary))
                            }
                        }
                        None => Cell::from(column.cell_text(record))
                            .style(Style::default().fg(app.theme.text)),
                    },
                })
                .collect();
            Row::new(cells).height(1)
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Min(14),
        Constraint::Length(15),
        Constraint::Min(20),
        Constraint::Min(14),
        Constraint::Min(12),
        Constraint::Min(11),
        Constraint::Length(7),
    ];

    let mut state = TableState::default();
    if !page.is_empty() {
        state.select(Some(app.selected_row.min(page.len() - 1)));
    }

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Calendar")
                .border_style(Style::default().fg(app.theme.border)),
        )
        .highlight_style(Style::default().bg(app.theme.bg_highlight));

    f.render_stateful_widget(table, area, &mut state);
}
