//! View rendering dispatch and chrome.

pub mod calendar;
pub mod chart;
pub mod help;

use crate::keys::InputMode;
use crate::notifications::NotificationLevel;
use crate::state::App;
use crate::widgets::{FilterBar, FilterEntry, PaginationBar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(10),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);
    chart::render(f, app, layout[1]);
    calendar::render(f, app, layout[2]);
    render_control_bar(f, app, layout[3]);
    render_footer(f, app, layout[4]);

    if app.help_visible {
        help::render(f, app);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let title = format!(
        "postplan | Social Media Content Calendar | 30 days from {}",
        app.config.start_date.format("%Y-%m-%d")
    );
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        title,
        Style::default().fg(app.theme.primary),
    ));
    f.render_widget(block, area);
}

fn render_control_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let visible = app.visible_indices();
    let pagination = PaginationBar {
        page_index: app.table.page_index,
        page_count: app.table.page_count(visible.len()),
        page_size: app.table.page_size,
        total_rows: visible.len(),
        pending_input: (app.mode == InputMode::PageInput).then_some(app.input_buffer.as_str()),
        text_style: Style::default().fg(app.theme.text_dim),
        accent_style: Style::default().fg(app.theme.primary),
    };
    pagination.render(f, chunks[0]);

    let entries: Vec<FilterEntry> = crate::table::Column::ALL
        .iter()
        .filter_map(|column| {
            let value = app.table.filter_for(*column);
            (!value.is_empty()).then(|| FilterEntry {
                label: column.title().to_string(),
                value: value.to_string(),
            })
        })
        .collect();
    let filter_bar = FilterBar {
        title: "Filters",
        filters: &entries,
        pending: (app.mode == InputMode::FilterInput)
            .then_some((app.column_cursor.title(), app.input_buffer.as_str())),
        active_style: Style::default().fg(app.theme.tertiary),
        inactive_style: Style::default().fg(app.theme.text_muted),
    };
    filter_bar.render(f, chunks[1]);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = match app.mode {
        InputMode::Browse => {
            "j/k rows • h/l columns • s sort • n/p page • : goto • / filter • z size • e edit • r reroll • ? help • q quit"
        }
        InputMode::EditingField => {
            "type to edit • Tab/Shift-Tab field • Enter save • Esc cancel • ↑/↓ switch row"
        }
        InputMode::PageInput => "page number • Enter go • Esc cancel",
        InputMode::FilterInput => "filter text • Enter apply (empty clears) • Esc cancel",
    };
    let (text, style) = if let Some(note) = app.notifications.last() {
        let label = match note.level {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "SUCCESS",
        };
        let color = match note.level {
            NotificationLevel::Info => app.theme.info,
            NotificationLevel::Warning => app.theme.warning,
            NotificationLevel::Error => app.theme.error,
            NotificationLevel::Success => app.theme.success,
        };
        (
            format!("{}: {} | {}", label, note.message, help),
            Style::default().fg(color),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text).style(style);
    f.render_widget(footer, area);
}
