//! Per-channel post-count bar chart.

use crate::state::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{BarChart, Block, Borders},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let bar_data: Vec<(&str, u64)> = app
        .chart
        .iter()
        .map(|count| (count.channel.label(), count.count as u64))
        .collect();

    let barchart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(Span::styled(
            "Content Distribution",
            Style::default().fg(app.theme.primary),
        )))
        .data(&bar_data)
        .bar_width(11)
        .bar_gap(2)
        .bar_style(Style::default().fg(app.theme.secondary))
        .value_style(
            Style::default()
                .fg(app.theme.text)
                .bg(app.theme.secondary),
        );

    f.render_widget(barchart, area);
}
