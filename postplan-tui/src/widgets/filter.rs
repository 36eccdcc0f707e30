//! Filter bar widget.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct FilterEntry {
    pub label: String,
    pub value: String,
}

pub struct FilterBar<'a> {
    pub title: &'a str,
    pub filters: &'a [FilterEntry],
    /// Column title and in-progress text while the filter prompt is open.
    pub pending: Option<(&'a str, &'a str)>,
    pub active_style: Style,
    pub inactive_style: Style,
}

impl<'a> FilterBar<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans: Vec<Span> = self
            .filters
            .iter()
            .map(|filter| {
                Span::styled(
                    format!(" {}~\"{}\" ", filter.label, filter.value),
                    self.active_style,
                )
            })
            .collect();
        if let Some((column, input)) = self.pending {
            spans.push(Span::styled(
                format!(" {column}: {input}_"),
                self.active_style,
            ));
        }
        if spans.is_empty() {
            spans.push(Span::styled(" none ", self.inactive_style));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().title(self.title).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
