//! Pagination bar widget.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct PaginationBar<'a> {
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub total_rows: usize,
    /// Pending page-jump input, shown while the jump prompt is open.
    pub pending_input: Option<&'a str>,
    pub text_style: Style,
    pub accent_style: Style,
}

impl<'a> PaginationBar<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let page_display = if self.page_count == 0 {
            0
        } else {
            self.page_index + 1
        };
        let at_first = self.page_index == 0;
        let at_last = page_display >= self.page_count;

        let mut spans = vec![
            Span::styled(
                " |< < ".to_string(),
                if at_first {
                    self.text_style
                } else {
                    self.accent_style
                },
            ),
            Span::styled(
                format!("Page {} of {}", page_display, self.page_count),
                self.accent_style,
            ),
            Span::styled(
                " > >| ".to_string(),
                if at_last {
                    self.text_style
                } else {
                    self.accent_style
                },
            ),
            Span::styled(
                format!("| {} rows | Show {} ", self.total_rows, self.page_size),
                self.text_style,
            ),
        ];
        if let Some(input) = self.pending_input {
            spans.push(Span::styled(
                format!("| Go to page: {input}_"),
                self.accent_style,
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().title("Pages").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
