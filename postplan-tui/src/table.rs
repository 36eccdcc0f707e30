//! Table controller: columns, sort, per-column filters, pagination.
//!
//! The controller never owns the records. `visible_indices` derives the
//! filtered-then-sorted view as record indices, and the page slice is cut
//! from that; both are recomputed on demand so there is no cached state to
//! fall out of sync.

use postplan_core::CalendarRecord;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Selectable page sizes, mirroring the page-size dropdown options.
pub const PAGE_SIZES: [usize; 5] = [10, 20, 30, 40, 50];

/// The nine table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Date,
    Day,
    Instagram,
    InstagramStory,
    Twitter,
    LinkedIn,
    Blog,
    Email,
    Actions,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::Date,
        Column::Day,
        Column::Instagram,
        Column::InstagramStory,
        Column::Twitter,
        Column::LinkedIn,
        Column::Blog,
        Column::Email,
        Column::Actions,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Column::Date => "Date",
            Column::Day => "Day",
            Column::Instagram => "Instagram",
            Column::InstagramStory => "Instagram Story",
            Column::Twitter => "Twitter",
            Column::LinkedIn => "LinkedIn",
            Column::Blog => "Blog",
            Column::Email => "Email",
            Column::Actions => "Actions",
        }
    }

    /// Actions has no backing data and cannot be sorted or filtered.
    pub fn is_sortable(&self) -> bool {
        *self != Column::Actions
    }

    pub fn is_filterable(&self) -> bool {
        *self != Column::Actions
    }

    /// Display text for this column's cell of the given record.
    pub fn cell_text(&self, record: &CalendarRecord) -> String {
        match self {
            Column::Date => record.date.format("%Y-%m-%d").to_string(),
            Column::Day => record.day_label(),
            Column::Instagram => record.instagram_post.clone(),
            Column::InstagramStory => record.instagram_story.clone(),
            Column::Twitter => record.twitter_posts.clone(),
            Column::LinkedIn => record.linkedin_post.clone(),
            Column::Blog => record.blog_post.clone(),
            Column::Email => record.email_content.clone(),
            Column::Actions => String::new(),
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or(0)
    }

    pub fn next(&self) -> Column {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Column {
        let idx = self.index();
        let prev = if idx == 0 { Self::ALL.len() - 1 } else { idx - 1 };
        Self::ALL[prev]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sort, filter, and pagination state over a record collection.
#[derive(Debug, Clone)]
pub struct TableController {
    pub sort: Option<(Column, SortDirection)>,
    pub filters: HashMap<Column, String>,
    pub page_index: usize,
    pub page_size: usize,
}

impl TableController {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: None,
            filters: HashMap::new(),
            page_index: 0,
            page_size,
        }
    }

    /// Cycle the sort on `column`: ascending, then descending, then none.
    /// Toggling a different column starts over at ascending.
    pub fn toggle_sort(&mut self, column: Column) {
        if !column.is_sortable() {
            return;
        }
        self.sort = match self.sort {
            Some((active, SortDirection::Ascending)) if active == column => {
                Some((column, SortDirection::Descending))
            }
            Some((active, SortDirection::Descending)) if active == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    /// Set a case-insensitive substring filter; empty text clears it.
    pub fn set_filter(&mut self, column: Column, text: &str) {
        if !column.is_filterable() {
            return;
        }
        if text.is_empty() {
            self.filters.remove(&column);
        } else {
            self.filters.insert(column, text.to_string());
        }
    }

    pub fn filter_for(&self, column: Column) -> &str {
        self.filters.get(&column).map(String::as_str).unwrap_or("")
    }

    fn matches_filters(&self, record: &CalendarRecord) -> bool {
        self.filters.iter().all(|(column, needle)| {
            column
                .cell_text(record)
                .to_lowercase()
                .contains(&needle.to_lowercase())
        })
    }

    /// Record indices after filtering and sorting, in display order.
    pub fn visible_indices(&self, records: &[CalendarRecord]) -> Vec<usize> {
        let mut indices: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches_filters(record))
            .map(|(i, _)| i)
            .collect();
        if let Some((column, direction)) = self.sort {
            indices.sort_by(|&a, &b| {
                let ordering = compare_column(column, &records[a], &records[b]);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        indices
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Clamp `page` into `[0, page_count - 1]` and go there.
    pub fn goto_page(&mut self, page: usize, total: usize) {
        let page_count = self.page_count(total);
        self.page_index = if page_count == 0 {
            0
        } else {
            page.min(page_count - 1)
        };
    }

    /// No-op on the last page.
    pub fn next_page(&mut self, total: usize) {
        let page_count = self.page_count(total);
        if page_count > 0 && self.page_index + 1 < page_count {
            self.page_index += 1;
        }
    }

    /// No-op on page 0.
    pub fn prev_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn last_page(&mut self, total: usize) {
        let page_count = self.page_count(total);
        self.page_index = page_count.saturating_sub(1);
    }

    /// Switch page size, keeping the page index in range.
    pub fn set_page_size(&mut self, size: usize, total: usize) {
        if !PAGE_SIZES.contains(&size) {
            return;
        }
        self.page_size = size;
        self.goto_page(self.page_index, total);
    }

    pub fn cycle_page_size(&mut self, total: usize) {
        let current = PAGE_SIZES
            .iter()
            .position(|&s| s == self.page_size)
            .unwrap_or(0);
        let next = PAGE_SIZES[(current + 1) % PAGE_SIZES.len()];
        self.set_page_size(next, total);
    }

    /// Slice of `visible` covering the current page.
    pub fn page_rows<'a>(&self, visible: &'a [usize]) -> &'a [usize] {
        let start = self.page_index * self.page_size;
        if start >= visible.len() {
            return &[];
        }
        let end = (start + self.page_size).min(visible.len());
        &visible[start..end]
    }
}

/// Parse a 1-based page-jump input. Anything non-numeric lands on page 0.
pub fn parse_page_input(input: &str) -> usize {
    input
        .trim()
        .parse::<usize>()
        .map(|n| n.saturating_sub(1))
        .unwrap_or(0)
}

fn compare_column(column: Column, a: &CalendarRecord, b: &CalendarRecord) -> Ordering {
    match column {
        Column::Date => a.date.cmp(&b.date),
        _ => column.cell_text(a).cmp(&column.cell_text(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postplan_core::{default_start_date, generate_calendar};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_records() -> Vec<CalendarRecord> {
        let mut rng = StdRng::seed_from_u64(1);
        generate_calendar(default_start_date(), &mut rng)
    }

    #[test]
    fn test_column_titles_and_order() {
        let titles: Vec<&str> = Column::ALL.iter().map(|c| c.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Date",
                "Day",
                "Instagram",
                "Instagram Story",
                "Twitter",
                "LinkedIn",
                "Blog",
                "Email",
                "Actions"
            ]
        );
    }

    #[test]
    fn test_sort_cycles_asc_desc_none() {
        let mut table = TableController::new(10);
        table.toggle_sort(Column::Day);
        assert_eq!(table.sort, Some((Column::Day, SortDirection::Ascending)));
        table.toggle_sort(Column::Day);
        assert_eq!(table.sort, Some((Column::Day, SortDirection::Descending)));
        table.toggle_sort(Column::Day);
        assert_eq!(table.sort, None);
    }

    #[test]
    fn test_sort_switch_column_restarts_ascending() {
        let mut table = TableController::new(10);
        table.toggle_sort(Column::Day);
        table.toggle_sort(Column::Day);
        table.toggle_sort(Column::Email);
        assert_eq!(table.sort, Some((Column::Email, SortDirection::Ascending)));
    }

    #[test]
    fn test_actions_column_not_sortable() {
        let mut table = TableController::new(10);
        table.toggle_sort(Column::Actions);
        assert_eq!(table.sort, None);
    }

    #[test]
    fn test_unsorted_view_keeps_date_order() {
        let records = sample_records();
        let table = TableController::new(10);
        let visible = table.visible_indices(&records);
        assert_eq!(visible, (0..records.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_date_sort_descending_reverses() {
        let records = sample_records();
        let mut table = TableController::new(10);
        table.toggle_sort(Column::Date);
        table.toggle_sort(Column::Date);
        let visible = table.visible_indices(&records);
        assert_eq!(visible, (0..records.len()).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_day_sort_groups_labels() {
        let records = sample_records();
        let mut table = TableController::new(10);
        table.toggle_sort(Column::Day);
        let visible = table.visible_indices(&records);
        let labels: Vec<String> = visible.iter().map(|&i| records[i].day_label()).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let records = sample_records();
        let mut table = TableController::new(10);
        table.set_filter(Column::Day, "MON");
        let visible = table.visible_indices(&records);
        // January 2024: Mondays on the 1st, 8th, 15th, 22nd, 29th.
        assert_eq!(visible.len(), 5);
        assert!(visible
            .iter()
            .all(|&i| records[i].day_label() == "Monday"));
    }

    #[test]
    fn test_empty_filter_clears() {
        let mut table = TableController::new(10);
        table.set_filter(Column::Day, "Mon");
        table.set_filter(Column::Day, "");
        assert!(table.filters.is_empty());
    }

    #[test]
    fn test_page_count_rounds_up() {
        let table = TableController::new(10);
        assert_eq!(table.page_count(30), 3);
        assert_eq!(table.page_count(31), 4);
        assert_eq!(table.page_count(0), 0);
    }

    #[test]
    fn test_goto_page_clamps() {
        let mut table = TableController::new(10);
        table.goto_page(99, 30);
        assert_eq!(table.page_index, 2);
        table.goto_page(1, 30);
        assert_eq!(table.page_index, 1);
        table.goto_page(5, 0);
        assert_eq!(table.page_index, 0);
    }

    #[test]
    fn test_next_and_prev_page_are_noops_at_bounds() {
        let mut table = TableController::new(10);
        table.prev_page();
        assert_eq!(table.page_index, 0);
        table.goto_page(2, 30);
        table.next_page(30);
        assert_eq!(table.page_index, 2);
    }

    #[test]
    fn test_goto_then_next_stays_on_last_page() {
        let mut table = TableController::new(10);
        table.goto_page(2, 30);
        table.next_page(30);
        assert_eq!(table.page_index, 2);
    }

    #[test]
    fn test_set_page_size_20_splits_30_records() {
        let records = sample_records();
        let mut table = TableController::new(10);
        table.set_page_size(20, records.len());
        assert_eq!(table.page_count(records.len()), 2);

        let visible = table.visible_indices(&records);
        assert_eq!(table.page_rows(&visible).len(), 20);
        table.goto_page(1, records.len());
        assert_eq!(table.page_rows(&visible).len(), 10);
    }

    #[test]
    fn test_set_page_size_rejects_unknown_size() {
        let mut table = TableController::new(10);
        table.set_page_size(15, 30);
        assert_eq!(table.page_size, 10);
    }

    #[test]
    fn test_set_page_size_reclamps_page_index() {
        let mut table = TableController::new(10);
        table.goto_page(2, 30);
        table.set_page_size(30, 30);
        assert_eq!(table.page_index, 0);
    }

    #[test]
    fn test_cycle_page_size_walks_the_options() {
        let mut table = TableController::new(10);
        for expected in [20, 30, 40, 50, 10] {
            table.cycle_page_size(30);
            assert_eq!(table.page_size, expected);
        }
    }

    #[test]
    fn test_parse_page_input() {
        assert_eq!(parse_page_input("3"), 2);
        assert_eq!(parse_page_input(" 1 "), 0);
        assert_eq!(parse_page_input("abc"), 0);
        assert_eq!(parse_page_input(""), 0);
        assert_eq!(parse_page_input("0"), 0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_goto_page_lands_in_bounds(
                page in any::<usize>(),
                total in 0usize..500,
                size_idx in 0usize..PAGE_SIZES.len(),
            ) {
                let mut table = TableController::new(PAGE_SIZES[size_idx]);
                table.goto_page(page, total);
                let page_count = table.page_count(total);
                if page_count == 0 {
                    prop_assert_eq!(table.page_index, 0);
                } else {
                    prop_assert!(table.page_index < page_count);
                }
            }

            #[test]
            fn prop_next_prev_never_escape_bounds(
                start in 0usize..50,
                total in 1usize..500,
                steps in proptest::collection::vec(any::<bool>(), 0..40),
            ) {
                let mut table = TableController::new(10);
                table.goto_page(start, total);
                for forward in steps {
                    if forward {
                        table.next_page(total);
                    } else {
                        table.prev_page();
                    }
                    prop_assert!(table.page_index < table.page_count(total));
                }
            }
        }
    }

    #[test]
    fn test_filter_shrinks_pagination() {
        let records = sample_records();
        let mut table = TableController::new(10);
        table.set_filter(Column::Blog, "a");
        let visible = table.visible_indices(&records);
        assert!(visible.len() <= 5);
        assert_eq!(
            table.page_count(visible.len()),
            visible.len().div_ceil(10)
        );
    }
}
