//! Single-slot row editing.
//!
//! At most one row is editable at a time. The session stages a copy of the
//! record; the underlying collection is untouched until save. Beginning an
//! edit on another row replaces the session and drops the old staged values
//! without a prompt.

use crate::table::Column;
use postplan_core::CalendarRecord;

/// The six editable content fields, in tab order. Date and day are the
/// row's identity and stay read-only.
pub const EDITABLE_COLUMNS: [Column; 6] = [
    Column::Instagram,
    Column::InstagramStory,
    Column::Twitter,
    Column::LinkedIn,
    Column::Blog,
    Column::Email,
];

#[derive(Debug, Clone)]
pub struct EditSession {
    /// Index into the underlying record collection (not the visible page).
    pub index: usize,
    pub staged: CalendarRecord,
    /// Position in [`EDITABLE_COLUMNS`].
    pub field: usize,
}

impl EditSession {
    pub fn begin(index: usize, record: &CalendarRecord) -> Self {
        Self {
            index,
            staged: record.clone(),
            field: 0,
        }
    }

    pub fn field_column(&self) -> Column {
        EDITABLE_COLUMNS[self.field]
    }

    pub fn next_field(&mut self) {
        self.field = (self.field + 1) % EDITABLE_COLUMNS.len();
    }

    pub fn prev_field(&mut self) {
        self.field = if self.field == 0 {
            EDITABLE_COLUMNS.len() - 1
        } else {
            self.field - 1
        };
    }

    pub fn staged_field(&self) -> &str {
        match self.field_column() {
            Column::Instagram => &self.staged.instagram_post,
            Column::InstagramStory => &self.staged.instagram_story,
            Column::Twitter => &self.staged.twitter_posts,
            Column::LinkedIn => &self.staged.linkedin_post,
            Column::Blog => &self.staged.blog_post,
            Column::Email => &self.staged.email_content,
            _ => unreachable!("only content columns are editable"),
        }
    }

    fn staged_field_mut(&mut self) -> &mut String {
        match self.field_column() {
            Column::Instagram => &mut self.staged.instagram_post,
            Column::InstagramStory => &mut self.staged.instagram_story,
            Column::Twitter => &mut self.staged.twitter_posts,
            Column::LinkedIn => &mut self.staged.linkedin_post,
            Column::Blog => &mut self.staged.blog_post,
            Column::Email => &mut self.staged.email_content,
            _ => unreachable!("only content columns are editable"),
        }
    }

    /// Replace the active staged field wholesale.
    pub fn set_field(&mut self, text: impl Into<String>) {
        *self.staged_field_mut() = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.staged_field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.staged_field_mut().pop();
    }
}
