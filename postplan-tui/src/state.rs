//! Application state and action handling.

use crate::config::TuiConfig;
use crate::edit::EditSession;
use crate::keys::{Action, InputMode};
use crate::notifications::{Notification, NotificationLevel};
use crate::table::{parse_page_input, Column, TableController};
use crate::theme::Theme;
use postplan_core::{aggregate, generate_calendar, CalendarRecord, ChannelCount};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct App {
    pub config: TuiConfig,
    pub theme: Theme,
    /// The single in-memory record collection. Mutated only by edit-save
    /// and regeneration; `chart` is recomputed right after each mutation.
    pub records: Vec<CalendarRecord>,
    pub chart: Vec<ChannelCount>,
    pub table: TableController,
    /// Single global edit slot. `Some` exactly while `mode` is
    /// [`InputMode::EditingField`].
    pub edit: Option<EditSession>,
    pub mode: InputMode,
    pub column_cursor: Column,
    /// Row selection within the current page.
    pub selected_row: usize,
    /// Shared text buffer for page-jump and filter input modes.
    pub input_buffer: String,
    pub notifications: Vec<Notification>,
    pub help_visible: bool,
    rng: StdRng,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let records = generate_calendar(config.start_date, &mut rng);
        let chart = aggregate(&records);
        let table = TableController::new(config.page_size);
        Self {
            config,
            theme: Theme::dark(),
            records,
            chart,
            table,
            edit: None,
            mode: InputMode::Browse,
            column_cursor: Column::Date,
            selected_row: 0,
            input_buffer: String::new(),
            notifications: Vec::new(),
            help_visible: false,
            rng,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    pub fn recompute_chart(&mut self) {
        self.chart = aggregate(&self.records);
    }

    /// Filtered-then-sorted record indices for the whole collection.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.table.visible_indices(&self.records)
    }

    /// Record indices on the current page, in display order.
    pub fn page_record_indices(&self) -> Vec<usize> {
        let visible = self.visible_indices();
        self.table.page_rows(&visible).to_vec()
    }

    pub fn selected_record_index(&self) -> Option<usize> {
        self.page_record_indices().get(self.selected_row).copied()
    }

    fn filtered_len(&self) -> usize {
        self.visible_indices().len()
    }

    fn clamp_selection(&mut self) {
        let rows = self.page_record_indices().len();
        self.selected_row = if rows == 0 {
            0
        } else {
            self.selected_row.min(rows - 1)
        };
    }

    /// Apply one input action. Returns true when the app should exit.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::OpenHelp => self.help_visible = true,
            Action::Cancel => self.cancel(),
            Action::MoveUp => {
                self.selected_row = self.selected_row.saturating_sub(1);
                self.retarget_edit();
            }
            Action::MoveDown => {
                let rows = self.page_record_indices().len();
                if rows > 0 && self.selected_row + 1 < rows {
                    self.selected_row += 1;
                }
                self.retarget_edit();
            }
            Action::MoveLeft => self.column_cursor = self.column_cursor.previous(),
            Action::MoveRight => self.column_cursor = self.column_cursor.next(),
            Action::ToggleSort => {
                if self.column_cursor.is_sortable() {
                    self.table.toggle_sort(self.column_cursor);
                    self.clamp_selection();
                } else {
                    self.notify(
                        NotificationLevel::Info,
                        format!("{} is not sortable", self.column_cursor.title()),
                    );
                }
            }
            Action::NextPage => {
                let total = self.filtered_len();
                self.table.next_page(total);
                self.clamp_selection();
            }
            Action::PrevPage => {
                self.table.prev_page();
                self.clamp_selection();
            }
            Action::FirstPage => {
                let total = self.filtered_len();
                self.table.goto_page(0, total);
                self.clamp_selection();
            }
            Action::LastPage => {
                let total = self.filtered_len();
                self.table.last_page(total);
                self.clamp_selection();
            }
            Action::OpenPageInput => {
                self.mode = InputMode::PageInput;
                self.input_buffer.clear();
            }
            Action::OpenFilterInput => self.open_filter_input(),
            Action::CyclePageSize => {
                let total = self.filtered_len();
                self.table.cycle_page_size(total);
                self.clamp_selection();
            }
            Action::EditRow => self.begin_edit(),
            Action::Regenerate => self.regenerate(),
            Action::Confirm => self.confirm(),
            Action::NextField => {
                if let Some(session) = &mut self.edit {
                    session.next_field();
                }
            }
            Action::PrevField => {
                if let Some(session) = &mut self.edit {
                    session.prev_field();
                }
            }
            Action::InputChar(c) => self.input_char(c),
            Action::InputBackspace => self.input_backspace(),
        }
        false
    }

    fn cancel(&mut self) {
        if self.help_visible {
            self.help_visible = false;
            return;
        }
        match self.mode {
            InputMode::EditingField => {
                self.edit = None;
                self.mode = InputMode::Browse;
                self.notify(NotificationLevel::Info, "Edit cancelled");
            }
            InputMode::PageInput | InputMode::FilterInput => {
                self.input_buffer.clear();
                self.mode = InputMode::Browse;
            }
            InputMode::Browse => {}
        }
    }

    fn begin_edit(&mut self) {
        let Some(index) = self.selected_record_index() else {
            return;
        };
        self.edit = Some(EditSession::begin(index, &self.records[index]));
        self.mode = InputMode::EditingField;
    }

    /// Moving the selection while a session is active silently switches the
    /// edit target, discarding the previous staged values.
    fn retarget_edit(&mut self) {
        if self.edit.is_none() {
            return;
        }
        let Some(index) = self.selected_record_index() else {
            self.edit = None;
            self.mode = InputMode::Browse;
            return;
        };
        if self.edit.as_ref().map(|s| s.index) != Some(index) {
            self.edit = Some(EditSession::begin(index, &self.records[index]));
        }
    }

    fn save_edit(&mut self) {
        if let Some(session) = self.edit.take() {
            if let Some(record) = self.records.get_mut(session.index) {
                *record = session.staged;
            }
            self.recompute_chart();
            self.mode = InputMode::Browse;
            self.notify(NotificationLevel::Success, "Row saved");
        }
    }

    fn open_filter_input(&mut self) {
        if !self.column_cursor.is_filterable() {
            self.notify(
                NotificationLevel::Info,
                format!("{} is not filterable", self.column_cursor.title()),
            );
            return;
        }
        self.input_buffer = self.table.filter_for(self.column_cursor).to_string();
        self.mode = InputMode::FilterInput;
    }

    fn confirm(&mut self) {
        match self.mode {
            InputMode::EditingField => self.save_edit(),
            InputMode::PageInput => {
                let page = parse_page_input(&self.input_buffer);
                let total = self.filtered_len();
                self.table.goto_page(page, total);
                self.input_buffer.clear();
                self.mode = InputMode::Browse;
                self.clamp_selection();
            }
            InputMode::FilterInput => {
                let text = std::mem::take(&mut self.input_buffer);
                self.table.set_filter(self.column_cursor, &text);
                let total = self.filtered_len();
                self.table.goto_page(self.table.page_index, total);
                self.mode = InputMode::Browse;
                self.clamp_selection();
            }
            InputMode::Browse => self.begin_edit(),
        }
    }

    fn input_char(&mut self, c: char) {
        match self.mode {
            InputMode::EditingField => {
                if let Some(session) = &mut self.edit {
                    session.push_char(c);
                }
            }
            InputMode::PageInput | InputMode::FilterInput => self.input_buffer.push(c),
            InputMode::Browse => {}
        }
    }

    fn input_backspace(&mut self) {
        match self.mode {
            InputMode::EditingField => {
                if let Some(session) = &mut self.edit {
                    session.backspace();
                }
            }
            InputMode::PageInput | InputMode::FilterInput => {
                self.input_buffer.pop();
            }
            InputMode::Browse => {}
        }
    }

    /// Throw the whole calendar away and roll a fresh one.
    fn regenerate(&mut self) {
        self.records = generate_calendar(self.config.start_date, &mut self.rng);
        self.edit = None;
        self.mode = InputMode::Browse;
        self.recompute_chart();
        let total = self.filtered_len();
        self.table.goto_page(self.table.page_index, total);
        self.clamp_selection();
        self.notify(NotificationLevel::Info, "Calendar regenerated");
    }
}
