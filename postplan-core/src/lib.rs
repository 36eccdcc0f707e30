//! postplan core - calendar domain types and logic.
//!
//! Pure data and pure functions, no I/O. The TUI crate layers interaction
//! state on top of these types.

pub mod aggregate;
pub mod generate;
pub mod record;

pub use aggregate::{aggregate, ChannelCount};
pub use generate::{generate_calendar, CALENDAR_DAYS, INSTAGRAM_STORY};
pub use record::{default_start_date, is_weekday, CalendarRecord, Channel};
