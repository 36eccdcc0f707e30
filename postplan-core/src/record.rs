//! Calendar record and channel types.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The five counted publishing channels, in display order.
///
/// The Instagram story slot is a fixed daily item and is not a counted
/// channel of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Instagram,
    Twitter,
    LinkedIn,
    Blog,
    Email,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Instagram,
        Channel::Twitter,
        Channel::LinkedIn,
        Channel::Blog,
        Channel::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Instagram => "Instagram",
            Channel::Twitter => "Twitter",
            Channel::LinkedIn => "LinkedIn",
            Channel::Blog => "Blog",
            Channel::Email => "Email",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One planned day of content. Exactly 30 of these make up a calendar.
///
/// The gated fields (`linkedin_post`, `blog_post`, `email_content`) are the
/// empty string exactly when their day-of-week gate fails: LinkedIn runs
/// Monday through Friday, blog posts land on Mondays, email goes out on
/// Wednesdays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRecord {
    pub date: NaiveDate,
    pub instagram_post: String,
    pub instagram_story: String,
    pub twitter_posts: String,
    pub linkedin_post: String,
    pub blog_post: String,
    pub email_content: String,
}

impl CalendarRecord {
    /// Long-form weekday label for display ("Monday".."Sunday").
    pub fn day_label(&self) -> String {
        self.date.format("%A").to_string()
    }

    /// The content field backing the given counted channel.
    pub fn channel_field(&self, channel: Channel) -> &str {
        match channel {
            Channel::Instagram => &self.instagram_post,
            Channel::Twitter => &self.twitter_posts,
            Channel::LinkedIn => &self.linkedin_post,
            Channel::Blog => &self.blog_post,
            Channel::Email => &self.email_content,
        }
    }
}

/// Monday through Friday.
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Default calendar start, 2024-01-01.
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("2024-01-01 is a valid date")
}
