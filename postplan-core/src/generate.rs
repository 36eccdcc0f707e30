//! Random calendar generation.
//!
//! Content is picked from fixed pools; structure (dates, gating) is
//! deterministic. The RNG is injected so callers can seed it for
//! reproducible calendars.

use crate::record::{is_weekday, CalendarRecord};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::Rng;

/// Number of days in a generated calendar.
pub const CALENDAR_DAYS: usize = 30;

/// The Instagram story slot is the same item every day.
pub const INSTAGRAM_STORY: &str = "Daily Study Tip";

const INSTAGRAM_POSTS: [&str; 5] = [
    "Educational Infographic",
    "User Testimonial",
    "AI in Medicine Fact",
    "Feature Spotlight",
    "Study Tip",
];

const TWITTER_POSTS: [&str; 5] = [
    "Original Tweet",
    "Retweet Medical News",
    "Engage with #MedEd",
    "Share Blog Post",
    "AI Fact",
];

const LINKEDIN_POSTS: [&str; 5] = [
    "Share Blog Post",
    "Case Study",
    "Industry News",
    "Feature Deep Dive",
    "Thought Leadership",
];

const BLOG_POSTS: [&str; 5] = [
    "AI in Diagnostics",
    "Study Techniques",
    "User Success Story",
    "Feature Explanation",
    "Industry Trends",
];

const EMAIL_CONTENT: [&str; 5] = [
    "Newsletter",
    "Product Update",
    "User Spotlight",
    "Tips & Tricks",
    "Exclusive Offer",
];

fn pick<R: Rng>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool[rng.gen_range(0..pool.len())]
}

/// Generate 30 consecutive days of content starting at `start`.
///
/// Twitter gets 3 independent picks joined with ", " (duplicates allowed).
/// LinkedIn posts only on weekdays, blog posts only on Mondays, email only
/// on Wednesdays; the gated fields are empty strings otherwise.
pub fn generate_calendar<R: Rng>(start: NaiveDate, rng: &mut R) -> Vec<CalendarRecord> {
    (0..CALENDAR_DAYS)
        .map(|i| {
            let date = start
                .checked_add_days(Days::new(i as u64))
                .unwrap_or(start);
            let twitter_posts = (0..3)
                .map(|_| pick(rng, &TWITTER_POSTS))
                .collect::<Vec<_>>()
                .join(", ");
            let linkedin_post = if is_weekday(date) {
                pick(rng, &LINKEDIN_POSTS).to_string()
            } else {
                String::new()
            };
            let blog_post = if date.weekday() == Weekday::Mon {
                pick(rng, &BLOG_POSTS).to_string()
            } else {
                String::new()
            };
            let email_content = if date.weekday() == Weekday::Wed {
                pick(rng, &EMAIL_CONTENT).to_string()
            } else {
                String::new()
            };
            CalendarRecord {
                date,
                instagram_post: pick(rng, &INSTAGRAM_POSTS).to_string(),
                instagram_story: INSTAGRAM_STORY.to_string(),
                twitter_posts,
                linkedin_post,
                blog_post,
                email_content,
            }
        })
        .collect()
}
