//! Calendar event model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock;
use crate::color;

/// A calendar event as stored and displayed.
///
/// Times are kept in the 12-hour display format ("9:00 AM"); all minute
/// arithmetic goes through [`crate::clock`]. `date` is the calendar day the
/// event starts on — an event whose end time is numerically earlier than
/// its start time crosses midnight into the following day, which is never
/// a zero/negative-duration error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attendee: Option<String>,
    #[serde(default = "color::default_color")]
    pub color: String,
}

impl Event {
    /// Create a new event with a fresh UUID and the default palette color.
    pub fn new(title: String, date: NaiveDate, start_time: String, end_time: String) -> Self {
        Event {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            start_time,
            end_time,
            title,
            description: None,
            attendee: None,
            color: color::default_color(),
        }
    }

    /// Whether this event crosses midnight (end numerically before start).
    pub fn is_overnight(&self) -> bool {
        clock::to_minutes(&self.end_time) < clock::to_minutes(&self.start_time)
    }
}
