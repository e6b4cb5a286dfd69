//! Day bucketing: which fragments occupy a calendar cell.

use chrono::NaiveDate;

use crate::event::Event;
use crate::fragment::{Fragment, split_event};

/// Case-insensitive substring filter over title, description, and attendee.
/// An empty or whitespace-only term matches everything.
pub fn filter_events<'a>(events: &'a [Event], search: &str) -> Vec<&'a Event> {
    let term = search.trim().to_lowercase();
    if term.is_empty() {
        return events.iter().collect();
    }

    events
        .iter()
        .filter(|event| {
            event.title.to_lowercase().contains(&term)
                || event
                    .description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&term))
                || event
                    .attendee
                    .as_ref()
                    .is_some_and(|a| a.to_lowercase().contains(&term))
        })
        .collect()
}

/// The fragments occupying one calendar cell.
///
/// A regular event lands in exactly the cell its date names; an overnight
/// event additionally lands its end fragment in the immediately following
/// cell, month and year boundaries included. No event reaches any other
/// cell. Same-cell order is the insertion order of the source list — layout
/// assigns columns by position and never reorders.
///
/// An invalid (day, month, year) triple yields an empty bucket.
pub fn fragments_for_cell(
    events: &[Event],
    day: u32,
    month: u32,
    year: i32,
    search: &str,
) -> Vec<Fragment> {
    let Some(target) = NaiveDate::from_ymd_opt(year, month, day) else {
        return Vec::new();
    };

    filter_events(events, search)
        .into_iter()
        .flat_map(split_event)
        .filter(|fragment| fragment.cell_date == target)
        .collect()
}

/// Events dated `today` or later, stably sorted by date and truncated to
/// `limit`. Backs the agenda/sidebar listing.
pub fn upcoming_events(
    events: &[Event],
    today: NaiveDate,
    search: &str,
    limit: usize,
) -> Vec<Event> {
    let mut upcoming: Vec<Event> = filter_events(events, search)
        .into_iter()
        .filter(|event| event.date >= today)
        .cloned()
        .collect();

    upcoming.sort_by_key(|event| event.date);
    upcoming.truncate(limit);
    upcoming
}

/// Whether any event (or overnight continuation) lands on the given cell.
/// Backs the mini-calendar day markers.
pub fn has_events_on(events: &[Event], day: u32, month: u32, year: i32, search: &str) -> bool {
    !fragments_for_cell(events, day, month, year, search).is_empty()
}
