//! Overnight splitting: one event into per-cell display fragments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock;
use crate::event::Event;

/// Display end time for the first half of a midnight-crossing event.
pub const END_OF_DAY: &str = "11:59 PM";
/// Display start time for the second half of a midnight-crossing event.
pub const START_OF_DAY: &str = "12:00 AM";
/// Suffix marking the synthetic id of an overnight end fragment.
pub const OVERNIGHT_ID_SUFFIX: &str = "_overnight";

/// Which half of a midnight-crossing event a fragment represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvernightPart {
    None,
    Start,
    End,
}

/// A render-ready, possibly-clipped view of an event scoped to exactly one
/// calendar cell.
///
/// Fragments are recomputed fresh on every render pass and never written
/// back to the store. The end fragment of a split event carries the
/// synthetic id `"<id>_overnight"` — a view-only identity that is never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    pub id: String,
    /// The calendar cell this fragment renders under.
    pub cell_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub overnight: OvernightPart,
    /// True start/end of the event, kept so labels on clipped fragments
    /// always show the full span.
    pub original_start_time: Option<String>,
    pub original_end_time: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub attendee: Option<String>,
    pub color: String,
}

impl Fragment {
    /// The unclipped single fragment of a regular event.
    fn whole(event: &Event) -> Self {
        Fragment {
            id: event.id.clone(),
            cell_date: event.date,
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            overnight: OvernightPart::None,
            original_start_time: None,
            original_end_time: None,
            title: event.title.clone(),
            description: event.description.clone(),
            attendee: event.attendee.clone(),
            color: event.color.clone(),
        }
    }

    /// The time range to show a user. Overnight fragments always label the
    /// full original span, not the clipped one.
    pub fn time_range_label(&self) -> String {
        match self.overnight {
            OvernightPart::None => clock::format_time_range(&self.start_time, &self.end_time),
            OvernightPart::Start | OvernightPart::End => clock::format_time_range(
                self.original_start_time.as_deref().unwrap_or_default(),
                self.original_end_time.as_deref().unwrap_or_default(),
            ),
        }
    }
}

/// Split an event into its display fragments.
///
/// A regular event yields one fragment on its own date. An overnight event
/// yields a start fragment clipped to "11:59 PM" on its date and an end
/// fragment clipped from "12:00 AM" on the following day; both keep the
/// original times for label formatting. A fragment whose clipped duration
/// comes out zero or negative is still emitted — layout clamps it to the
/// minimum visible height.
pub fn split_event(event: &Event) -> Vec<Fragment> {
    if !event.is_overnight() {
        return vec![Fragment::whole(event)];
    }

    let start = Fragment {
        end_time: END_OF_DAY.to_string(),
        overnight: OvernightPart::Start,
        original_start_time: Some(event.start_time.clone()),
        original_end_time: Some(event.end_time.clone()),
        ..Fragment::whole(event)
    };

    let Some(next_day) = event.date.succ_opt() else {
        // Date arithmetic overflow at the end of chrono's range; render
        // only the start half rather than failing the whole pass.
        return vec![start];
    };

    let end = Fragment {
        id: format!("{}{}", event.id, OVERNIGHT_ID_SUFFIX),
        cell_date: next_day,
        start_time: START_OF_DAY.to_string(),
        overnight: OvernightPart::End,
        original_start_time: Some(event.start_time.clone()),
        original_end_time: Some(event.end_time.clone()),
        ..Fragment::whole(event)
    };

    vec![start, end]
}
