//! Overlap-aware pixel geometry for the day/week grids.

use serde::Serialize;

use crate::clock::{self, MINUTES_PER_DAY};
use crate::fragment::{Fragment, OvernightPart};

/// Height of one hour row in the day/week grids.
pub const HOUR_ROW_PX: f64 = 64.0;
/// Vertical scale applied to minutes from midnight.
pub const PX_PER_MINUTE: f64 = HOUR_ROW_PX / 60.0;
/// Height floor that keeps very short events visible.
pub const MIN_EVENT_HEIGHT_PX: f64 = 20.0;

/// Computed geometry for one fragment within its day column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventLayout {
    /// Pixel offset below the top of the anchor hour row.
    pub top_offset_px: f64,
    pub height_px: f64,
    /// The hour row the fragment anchors to; it is drawn once there and
    /// spans downward by `height_px`.
    pub start_hour: i32,
    pub duration_minutes: i32,
    /// Column width as a percentage of the day column.
    pub width_pct: f64,
    /// Horizontal column offset as a percentage of the day column.
    pub left_offset_pct: f64,
}

impl EventLayout {
    /// Zero-based column index implied by the horizontal geometry.
    pub fn column_index(&self) -> usize {
        if self.width_pct <= 0.0 {
            return 0;
        }
        (self.left_offset_pct / self.width_pct).round() as usize
    }

    /// How many side-by-side columns this fragment's cell was divided into.
    pub fn column_count(&self) -> usize {
        if self.width_pct <= 0.0 {
            return 1;
        }
        (100.0 / self.width_pct).round() as usize
    }
}

/// Start/end minutes with overnight normalization applied.
///
/// An end numerically before the start means the range crosses midnight, so
/// the end gets a day added — unless the fragment is an already-clipped end
/// fragment, whose "12:00 AM"-based range is same-day by construction.
fn minute_span(fragment: &Fragment) -> (i32, i32) {
    let start = clock::to_minutes(&fragment.start_time);
    let mut end = clock::to_minutes(&fragment.end_time);

    if end < start && fragment.overnight != OvernightPart::End {
        end += MINUTES_PER_DAY;
    }

    (start, end)
}

/// Compute the geometry for `fragment` within its calendar cell.
///
/// `cell_fragments` is the full fragment list for the same cell and is used
/// only for overlap counting; two fragments overlap iff their normalized
/// minute ranges intersect. The column index is the fragment's position
/// among the overlapping fragments in list order — a fixed-column packing,
/// not a minimal interval coloring, so a chain of pairwise overlaps can
/// allocate more columns than strictly necessary.
///
/// Missing or malformed times degrade to zero-valued geometry; this never
/// fails.
pub fn layout_of(fragment: &Fragment, cell_fragments: &[Fragment]) -> EventLayout {
    let (start_minutes, end_minutes) = minute_span(fragment);

    let start_hour = start_minutes / 60;
    let top_offset_px = f64::from(start_minutes % 60) * PX_PER_MINUTE;
    let duration_minutes = end_minutes - start_minutes;
    let height_px = (f64::from(duration_minutes) * PX_PER_MINUTE).max(MIN_EVENT_HEIGHT_PX);

    // Column packing: count overlapping neighbors, splitting them into
    // those before and after this fragment in cell order.
    let mut earlier_overlapping = 0usize;
    let mut total_overlapping = 1usize;
    let mut past_self = false;

    for other in cell_fragments {
        if other.id == fragment.id {
            past_self = true;
            continue;
        }

        let (other_start, other_end) = minute_span(other);
        if start_minutes < other_end && end_minutes > other_start {
            total_overlapping += 1;
            if !past_self {
                earlier_overlapping += 1;
            }
        }
    }

    let width_pct = 100.0 / total_overlapping as f64;
    let left_offset_pct = (earlier_overlapping as f64 * 100.0) / total_overlapping as f64;

    EventLayout {
        top_offset_px,
        height_px,
        start_hour,
        duration_minutes,
        width_pct,
        left_offset_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::fragment::split_event;

    fn make_fragment(id: &str, start: &str, end: &str) -> Fragment {
        Fragment {
            id: id.to_string(),
            cell_date: "2025-06-10".parse().unwrap(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            overnight: OvernightPart::None,
            original_start_time: None,
            original_end_time: None,
            title: "Test Event".to_string(),
            description: None,
            attendee: None,
            color: "#FFCBE1".to_string(),
        }
    }

    #[test]
    fn vertical_geometry_follows_the_hour_grid() {
        let fragment = make_fragment("a", "9:30 AM", "11:00 AM");
        let layout = layout_of(&fragment, std::slice::from_ref(&fragment));

        assert_eq!(layout.start_hour, 9);
        assert_eq!(layout.duration_minutes, 90);
        assert!((layout.top_offset_px - 30.0 * PX_PER_MINUTE).abs() < 1e-9);
        assert!((layout.height_px - 96.0).abs() < 1e-9);
        assert!((layout.width_pct - 100.0).abs() < 1e-9);
        assert!((layout.left_offset_pct - 0.0).abs() < 1e-9);
    }

    #[test]
    fn one_minute_event_hits_the_height_floor() {
        let fragment = make_fragment("a", "9:00 AM", "9:01 AM");
        let layout = layout_of(&fragment, std::slice::from_ref(&fragment));

        assert_eq!(layout.duration_minutes, 1);
        assert!((layout.height_px - MIN_EVENT_HEIGHT_PX).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_event_hits_the_height_floor() {
        let fragment = make_fragment("a", "9:00 AM", "9:00 AM");
        let layout = layout_of(&fragment, std::slice::from_ref(&fragment));

        assert_eq!(layout.duration_minutes, 0);
        assert!((layout.height_px - MIN_EVENT_HEIGHT_PX).abs() < 1e-9);
    }

    #[test]
    fn unsplit_overnight_range_gains_a_day() {
        let fragment = make_fragment("a", "10:00 PM", "1:00 AM");
        let layout = layout_of(&fragment, std::slice::from_ref(&fragment));

        assert_eq!(layout.duration_minutes, 180);
        assert_eq!(layout.start_hour, 22);
    }

    #[test]
    fn clipped_end_fragment_is_not_renormalized() {
        let event = Event {
            id: "a".to_string(),
            date: "2025-06-10".parse().unwrap(),
            start_time: "10:00 PM".to_string(),
            end_time: "1:00 AM".to_string(),
            title: "Night".to_string(),
            description: None,
            attendee: None,
            color: "#FFCBE1".to_string(),
        };
        let fragments = split_event(&event);
        let end = &fragments[1];

        let layout = layout_of(end, std::slice::from_ref(end));
        assert_eq!(layout.start_hour, 0);
        assert_eq!(layout.duration_minutes, 60);
    }

    #[test]
    fn pairwise_overlapping_fragments_partition_the_width() {
        let cell = vec![
            make_fragment("a", "9:00 AM", "11:00 AM"),
            make_fragment("b", "9:30 AM", "10:30 AM"),
            make_fragment("c", "10:00 AM", "10:15 AM"),
        ];

        let layouts: Vec<EventLayout> =
            cell.iter().map(|f| layout_of(f, &cell)).collect();

        let mut offsets = Vec::new();
        for layout in &layouts {
            assert!((layout.width_pct - 100.0 / 3.0).abs() < 1e-9);
            offsets.push(layout.left_offset_pct);
        }

        offsets.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let expected = [0.0, 100.0 / 3.0, 200.0 / 3.0];
        for (offset, want) in offsets.iter().zip(expected) {
            assert!((offset - want).abs() < 1e-9);
        }
    }

    #[test]
    fn disjoint_fragments_take_the_full_width() {
        let cell = vec![
            make_fragment("a", "9:00 AM", "10:00 AM"),
            make_fragment("b", "2:00 PM", "3:00 PM"),
        ];

        for fragment in &cell {
            let layout = layout_of(fragment, &cell);
            assert!((layout.width_pct - 100.0).abs() < 1e-9);
            assert!((layout.left_offset_pct - 0.0).abs() < 1e-9);
        }
    }

    #[test]
    fn touching_ranges_do_not_overlap() {
        let cell = vec![
            make_fragment("a", "9:00 AM", "10:00 AM"),
            make_fragment("b", "10:00 AM", "11:00 AM"),
        ];

        for fragment in &cell {
            let layout = layout_of(fragment, &cell);
            assert!((layout.width_pct - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn overlap_chain_packs_by_list_position() {
        // a-b and b-c overlap, a-c do not: fixed-column packing still hands
        // a and c their own (wider) columns instead of re-using one.
        let cell = vec![
            make_fragment("a", "9:00 AM", "10:00 AM"),
            make_fragment("b", "9:30 AM", "10:30 AM"),
            make_fragment("c", "10:15 AM", "11:00 AM"),
        ];

        let a = layout_of(&cell[0], &cell);
        let b = layout_of(&cell[1], &cell);
        let c = layout_of(&cell[2], &cell);

        assert!((a.width_pct - 50.0).abs() < 1e-9);
        assert!((a.left_offset_pct - 0.0).abs() < 1e-9);

        assert!((b.width_pct - 100.0 / 3.0).abs() < 1e-9);
        assert!((b.left_offset_pct - 100.0 / 3.0).abs() < 1e-9);

        assert!((c.width_pct - 50.0).abs() < 1e-9);
        assert!((c.left_offset_pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn missing_times_degrade_to_zero_geometry() {
        let fragment = make_fragment("a", "", "");
        let layout = layout_of(&fragment, std::slice::from_ref(&fragment));

        assert_eq!(layout.start_hour, 0);
        assert_eq!(layout.duration_minutes, 0);
        assert!((layout.top_offset_px - 0.0).abs() < 1e-9);
        assert!((layout.height_px - MIN_EVENT_HEIGHT_PX).abs() < 1e-9);
    }

    #[test]
    fn column_helpers_invert_the_percentages() {
        let cell = vec![
            make_fragment("a", "9:00 AM", "11:00 AM"),
            make_fragment("b", "9:30 AM", "10:30 AM"),
        ];

        let b = layout_of(&cell[1], &cell);
        assert_eq!(b.column_count(), 2);
        assert_eq!(b.column_index(), 1);
    }
}
