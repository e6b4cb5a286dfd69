//! Week and month grid date arithmetic for the renderers.
//!
//! These helpers are pure date math; they decide which dates a view shows,
//! while [`crate::bucket`] decides which fragments land on each of them.

use chrono::{Datelike, Duration, NaiveDate};

use crate::clock;

/// Sunday-first weekday names, as the grids head their columns.
pub const DAYS_OF_WEEK: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// The Sunday-first week containing `date`.
pub fn week_of(date: NaiveDate) -> [NaiveDate; 7] {
    let offset = date.weekday().num_days_from_sunday() as i64;
    let sunday = date - Duration::days(offset);
    std::array::from_fn(|i| sunday + Duration::days(i as i64))
}

/// One cell of a month grid. Leading and trailing cells belong to the
/// adjacent months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCell {
    pub date: NaiveDate,
    pub in_month: bool,
}

/// Complete Sunday-first weeks covering the given month. An invalid month
/// yields no weeks.
pub fn month_grid(year: i32, month: u32) -> Vec<[MonthCell; 7]> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(first);

    let mut weeks = Vec::new();
    let mut cursor = week_of(first)[0];

    while cursor <= last {
        let week = std::array::from_fn(|i| {
            let date = cursor + Duration::days(i as i64);
            MonthCell {
                date,
                in_month: date.month() == month && date.year() == year,
            }
        });
        weeks.push(week);
        cursor = cursor + Duration::days(7);
    }

    weeks
}

/// Display label for an hour row ("12:00 AM" .. "11:00 PM").
pub fn hour_label(hour: i32) -> String {
    clock::to_12h(&format!("{:02}:00", hour))
}

/// Human-readable header for a calendar cell ("Tuesday, June 10, 2025").
pub fn format_cell_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_starts_on_sunday() {
        // 2025-06-10 is a Tuesday.
        let week = week_of("2025-06-10".parse().unwrap());

        assert_eq!(week[0], "2025-06-08".parse::<NaiveDate>().unwrap());
        assert_eq!(week[6], "2025-06-14".parse::<NaiveDate>().unwrap());
    }

    #[test]
    fn week_of_a_sunday_is_itself() {
        let sunday: NaiveDate = "2025-06-08".parse().unwrap();
        assert_eq!(week_of(sunday)[0], sunday);
    }

    #[test]
    fn month_grid_covers_the_whole_month() {
        // June 2025: first is a Sunday, 30 days, 5 weeks.
        let weeks = month_grid(2025, 6);
        assert_eq!(weeks.len(), 5);

        assert_eq!(weeks[0][0].date, "2025-06-01".parse::<NaiveDate>().unwrap());
        assert!(weeks[0][0].in_month);

        // Trailing cells spill into July.
        let last_week = weeks.last().unwrap();
        assert_eq!(
            last_week[6].date,
            "2025-07-05".parse::<NaiveDate>().unwrap()
        );
        assert!(!last_week[6].in_month);
    }

    #[test]
    fn month_grid_marks_leading_days_from_previous_month() {
        // August 2025 starts on a Friday.
        let weeks = month_grid(2025, 8);

        assert_eq!(weeks[0][0].date, "2025-07-27".parse::<NaiveDate>().unwrap());
        assert!(!weeks[0][0].in_month);
        assert!(weeks[0][5].in_month);
    }

    #[test]
    fn month_grid_handles_december() {
        let weeks = month_grid(2025, 12);
        let flat: Vec<_> = weeks.iter().flatten().filter(|c| c.in_month).collect();
        assert_eq!(flat.len(), 31);
    }

    #[test]
    fn invalid_month_yields_no_weeks() {
        assert!(month_grid(2025, 13).is_empty());
    }

    #[test]
    fn hour_labels_span_the_day() {
        assert_eq!(hour_label(0), "12:00 AM");
        assert_eq!(hour_label(11), "11:00 AM");
        assert_eq!(hour_label(12), "12:00 PM");
        assert_eq!(hour_label(23), "11:00 PM");
    }

    #[test]
    fn cell_date_header_is_human_readable() {
        let date: NaiveDate = "2025-06-10".parse().unwrap();
        assert_eq!(format_cell_date(date), "Tuesday, June 10, 2025");
    }
}
