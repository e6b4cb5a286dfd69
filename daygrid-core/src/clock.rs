//! 12-hour/24-hour clock conversions and minute arithmetic.
//!
//! Times on the event model are 12-hour display strings ("9:00 AM"). This
//! module is the single conversion point between that format, the 24-hour
//! wire format ("09:00"), and minutes from midnight — every ordering or
//! overlap comparison in the engine routes through [`to_minutes`] rather
//! than re-deriving minutes on its own.

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Convert a 12-hour display time ("9:00 AM") to minutes from midnight.
///
/// Hour 12 maps to 0 for AM and stays 12 for PM; every other PM hour adds
/// 12. Malformed input degrades instead of failing: an empty string is 0
/// minutes, and unparseable components count as 0. Callers that need
/// validation should check the string before converting.
pub fn to_minutes(time_12h: &str) -> i32 {
    if time_12h.is_empty() {
        return 0;
    }

    let (clock, period) = split_period(time_12h);
    let (mut hours, minutes) = split_clock(clock);

    if hours == 12 {
        hours = if is_pm(period) { 12 } else { 0 };
    } else if is_pm(period) {
        hours += 12;
    }

    hours * 60 + minutes
}

/// Convert a 12-hour display time ("2:30 PM") to the 24-hour wire format
/// ("14:30"). Empty input yields an empty string.
pub fn to_24h(time_12h: &str) -> String {
    if time_12h.is_empty() {
        return String::new();
    }

    let minutes = to_minutes(time_12h);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Convert a 24-hour wire time ("14:30") to the 12-hour display format
/// ("2:30 PM"). Hour 0 renders as 12 AM and hour 12 as 12 PM. Empty input
/// yields an empty string.
pub fn to_12h(time_24h: &str) -> String {
    if time_24h.is_empty() {
        return String::new();
    }

    let (hours, minutes) = split_clock(time_24h);
    let period = if hours >= 12 { "PM" } else { "AM" };
    let hours_12 = if hours % 12 == 0 { 12 } else { hours % 12 };

    format!("{}:{:02} {}", hours_12, minutes, period)
}

/// Format a start/end pair for display ("9:00 AM - 10:30 AM").
///
/// Returns an empty string when either side is missing, so callers can show
/// a blank label rather than a half-open range.
pub fn format_time_range(start_time: &str, end_time: &str) -> String {
    if start_time.is_empty() || end_time.is_empty() {
        return String::new();
    }

    format!("{} - {}", start_time, end_time)
}

/// Validate and normalize user-entered time input to the stored 12-hour
/// display format. Accepts both "14:30" and "2:30 PM" (any case, optional
/// space before the period). Returns `None` for out-of-range or
/// unparseable input — unlike the display-side conversions above, input
/// taken from a user is checked before it enters the store.
pub fn normalize(raw: &str) -> Option<String> {
    let upper = raw.trim().to_ascii_uppercase();

    let (clock, period) = if let Some(stripped) = upper.strip_suffix("AM") {
        (stripped.trim_end(), Some("AM"))
    } else if let Some(stripped) = upper.strip_suffix("PM") {
        (stripped.trim_end(), Some("PM"))
    } else {
        (upper.as_str(), None)
    };

    let (raw_hours, raw_minutes) = clock.split_once(':')?;
    let hours: u32 = raw_hours.trim().parse().ok()?;
    let minutes: u32 = raw_minutes.trim().parse().ok()?;

    if minutes > 59 {
        return None;
    }

    match period {
        Some(period) => {
            if hours == 0 || hours > 12 {
                return None;
            }
            Some(format!("{}:{:02} {}", hours, minutes, period))
        }
        None => {
            if hours > 23 {
                return None;
            }
            Some(to_12h(&format!("{:02}:{:02}", hours, minutes)))
        }
    }
}

fn is_pm(period: Option<&str>) -> bool {
    matches!(period, Some(p) if p.eq_ignore_ascii_case("pm"))
}

/// Split "9:00 AM" into the clock part and the period marker, if present.
fn split_period(time: &str) -> (&str, Option<&str>) {
    match time.trim().split_once(' ') {
        Some((clock, period)) => (clock, Some(period.trim())),
        None => (time.trim(), None),
    }
}

/// Split "HH:MM" into numeric components, treating anything unparseable
/// as 0.
fn split_clock(clock: &str) -> (i32, i32) {
    match clock.split_once(':') {
        Some((hours, minutes)) => (
            hours.trim().parse().unwrap_or(0),
            minutes.trim().parse().unwrap_or(0),
        ),
        None => (clock.trim().parse().unwrap_or(0), 0),
    }
}
