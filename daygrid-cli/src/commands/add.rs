//! Add a new event to the store.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use daygrid_core::config::GlobalConfig;
use daygrid_core::event::Event;
use daygrid_core::{clock, color, store};

#[allow(clippy::too_many_arguments)]
pub fn run(
    title: String,
    date: String,
    start: String,
    end: String,
    description: Option<String>,
    attendee: Option<String>,
    color_arg: Option<String>,
) -> Result<()> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", date))?;
    let start_time = normalize_time(&start)?;
    let end_time = normalize_time(&end)?;

    let mut event = Event::new(title, date, start_time, end_time);
    event.description = description;
    event.attendee = attendee;
    if let Some(raw) = color_arg {
        event.color = color::resolve_color(&raw);
    }

    let config = GlobalConfig::load()?;
    let path = store::create(&config.data_path(), &event)?;

    println!(
        "Created \"{}\" on {} ({} - {})",
        event.title, event.date, event.start_time, event.end_time
    );
    if event.is_overnight() {
        println!("  Crosses midnight; it will also appear on the following day.");
    }
    println!("  {}", path.display());

    Ok(())
}

/// Validate and normalize a user-entered time to the stored display
/// format, with a usable error message on failure.
fn normalize_time(raw: &str) -> Result<String> {
    match clock::normalize(raw) {
        Some(display) => Ok(display),
        None => bail!(
            "Could not parse time '{}'. Expected \"HH:MM\" (24-hour) or \"h:MM AM/PM\"",
            raw
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_24_hour_input() {
        assert_eq!(normalize_time("14:30").unwrap(), "2:30 PM");
        assert_eq!(normalize_time("00:00").unwrap(), "12:00 AM");
    }

    #[test]
    fn accepts_12_hour_input() {
        assert_eq!(normalize_time("9:00 am").unwrap(), "9:00 AM");
        assert_eq!(normalize_time("12:30 PM").unwrap(), "12:30 PM");
    }

    #[test]
    fn rejects_garbage() {
        assert!(normalize_time("midnightish").is_err());
        assert!(normalize_time("25:00").is_err());
    }
}
