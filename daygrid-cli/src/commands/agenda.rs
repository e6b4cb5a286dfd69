//! Upcoming events grouped by date.

use anyhow::Result;
use chrono::Local;
use daygrid_core::{clock, grid, upcoming_events};
use owo_colors::OwoColorize;

use crate::commands::load_events;
use crate::render::swatch;

pub fn run(search: &str, limit: usize) -> Result<()> {
    let events = load_events()?;
    let today = Local::now().date_naive();
    let upcoming = upcoming_events(&events, today, search, limit);

    if upcoming.is_empty() {
        println!("No upcoming events. Add an event to see it here.");
        return Ok(());
    }

    let mut current_date = None;
    for event in &upcoming {
        if current_date != Some(event.date) {
            println!("{}", grid::format_cell_date(event.date).bold());
            current_date = Some(event.date);
        }
        println!(
            "   {} {}  {}",
            swatch(&event.color),
            clock::format_time_range(&event.start_time, &event.end_time).dimmed(),
            event.title
        );
    }

    Ok(())
}
