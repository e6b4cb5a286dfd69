//! List stored events, date-sorted.

use anyhow::Result;
use daygrid_core::{clock, filter_events};
use owo_colors::OwoColorize;

use crate::commands::load_events;
use crate::render::swatch;

pub fn run(search: &str) -> Result<()> {
    let events = load_events()?;
    let mut matched: Vec<_> = filter_events(&events, search).into_iter().cloned().collect();
    matched.sort_by_key(|event| (event.date, clock::to_minutes(&event.start_time)));

    if matched.is_empty() {
        println!("No events found.");
        return Ok(());
    }

    for event in &matched {
        println!(
            "{}  {} {:<21} {}  {}",
            event.date,
            swatch(&event.color),
            clock::format_time_range(&event.start_time, &event.end_time),
            event.title,
            event.id.dimmed(),
        );
    }

    Ok(())
}
