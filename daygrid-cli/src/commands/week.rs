//! Week view: one section per day, Sunday first.

use anyhow::Result;
use chrono::Datelike;
use daygrid_core::{clock, fragments_for_cell, grid, layout_of};
use owo_colors::OwoColorize;

use crate::commands::{load_events, parse_date_or_today};
use crate::render::{self, Render};

pub fn run(date: Option<&str>, search: &str) -> Result<()> {
    let date = parse_date_or_today(date)?;
    let events = load_events()?;

    for day in grid::week_of(date) {
        let fragments = fragments_for_cell(&events, day.day(), day.month(), day.year(), search);

        println!("{}", grid::format_cell_date(day).bold());
        if fragments.is_empty() {
            println!("   {}", "No events".dimmed());
        } else {
            // Bucket order is source order; present the day by clock time.
            let mut ordered: Vec<_> = fragments.iter().collect();
            ordered.sort_by_key(|fragment| clock::to_minutes(&fragment.start_time));

            for fragment in ordered {
                let layout = layout_of(fragment, &fragments);
                println!(
                    "   {} {}",
                    fragment.render(),
                    render::geometry(&layout).dimmed()
                );
            }
        }
        println!();
    }

    Ok(())
}
