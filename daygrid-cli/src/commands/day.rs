//! Hour-grid view of a single day.

use anyhow::Result;
use chrono::Datelike;
use daygrid_core::{fragments_for_cell, grid};
use owo_colors::OwoColorize;

use crate::commands::{load_events, parse_date_or_today};
use crate::render;

pub fn run(date: Option<&str>, search: &str) -> Result<()> {
    let date = parse_date_or_today(date)?;
    let events = load_events()?;
    let fragments = fragments_for_cell(&events, date.day(), date.month(), date.year(), search);

    println!("{}", grid::format_cell_date(date).bold());
    println!("{}", render::day_grid(&fragments));

    Ok(())
}
