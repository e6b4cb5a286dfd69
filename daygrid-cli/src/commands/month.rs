//! Month overview: a day-number grid plus per-day event listings.

use anyhow::{Result, bail};
use chrono::{Datelike, Local};
use daygrid_core::config::GlobalConfig;
use daygrid_core::{fragments_for_cell, grid, has_events_on};
use owo_colors::OwoColorize;

use crate::commands::load_events;
use crate::render::Render;

pub fn run(month_arg: Option<&str>, search: &str) -> Result<()> {
    let (year, month) = parse_month_or_current(month_arg)?;
    let events = load_events()?;
    let config = GlobalConfig::load()?;

    let weeks = grid::month_grid(year, month);
    if weeks.is_empty() {
        bail!("Invalid month: {}-{:02}", year, month);
    }

    // Weekday header and day-number grid; days with events get a marker.
    let header: String = grid::DAYS_OF_WEEK
        .iter()
        .map(|day| format!("{:>5}", &day[..3]))
        .collect();
    println!("{}", header.bold());

    for week in &weeks {
        let mut row = String::new();
        for cell in week {
            let marker = if cell.in_month
                && has_events_on(&events, cell.date.day(), month, year, search)
            {
                "*"
            } else {
                " "
            };
            let label = format!("{:>4}{}", cell.date.day(), marker);
            if cell.in_month {
                row.push_str(&label);
            } else {
                row.push_str(&label.dimmed().to_string());
            }
        }
        println!("{}", row);
    }
    println!();

    // Per-day listings, truncated the way a month cell truncates.
    for cell in weeks.iter().flatten().filter(|cell| cell.in_month) {
        let fragments = fragments_for_cell(&events, cell.date.day(), month, year, search);
        if fragments.is_empty() {
            continue;
        }

        println!("{}", grid::format_cell_date(cell.date).bold());
        for fragment in fragments.iter().take(config.max_visible_per_cell) {
            println!("   {}", fragment.render());
        }
        if fragments.len() > config.max_visible_per_cell {
            let hidden = fragments.len() - config.max_visible_per_cell;
            println!("   {}", format!("+{} more", hidden).dimmed());
        }
    }

    Ok(())
}

/// Parse an optional YYYY-MM argument, defaulting to the current month.
fn parse_month_or_current(raw: Option<&str>) -> Result<(i32, u32)> {
    match raw {
        Some(raw) => {
            let (year, month) = raw
                .split_once('-')
                .ok_or_else(|| anyhow::anyhow!("Invalid month '{}'. Expected YYYY-MM", raw))?;
            let year: i32 = year
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid year in '{}'", raw))?;
            let month: u32 = month
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid month in '{}'", raw))?;
            if !(1..=12).contains(&month) {
                bail!("Month out of range in '{}'", raw);
            }
            Ok((year, month))
        }
        None => {
            let now = Local::now().date_naive();
            Ok((now.year(), now.month()))
        }
    }
}
