pub mod add;
pub mod agenda;
pub mod day;
pub mod delete;
pub mod list;
pub mod month;
pub mod week;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use daygrid_core::config::GlobalConfig;
use daygrid_core::event::Event;
use daygrid_core::store;

/// Load every stored event from the configured data directory.
pub fn load_events() -> Result<Vec<Event>> {
    let config = GlobalConfig::load()?;
    let events = store::list(&config.data_path())?
        .into_iter()
        .map(|stored| stored.event)
        .collect();
    Ok(events)
}

/// Parse an optional YYYY-MM-DD argument, defaulting to today.
pub fn parse_date_or_today(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", raw)),
        None => Ok(Local::now().date_naive()),
    }
}
