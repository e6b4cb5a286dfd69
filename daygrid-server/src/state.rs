use anyhow::Result;
use std::path::{Path, PathBuf};

use daygrid_core::config::GlobalConfig;
use daygrid_core::event::Event;
use daygrid_core::store;

/// Shared application state
///
/// Events are reloaded from the store on each request to pick up
/// filesystem changes. In the future, could add caching with file watching.
#[derive(Clone)]
pub struct AppState {
    data_dir: PathBuf,
    max_visible_per_cell: usize,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let config = GlobalConfig::load()?;
        Ok(AppState {
            data_dir: config.data_path(),
            max_visible_per_cell: config.max_visible_per_cell,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn max_visible_per_cell(&self) -> usize {
        self.max_visible_per_cell
    }

    /// Load every stored event.
    pub fn events(&self) -> Result<Vec<Event>> {
        let events = store::list(&self.data_dir)?
            .into_iter()
            .map(|stored| stored.event)
            .collect();
        Ok(events)
    }
}
