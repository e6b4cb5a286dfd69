//! Delete an event by id.

use anyhow::Result;
use daygrid_core::config::GlobalConfig;
use daygrid_core::store;

pub fn run(id: &str) -> Result<()> {
    let config = GlobalConfig::load()?;

    if store::delete(&config.data_path(), id)? {
        println!("Deleted {}", id);
        Ok(())
    } else {
        anyhow::bail!("Event not found: {}", id)
    }
}
