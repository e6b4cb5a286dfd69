//! JSON file-per-event store.
//!
//! Events live as individual .json files in a flat directory with
//! human-readable `YYYY-MM-DD__title-slug.json` filenames, so a store
//! directory reads sensibly in a file manager and diffs cleanly under
//! version control.

use std::path::{Path, PathBuf};

use crate::error::{DayGridError, DayGridResult};
use crate::event::Event;

/// A stored event together with the file that holds it.
#[derive(Debug, Clone)]
pub struct StoredEvent {
    pub path: PathBuf,
    pub event: Event,
}

/// List all events in a store directory, sorted by filename.
///
/// Unreadable or unparseable files are skipped rather than failing the
/// whole listing. A missing directory is an empty store.
pub fn list(dir: &Path) -> DayGridResult<Vec<StoredEvent>> {
    let mut stored = Vec::new();

    if !dir.exists() {
        return Ok(stored);
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|e| e == "json"))
        .collect();
    paths.sort();

    for path in paths {
        if let Ok(content) = std::fs::read_to_string(&path)
            && let Ok(event) = serde_json::from_str::<Event>(&content)
        {
            stored.push(StoredEvent { path, event });
        }
    }

    Ok(stored)
}

/// Find one event by id.
pub fn find(dir: &Path, event_id: &str) -> DayGridResult<Option<StoredEvent>> {
    Ok(list(dir)?
        .into_iter()
        .find(|stored| stored.event.id == event_id))
}

/// Write a new event file, returning its path.
pub fn create(dir: &Path, event: &Event) -> DayGridResult<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let content = serde_json::to_string_pretty(event)
        .map_err(|e| DayGridError::Serialization(e.to_string()))?;
    let filename = filename_for(event, dir)?;
    let path = dir.join(filename);

    std::fs::write(&path, content)?;
    Ok(path)
}

/// Replace the stored event with `event_id` by `event`.
pub fn update(dir: &Path, event_id: &str, event: &Event) -> DayGridResult<PathBuf> {
    delete(dir, event_id)?;
    create(dir, event)
}

/// Delete the file holding `event_id`, if any. Returns whether a file was
/// removed.
pub fn delete(dir: &Path, event_id: &str) -> DayGridResult<bool> {
    if let Some(stored) = find(dir, event_id)? {
        std::fs::remove_file(&stored.path)?;
        return Ok(true);
    }
    Ok(false)
}

// =============================================================================
// Filename generation
// =============================================================================

/// Generate a unique filename for an event, handling collisions with -2,
/// -3, ... suffixes. A file already holding this event's id keeps its name.
fn filename_for(event: &Event, dir: &Path) -> DayGridResult<String> {
    let base = base_filename(event);
    let stem = base.trim_end_matches(".json");

    if !dir.join(&base).exists() || file_has_id(dir, &base, &event.id) {
        return Ok(base);
    }

    for n in 2..=100 {
        let suffixed = format!("{}-{}.json", stem, n);
        if !dir.join(&suffixed).exists() || file_has_id(dir, &suffixed, &event.id) {
            return Ok(suffixed);
        }
    }

    Err(DayGridError::Store(format!(
        "Too many filename collisions for {}",
        base
    )))
}

fn file_has_id(dir: &Path, filename: &str, id: &str) -> bool {
    std::fs::read_to_string(dir.join(filename))
        .ok()
        .and_then(|content| serde_json::from_str::<Event>(&content).ok())
        .is_some_and(|event| event.id == id)
}

fn base_filename(event: &Event) -> String {
    format!(
        "{}__{}.json",
        event.date.format("%Y-%m-%d"),
        slugify(&event.title)
    )
}

/// Convert a string to a filename-safe slug.
fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(50)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_test_event(id: &str, title: &str) -> Event {
        Event {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            start_time: "9:00 AM".to_string(),
            end_time: "10:00 AM".to_string(),
            title: title.to_string(),
            description: None,
            attendee: None,
            color: "#FFCBE1".to_string(),
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Team Standup"), "team-standup");
        assert_eq!(slugify("Meeting: Q4 Review!"), "meeting-q4-review");
        assert_eq!(slugify("  Lots   of   spaces  "), "lots-of-spaces");
    }

    #[test]
    fn test_base_filename() {
        let event = make_test_event("a", "Team Standup");
        assert_eq!(base_filename(&event), "2025-06-10__team-standup.json");
    }

    #[test]
    fn create_then_list_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let event = make_test_event("a", "Team Standup");

        create(dir.path(), &event).unwrap();

        let stored = list(dir.path()).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].event.id, "a");
        assert_eq!(stored[0].event.start_time, "9:00 AM");
    }

    #[test]
    fn colliding_titles_get_numeric_suffixes() {
        let dir = tempfile::tempdir().unwrap();

        let first = create(dir.path(), &make_test_event("a", "Standup")).unwrap();
        let second = create(dir.path(), &make_test_event("b", "Standup")).unwrap();

        assert_eq!(
            first.file_name().unwrap().to_string_lossy(),
            "2025-06-10__standup.json"
        );
        assert_eq!(
            second.file_name().unwrap().to_string_lossy(),
            "2025-06-10__standup-2.json"
        );
        assert_eq!(list(dir.path()).unwrap().len(), 2);
    }

    #[test]
    fn delete_removes_only_the_named_event() {
        let dir = tempfile::tempdir().unwrap();
        create(dir.path(), &make_test_event("a", "Standup")).unwrap();
        create(dir.path(), &make_test_event("b", "Review")).unwrap();

        assert!(delete(dir.path(), "a").unwrap());
        assert!(!delete(dir.path(), "a").unwrap());

        let remaining = list(dir.path()).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].event.id, "b");
    }

    #[test]
    fn update_rewrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let mut event = make_test_event("a", "Standup");
        create(dir.path(), &event).unwrap();

        event.start_time = "9:30 AM".to_string();
        update(dir.path(), "a", &event).unwrap();

        let stored = list(dir.path()).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].event.start_time, "9:30 AM");
    }

    #[test]
    fn unparseable_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        create(dir.path(), &make_test_event("a", "Standup")).unwrap();
        std::fs::write(dir.path().join("junk.json"), "not json").unwrap();

        assert_eq!(list(dir.path()).unwrap().len(), 1);
    }

    #[test]
    fn missing_directory_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(list(&missing).unwrap().is_empty());
    }
}
