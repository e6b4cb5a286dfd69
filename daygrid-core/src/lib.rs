//! Core engine for daygrid.
//!
//! This crate provides the calendar engine shared by the daygrid frontends:
//! - `Event` and `Fragment` types and the JSON file-per-event store
//! - the 12-hour/24-hour time codec (`clock`)
//! - overnight splitting, day bucketing, and overlap-aware layout
//! - week/month grid date arithmetic for renderers
//!
//! The engine is synchronous and pure: every layout function is computed
//! fresh from the event list on each render pass, owns no shared state, and
//! degrades malformed display data to harmless geometry instead of failing.

pub mod bucket;
pub mod clock;
pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod fragment;
pub mod grid;
pub mod layout;
pub mod store;

pub use bucket::{filter_events, fragments_for_cell, has_events_on, upcoming_events};
pub use error::{DayGridError, DayGridResult};
pub use event::Event;
pub use fragment::{Fragment, OvernightPart, split_event};
pub use layout::{EventLayout, layout_of};
