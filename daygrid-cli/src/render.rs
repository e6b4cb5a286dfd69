//! Terminal rendering for daygrid views.
//!
//! This module provides extension traits and helpers that add colored
//! terminal rendering to daygrid-core types using owo_colors.

use daygrid_core::fragment::Fragment;
use daygrid_core::layout::EventLayout;
use daygrid_core::{color, grid, layout_of};
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Fragment {
    fn render(&self) -> String {
        let label = self.time_range_label();
        if label.is_empty() {
            format!("{} {}", swatch(&self.color), self.title)
        } else {
            format!(
                "{} {}  {}",
                swatch(&self.color),
                label.dimmed(),
                self.title
            )
        }
    }
}

/// A colored marker in the event's resolved display color.
pub fn swatch(raw: &str) -> String {
    match color::hex_to_rgb(&color::resolve_color(raw)) {
        Some((r, g, b)) => "●".truecolor(r, g, b).to_string(),
        None => "●".to_string(),
    }
}

/// Geometry summary appended to grid rows: duration and, when the cell is
/// split into columns, this fragment's slot.
pub fn geometry(layout: &EventLayout) -> String {
    let mut parts = vec![format!("{}min", layout.duration_minutes)];
    if layout.column_count() > 1 {
        parts.push(format!(
            "col {}/{}",
            layout.column_index() + 1,
            layout.column_count()
        ));
    }
    format!("[{}]", parts.join(", "))
}

/// Render one day as a 24-row hour grid. Each fragment appears once, at
/// its anchor hour row.
pub fn day_grid(fragments: &[Fragment]) -> String {
    let mut lines = Vec::new();

    for hour in 0..24 {
        lines.push(format!("{:>9} ┤", grid::hour_label(hour)).dimmed().to_string());

        for fragment in fragments {
            let layout = layout_of(fragment, fragments);
            if layout.start_hour == hour {
                lines.push(format!(
                    "          │   {} {}",
                    fragment.render(),
                    geometry(&layout).dimmed()
                ));
            }
        }
    }

    lines.join("\n")
}
