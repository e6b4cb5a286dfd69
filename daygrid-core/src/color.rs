//! Event color palette and best-effort color resolution.

use serde::Deserialize;

/// A named palette entry.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColor {
    pub name: &'static str,
    pub value: &'static str,
}

/// The pastel palette offered by the event form. The first entry is the
/// default for events stored without a usable color.
pub const PALETTE: [PaletteColor; 6] = [
    PaletteColor { name: "Pink", value: "#FFCBE1" },
    PaletteColor { name: "Green", value: "#D6E5BD" },
    PaletteColor { name: "Yellow", value: "#F9E1A8" },
    PaletteColor { name: "Blue", value: "#BCD8EC" },
    PaletteColor { name: "Purple", value: "#DCCCEC" },
    PaletteColor { name: "Peach", value: "#FFDAB4" },
];

/// The default display color (first palette entry).
pub fn default_color() -> String {
    PALETTE[0].value.to_string()
}

/// Older stores kept the whole palette entry as a JSON blob; only the name
/// is needed to resolve it.
#[derive(Deserialize)]
struct LegacyColor {
    name: String,
}

/// Resolve a stored color value to a displayable hex string. Never fails:
/// `#`-prefixed values pass through, a palette name or legacy JSON blob
/// resolves by name, and anything else falls back to the default color.
pub fn resolve_color(raw: &str) -> String {
    let raw = raw.trim();

    if raw.starts_with('#') {
        return raw.to_string();
    }

    if let Ok(legacy) = serde_json::from_str::<LegacyColor>(raw) {
        return by_name(&legacy.name).unwrap_or_else(default_color);
    }

    by_name(raw).unwrap_or_else(default_color)
}

fn by_name(name: &str) -> Option<String> {
    PALETTE
        .iter()
        .find(|color| color.name.eq_ignore_ascii_case(name))
        .map(|color| color.value.to_string())
}

/// Parse "#RRGGBB" into components for truecolor terminal output.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_passes_through() {
        assert_eq!(resolve_color("#112233"), "#112233");
    }

    #[test]
    fn palette_name_resolves() {
        assert_eq!(resolve_color("Blue"), "#BCD8EC");
        assert_eq!(resolve_color("peach"), "#FFDAB4");
    }

    #[test]
    fn legacy_json_blob_resolves_by_name() {
        let legacy = r##"{"name": "Green", "value": "#D6E5BD", "light": "#F0F5E8"}"##;
        assert_eq!(resolve_color(legacy), "#D6E5BD");
    }

    #[test]
    fn unknown_values_fall_back_to_default() {
        assert_eq!(resolve_color(""), default_color());
        assert_eq!(resolve_color("chartreuse"), default_color());
        assert_eq!(resolve_color(r##"{"name": "Mauve"}"##), default_color());
    }

    #[test]
    fn hex_to_rgb_parses_palette_entries() {
        assert_eq!(hex_to_rgb("#FFCBE1"), Some((0xFF, 0xCB, 0xE1)));
        assert_eq!(hex_to_rgb("#BCD8EC"), Some((0xBC, 0xD8, 0xEC)));
        assert_eq!(hex_to_rgb("FFCBE1"), None);
        assert_eq!(hex_to_rgb("#FFF"), None);
    }
}
