//! Color helpers for block rendering.

use egui::Color32;

/// Fallback block color when an item carries no usable color.
pub const DEFAULT_BLOCK_COLOR: Color32 = Color32::from_rgb(100, 150, 200);

/// Parse a `#RRGGBB` hex string.
///
/// # Returns
/// * `Some(Color32)` if parsing succeeds
/// * `None` if the input is empty or invalid
pub fn parse_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color32::from_rgb(r, g, b))
}

/// Resolve an item's optional color field, falling back to the default.
pub fn block_color(color: Option<&str>) -> Color32 {
    color.and_then(parse_color).unwrap_or(DEFAULT_BLOCK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(parse_color("#FF5500"), Some(Color32::from_rgb(255, 85, 0)));
        assert_eq!(parse_color("00FF00"), Some(Color32::from_rgb(0, 255, 0)));
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(parse_color("").is_none());
        assert!(parse_color("FF5").is_none());
        assert!(parse_color("GGGGGG").is_none());
    }

    #[test]
    fn block_color_falls_back_to_default() {
        assert_eq!(block_color(None), DEFAULT_BLOCK_COLOR);
        assert_eq!(block_color(Some("nope")), DEFAULT_BLOCK_COLOR);
        assert_eq!(block_color(Some("#102030")), Color32::from_rgb(16, 32, 48));
    }
}
