//! Colour parsing and canvas style strings.

use glyphrain_core::Rgb;

/// Parse a `#rrggbb` colour. The leading `#` is optional and digits are
/// case-insensitive. Any other shape yields `None`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// `rgb(r, g, b)` fill style.
pub fn rgb_style(color: Rgb) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}

/// `rgba(r, g, b, a)` fill style.
pub fn rgba_style(color: Rgb, alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, alpha)
}
