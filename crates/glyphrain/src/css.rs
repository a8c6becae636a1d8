//! Parsing of the CSS colour strings the engine paints with.

use glyphrain_core::Rgb;
use glyphrain_engine::hex_to_rgb;

/// A colour with its alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

/// Parse `#rrggbb`, `#rgb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
///
/// Anything else yields `None`; a canvas ignores such assignments too.
pub fn parse_color(value: &str) -> Option<Rgba> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex).map(|rgb| Rgba { rgb, alpha: 1.0 });
    }

    let (name, args) = value.strip_suffix(')')?.split_once('(')?;
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let channel = |s: &str| s.parse::<f64>().ok().map(|v| v.clamp(0.0, 255.0).round() as u8);

    match (name.trim(), parts.as_slice()) {
        ("rgb", [r, g, b]) => Some(Rgba {
            rgb: Rgb::new(channel(*r)?, channel(*g)?, channel(*b)?),
            alpha: 1.0,
        }),
        ("rgba", [r, g, b, a]) => Some(Rgba {
            rgb: Rgb::new(channel(*r)?, channel(*g)?, channel(*b)?),
            alpha: a.parse::<f64>().ok()?.clamp(0.0, 1.0),
        }),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if hex.len() == 3 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
        return hex_to_rgb(&doubled);
    }
    hex_to_rgb(hex)
}
