//! Rain configuration as supplied by the host.

use serde::{Deserialize, Serialize};

use crate::DEFAULT_FPS;

/// Unvalidated rain settings.
///
/// Every field has a default, so a partial TOML table or an empty struct
/// update is enough to get the stock green-on-black rain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RainConfig {
    /// Glyph cell size in pixels. Drives the font size and column width.
    pub tile_size: u32,
    /// Alpha of the per-frame background repaint.
    pub fade_factor: f64,
    /// Background fill colour as `#rrggbb`.
    pub background_color: String,
    /// Glyph fill colour as `#rrggbb`.
    pub font_color: String,
    /// Glow colour for the head glyph. Any CSS colour string.
    pub glow_color: String,
    /// Glyphs to draw from. `None` or empty means printable ASCII.
    pub tile_set: Option<Vec<String>>,
    /// Target frames per second.
    pub fps: u32,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            tile_size: 20,
            fade_factor: 0.5,
            background_color: "#111111".to_string(),
            font_color: "#008529".to_string(),
            glow_color: "#00FF00".to_string(),
            tile_set: None,
            fps: DEFAULT_FPS,
        }
    }
}

impl RainConfig {
    /// Milliseconds between drawn frames.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.fps as f64
    }

    /// Split a string into single-glyph tiles, e.g. `"01"` -> `["0", "1"]`.
    pub fn tiles_from_chars(chars: &str) -> Vec<String> {
        chars.chars().map(String::from).collect()
    }
}
