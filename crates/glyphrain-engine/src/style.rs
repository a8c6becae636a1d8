//! Validated appearance settings.

use glyphrain_core::{RainConfig, Rgb};

use crate::color::hex_to_rgb;
use crate::error::ConfigError;

/// Smallest tile that still leaves a positive font size.
const MIN_TILE_SIZE: u32 = 3;

/// Appearance the renderer paints with. Only built from a [`RainConfig`]
/// that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub tile_size: u32,
    pub fade_factor: f64,
    pub background: Rgb,
    pub font: Rgb,
    pub glow_color: String,
    pub tile_set: Option<Vec<String>>,
}

impl RenderStyle {
    /// Validate `config`. Colours are checked first, background before font.
    pub fn from_config(config: &RainConfig) -> Result<Self, ConfigError> {
        let background =
            hex_to_rgb(&config.background_color).ok_or(ConfigError::InvalidBackgroundColor)?;
        let font = hex_to_rgb(&config.font_color).ok_or(ConfigError::InvalidFontColor)?;

        if config.tile_size < MIN_TILE_SIZE {
            return Err(ConfigError::InvalidTileSize(config.tile_size));
        }
        if !(0.0..=1.0).contains(&config.fade_factor) {
            return Err(ConfigError::InvalidFadeFactor(config.fade_factor));
        }
        if config.fps == 0 {
            return Err(ConfigError::InvalidFps(config.fps));
        }

        Ok(Self {
            tile_size: config.tile_size,
            fade_factor: config.fade_factor,
            background,
            font,
            glow_color: config.glow_color.clone(),
            tile_set: config.tile_set.clone().filter(|tiles| !tiles.is_empty()),
        })
    }

    /// Canvas font for glyphs, two pixels smaller than the tile.
    pub fn canvas_font(&self) -> String {
        format!("{}px monospace", self.tile_size - 2)
    }
}
