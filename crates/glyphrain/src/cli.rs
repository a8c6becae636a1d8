//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use glyphrain_config::RainOverrides;
use glyphrain_core::{Preset, RainConfig};

#[derive(Parser, Debug)]
#[command(name = "glyphrain", version, about = "Digital rain for your terminal")]
pub struct Cli {
    /// Settings file to use instead of the default location.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base look: classic, crimson, large-tiles, small-tiles, binary, slow-fade, ocean, amethyst.
    #[arg(long)]
    pub preset: Option<Preset>,

    /// Glyph cell size in pixels (a terminal cell is 10x20).
    #[arg(long)]
    pub tile_size: Option<u32>,

    /// Background repaint alpha; lower values leave longer trails.
    #[arg(long = "fade")]
    pub fade_factor: Option<f64>,

    /// Background colour, e.g. #111111.
    #[arg(long = "background")]
    pub background_color: Option<String>,

    /// Glyph colour, e.g. #008529.
    #[arg(long = "font")]
    pub font_color: Option<String>,

    /// Glow colour of each stream's lead glyph.
    #[arg(long = "glow")]
    pub glow_color: Option<String>,

    /// Glyphs to draw from, e.g. "01". Defaults to printable ASCII.
    #[arg(long)]
    pub tile_set: Option<String>,

    /// Target frames per second.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Log file. Defaults to glyphrain.log in the data directory.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Save the effective settings to the settings file and exit.
    #[arg(long)]
    pub write_config: bool,
}

impl Cli {
    /// Rain fields given on the command line.
    pub fn overrides(&self) -> RainOverrides {
        RainOverrides {
            tile_size: self.tile_size,
            fade_factor: self.fade_factor,
            background_color: self.background_color.clone(),
            font_color: self.font_color.clone(),
            glow_color: self.glow_color.clone(),
            tile_set: self.tile_set.as_deref().map(RainConfig::tiles_from_chars),
            fps: self.fps,
        }
    }
}
