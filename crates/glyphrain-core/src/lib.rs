//! Core types shared by the glyphrain crates.

mod config;
mod preset;

pub use config::RainConfig;
pub use preset::Preset;

/// Target frame rate of the rain when none is configured.
pub const DEFAULT_FPS: u32 = 10;

/// Quiet period after the last resize before the grid is rebuilt.
pub const RESIZE_DEBOUNCE_MS: f64 = 100.0;

/// Every stream is at least this many glyphs long.
pub const MIN_STACK_HEIGHT: i32 = 10;

/// Shadow blur applied to the head glyph of a stream.
pub const GLOW_BLUR: f64 = 10.0;

/// An 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// State for a single falling glyph stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Pixel offset of the column along the horizontal axis.
    pub x: u32,
    /// Number of glyph slots the stream fills before it resets.
    pub stack_height: i32,
    /// Current slot within the stream. Negative while the stream is still waiting to start.
    pub stack_counter: i32,
}

impl Column {
    /// Whether the stream has not arrived yet.
    pub fn is_waiting(&self) -> bool {
        self.stack_counter < 0
    }

    /// Whether the current slot is the last one of the stream.
    pub fn is_head(&self) -> bool {
        self.stack_counter == self.stack_height - 1
    }
}
