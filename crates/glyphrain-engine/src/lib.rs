//! Digital rain animation engine.
//!
//! Columns of random glyphs fall down a canvas, each with its own stream
//! length and staggered start. Every frame the previous one is faded by a
//! translucent background fill, which leaves the trailing glow behind each
//! stream, and the leading glyph of a stream is repainted with a shadow.
//!
//! The engine only needs the narrow [`DrawingContext`] and [`Canvas`]
//! traits from its host, so it runs the same on a browser canvas, a
//! terminal cell grid, or the [`recording`] fakes.

mod color;
mod debounce;
mod driver;
mod error;
mod glyphs;
mod grid;
pub mod recording;
mod renderer;
mod style;
mod surface;

pub use color::{hex_to_rgb, rgb_style, rgba_style};
pub use debounce::Debouncer;
pub use driver::{AnimationDriver, DisposeHandle, FrameOutcome, MatrixRain};
pub use error::ConfigError;
pub use glyphs::{OsRandom, RandomSource, random_character};
pub use grid::{Grid, advance, stack_height};
pub use renderer::Renderer;
pub use style::RenderStyle;
pub use surface::{Canvas, DrawingContext};
