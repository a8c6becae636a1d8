//! Frame-throttled animation driver.
//!
//! [`MatrixRain`] is a validated configuration. Mounting it on a canvas
//! yields an [`AnimationDriver`], which owns the canvas, its drawing
//! context and the column grid for as long as the animation lives.
//!
//! The host calls [`AnimationDriver::tick`] once per display frame and
//! schedules another frame while the outcome asks for one. The driver draws
//! at most once per frame interval regardless of how often it is ticked.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use glyphrain_core::{Column, RESIZE_DEBOUNCE_MS, RainConfig};
use tracing::{debug, trace};

use crate::debounce::Debouncer;
use crate::error::ConfigError;
use crate::glyphs::{OsRandom, RandomSource};
use crate::grid::Grid;
use crate::renderer::Renderer;
use crate::style::RenderStyle;
use crate::surface::{Canvas, DrawingContext};

/// A rain configuration that passed validation and can be mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRain {
    style: RenderStyle,
    frame_interval_ms: f64,
}

impl MatrixRain {
    /// Validate `config`. Nothing is drawn yet.
    pub fn new(config: &RainConfig) -> Result<Self, ConfigError> {
        let style = RenderStyle::from_config(config)?;
        Ok(Self {
            style,
            frame_interval_ms: config.frame_interval_ms(),
        })
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.frame_interval_ms
    }

    /// Mount on `canvas`, drawing through `ctx` with OS randomness.
    pub fn mount<C, X>(self, canvas: C, ctx: X) -> AnimationDriver<C, X>
    where
        C: Canvas,
        X: DrawingContext,
    {
        self.mount_with_random(canvas, ctx, OsRandom)
    }

    /// Mount with an explicit random source.
    pub fn mount_with_random<C, X, R>(self, canvas: C, ctx: X, random: R) -> AnimationDriver<C, X, R>
    where
        C: Canvas,
        X: DrawingContext,
        R: RandomSource,
    {
        let mut driver = AnimationDriver {
            canvas,
            ctx,
            random,
            style: self.style,
            frame_interval_ms: self.frame_interval_ms,
            grid: Grid::default(),
            last_frame_time: 0.0,
            resize: Debouncer::new(RESIZE_DEBOUNCE_MS),
            listening: true,
            disposed: DisposeHandle::default(),
        };
        driver.rebuild_grid();
        driver
    }
}

/// Result of one [`AnimationDriver::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A frame was painted.
    Drawn,
    /// Too soon since the last frame; nothing was painted.
    Throttled,
    /// The driver was torn down. Do not schedule another frame.
    Stopped,
}

impl FrameOutcome {
    /// Whether the host should schedule another tick.
    pub fn wants_next_frame(self) -> bool {
        self != FrameOutcome::Stopped
    }
}

/// Shared disposal flag for a driver.
///
/// Clones observe the same flag, so a signal handler or another thread can
/// stop an animation it does not own.
#[derive(Debug, Clone, Default)]
pub struct DisposeHandle(Arc<AtomicBool>);

impl DisposeHandle {
    pub fn dispose(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_disposed(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Owns one canvas and runs the rain on it.
#[derive(Debug)]
pub struct AnimationDriver<C, X, R = OsRandom> {
    canvas: C,
    ctx: X,
    random: R,
    style: RenderStyle,
    frame_interval_ms: f64,
    grid: Grid,
    /// Timestamp the throttle measures from. Zero until the first tick.
    last_frame_time: f64,
    resize: Debouncer,
    /// Whether resize notifications are still accepted.
    listening: bool,
    disposed: DisposeHandle,
}

impl<C, X, R> AnimationDriver<C, X, R>
where
    C: Canvas,
    X: DrawingContext,
    R: RandomSource,
{
    /// Record that the viewport changed size at `now_ms`. The grid is rebuilt
    /// by the first tick at least 100 ms after the last notification.
    pub fn notify_resize(&mut self, now_ms: f64) {
        if self.listening && !self.is_disposed() {
            self.resize.trigger(now_ms);
        }
    }

    /// Rebuild the grid if a debounced resize is due. Returns whether it did.
    pub fn poll_resize(&mut self, now_ms: f64) -> bool {
        if self.resize.fire(now_ms) {
            self.rebuild_grid();
            true
        } else {
            false
        }
    }

    /// Advance the animation to `timestamp` (milliseconds, monotonic).
    pub fn tick(&mut self, timestamp: f64) -> FrameOutcome {
        if self.is_disposed() {
            return FrameOutcome::Stopped;
        }

        // A pending rebuild lands between frames, never inside one.
        self.poll_resize(timestamp);

        if self.last_frame_time == 0.0 {
            self.last_frame_time = timestamp;
        }

        let delta = timestamp - self.last_frame_time;
        if delta > self.frame_interval_ms {
            self.draw();
            // Keep the sub-interval remainder so the cadence does not drift.
            self.last_frame_time = timestamp - delta % self.frame_interval_ms;
            FrameOutcome::Drawn
        } else {
            FrameOutcome::Throttled
        }
    }

    /// Paint one frame immediately, bypassing the throttle.
    pub fn draw(&mut self) {
        Renderer::new(
            &mut self.ctx,
            &self.canvas,
            &mut self.grid.columns,
            self.grid.max_stack_height,
            &self.style,
            &mut self.random,
        )
        .draw();
        trace!(columns = self.grid.columns.len(), "drew rain frame");
    }

    /// Stop listening for resizes and stop the tick chain.
    pub fn teardown(&mut self) {
        self.listening = false;
        self.resize.cancel();
        self.disposed.dispose();
        debug!("rain animation torn down");
    }

    /// A handle that disposes this driver when triggered.
    pub fn dispose_handle(&self) -> DisposeHandle {
        self.disposed.clone()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.is_disposed()
    }

    /// Whether a debounced resize is waiting to be applied.
    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    pub fn columns(&self) -> &[Column] {
        &self.grid.columns
    }

    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.grid.columns
    }

    pub fn max_stack_height(&self) -> u32 {
        self.grid.max_stack_height
    }

    pub fn last_frame_time(&self) -> f64 {
        self.last_frame_time
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn context(&self) -> &X {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut X {
        &mut self.ctx
    }

    /// Measure the canvas, match its backing size and lay out a fresh grid.
    /// All column progress is discarded.
    fn rebuild_grid(&mut self) {
        let (width, height) = self.canvas.bounding_size();
        self.canvas
            .set_size(width.max(0.0) as u32, height.max(0.0) as u32);

        self.grid = Grid::build(
            self.canvas.width(),
            self.canvas.height(),
            self.style.tile_size,
            &mut self.random,
        );
        debug!(
            width = self.canvas.width(),
            height = self.canvas.height(),
            columns = self.grid.columns.len(),
            max_stack_height = self.grid.max_stack_height,
            "built rain grid"
        );
    }
}
