//! In-memory surfaces that record what was drawn.
//!
//! These stand in for a real canvas wherever a frame needs to be inspected
//! rather than shown: tests, headless hosts, and debugging.

use crate::surface::{Canvas, DrawingContext};

/// One recorded drawing operation, with the style in effect when it ran.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill_style: String,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        fill_style: String,
        font: String,
        shadow_color: String,
        shadow_blur: f64,
    },
    Save,
    Restore,
}

/// Style state carried by a context and saved/restored as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextState {
    pub font: String,
    pub fill_style: String,
    pub shadow_color: String,
    pub shadow_blur: f64,
}

impl Default for ContextState {
    fn default() -> Self {
        // Same initial state as a fresh HTML canvas context.
        Self {
            font: "10px sans-serif".to_string(),
            fill_style: "#000000".to_string(),
            shadow_color: "rgba(0, 0, 0, 0)".to_string(),
            shadow_blur: 0.0,
        }
    }
}

/// A [`DrawingContext`] that keeps a log of every call.
#[derive(Debug, Default, Clone)]
pub struct RecordingContext {
    calls: Vec<DrawCall>,
    state: ContextState,
    stack: Vec<ContextState>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call recorded so far, oldest first.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drain the call log, keeping the current style state.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Current style state.
    pub fn state(&self) -> &ContextState {
        &self.state
    }

    /// Number of unmatched `save` calls.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Recorded glyph paints, in order.
    pub fn texts(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::FillText { .. }))
    }
}

impl DrawingContext for RecordingContext {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::FillRect {
            x,
            y,
            width,
            height,
            fill_style: self.state.fill_style.clone(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.calls.push(DrawCall::FillText {
            text: text.to_string(),
            x,
            y,
            fill_style: self.state.fill_style.clone(),
            font: self.state.font.clone(),
            shadow_color: self.state.shadow_color.clone(),
            shadow_blur: self.state.shadow_blur,
        });
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        // Unbalanced restores are ignored, as on a real canvas.
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
        self.calls.push(DrawCall::Restore);
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_string();
    }

    fn set_fill_style(&mut self, style: &str) {
        self.state.fill_style = style.to_string();
    }

    fn set_shadow_color(&mut self, color: &str) {
        self.state.shadow_color = color.to_string();
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        self.state.shadow_blur = blur;
    }
}

/// A [`Canvas`] whose rendered size is set by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingCanvas {
    bounds: (f64, f64),
    width: u32,
    height: u32,
}

impl RecordingCanvas {
    /// A canvas that will measure `width` x `height`. The backing size stays
    /// zero until the driver sizes it.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            bounds: (width, height),
            width: 0,
            height: 0,
        }
    }

    /// Change the rendered size, as a layout change would.
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.bounds = (width, height);
    }
}

impl Canvas for RecordingCanvas {
    fn bounding_size(&self) -> (f64, f64) {
        self.bounds
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
