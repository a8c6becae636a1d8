//! The drawing primitives the rain needs from its host.

/// The subset of a 2D canvas context the renderer paints with.
///
/// Style setters take CSS strings (`rgba(0, 0, 0, 0.5)`, `#00FF00`,
/// `18px monospace`) exactly as a browser canvas would.
pub trait DrawingContext {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Paint `text` with its alphabetic baseline at `y`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Push the current style state.
    fn save(&mut self);

    /// Pop the style state pushed by the matching [`save`](Self::save).
    fn restore(&mut self);

    fn set_font(&mut self, font: &str);
    fn set_fill_style(&mut self, style: &str);
    fn set_shadow_color(&mut self, color: &str);
    fn set_shadow_blur(&mut self, blur: f64);
}

/// A sizable drawing surface.
pub trait Canvas {
    /// Rendered size of the surface in pixels, possibly fractional.
    fn bounding_size(&self) -> (f64, f64);

    /// Set the backing pixel size.
    fn set_size(&mut self, width: u32, height: u32);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
}
