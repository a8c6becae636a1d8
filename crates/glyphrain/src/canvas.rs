//! A terminal cell grid that behaves like a 2D canvas.
//!
//! Each terminal cell stands for a `CELL_WIDTH_PX` x `CELL_HEIGHT_PX` block
//! of canvas pixels. Translucent fills fade the glyphs underneath toward the
//! fill colour, which gives the rain its trails without a pixel buffer.

use glyphrain_core::Rgb;
use glyphrain_engine::{Canvas, DrawingContext};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::css::{Rgba, parse_color};

/// Canvas pixels per terminal column.
pub const CELL_WIDTH_PX: f64 = 10.0;

/// Canvas pixels per terminal row.
pub const CELL_HEIGHT_PX: f64 = 20.0;

/// Glyphs closer than this to the background (per channel) are erased.
const FADE_CUTOFF: f64 = 6.0;

/// The canvas element: reports the terminal viewport in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct CellCanvas {
    cols: u16,
    rows: u16,
    width: u32,
    height: u32,
}

impl CellCanvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            width: 0,
            height: 0,
        }
    }

    /// Record a new terminal size. The backing size follows on the next rebuild.
    pub fn set_viewport(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }
}

impl Canvas for CellCanvas {
    fn bounding_size(&self) -> (f64, f64) {
        (
            self.cols as f64 * CELL_WIDTH_PX,
            self.rows as f64 * CELL_HEIGHT_PX,
        )
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

#[derive(Debug, Clone, PartialEq)]
struct Cell {
    glyph: String,
    color: [f64; 3],
    glow: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct PaintState {
    fill: Rgba,
    shadow: Option<Rgb>,
    shadow_blur: f64,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            fill: Rgba {
                rgb: Rgb::new(0, 0, 0),
                alpha: 1.0,
            },
            shadow: None,
            shadow_blur: 0.0,
        }
    }
}

/// The 2D context: a grid of glyph cells.
#[derive(Debug, Clone)]
pub struct CellContext {
    cols: u16,
    rows: u16,
    cells: Vec<Option<Cell>>,
    background: Option<Rgb>,
    state: PaintState,
    saved: Vec<PaintState>,
}

impl CellContext {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; cols as usize * rows as usize],
            background: None,
            state: PaintState::default(),
            saved: Vec::new(),
        }
    }

    /// Resize the grid, clearing it, as resizing a canvas does.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![None; cols as usize * rows as usize];
    }

    /// Grid size in cells, `(cols, rows)`.
    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Glyph at a cell, if any.
    pub fn glyph_at(&self, col: u16, row: u16) -> Option<&str> {
        self.cell(col, row).map(|cell| cell.glyph.as_str())
    }

    /// Whether the glyph at a cell is painted with a glow.
    pub fn glows_at(&self, col: u16, row: u16) -> bool {
        self.cell(col, row).is_some_and(|cell| cell.glow)
    }

    fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        self.index(col as i64, row as i64)
            .and_then(|i| self.cells[i].as_ref())
    }

    fn index(&self, col: i64, row: i64) -> Option<usize> {
        let in_bounds = (0..self.cols as i64).contains(&col) && (0..self.rows as i64).contains(&row);
        in_bounds.then(|| row as usize * self.cols as usize + col as usize)
    }
}

impl DrawingContext for CellContext {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let Rgba { rgb: fill, alpha } = self.state.fill;
        let target = [fill.r as f64, fill.g as f64, fill.b as f64];

        let col_start = (x / CELL_WIDTH_PX).floor().max(0.0) as i64;
        let col_end = ((x + width) / CELL_WIDTH_PX).ceil() as i64;
        let row_start = (y / CELL_HEIGHT_PX).floor().max(0.0) as i64;
        let row_end = ((y + height) / CELL_HEIGHT_PX).ceil() as i64;

        for row in row_start..row_end {
            for col in col_start..col_end {
                let Some(i) = self.index(col, row) else {
                    continue;
                };
                let Some(cell) = &mut self.cells[i] else {
                    continue;
                };
                for (channel, goal) in cell.color.iter_mut().zip(target) {
                    *channel += (goal - *channel) * alpha;
                }
                cell.glow = false;

                let near = cell
                    .color
                    .iter()
                    .zip(target)
                    .all(|(channel, goal)| (channel - goal).abs() < FADE_CUTOFF);
                if near {
                    self.cells[i] = None;
                }
            }
        }

        if alpha > 0.0 {
            self.background = Some(fill);
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let fill = self.state.fill.rgb;
        // `y` is the baseline, i.e. the bottom edge of the glyph's row.
        let col = (x / CELL_WIDTH_PX).floor() as i64;
        let row = (y / CELL_HEIGHT_PX).ceil() as i64 - 1;
        let Some(i) = self.index(col, row) else {
            return;
        };

        let glow = self.state.shadow_blur > 0.0 && self.state.shadow.is_some();
        self.cells[i] = Some(Cell {
            glyph: text.to_string(),
            color: [fill.r as f64, fill.g as f64, fill.b as f64],
            glow,
        });
    }

    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn set_font(&mut self, _font: &str) {
        // Terminal cells have a fixed font.
    }

    fn set_fill_style(&mut self, style: &str) {
        if let Some(color) = parse_color(style) {
            self.state.fill = color;
        }
    }

    fn set_shadow_color(&mut self, color: &str) {
        if let Some(color) = parse_color(color) {
            self.state.shadow = Some(color.rgb);
        }
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        if blur.is_finite() && blur >= 0.0 {
            self.state.shadow_blur = blur;
        }
    }
}

impl Widget for &CellContext {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = match self.background {
            Some(bg) => Style::new().bg(Color::Rgb(bg.r, bg.g, bg.b)),
            None => Style::new(),
        };

        for y in 0..area.height.min(self.rows) {
            for x in 0..area.width.min(self.cols) {
                let Some(target) = buf.cell_mut((area.x + x, area.y + y)) else {
                    continue;
                };
                target.reset();
                target.set_style(base);
                if let Some(cell) = self.cell(x, y) {
                    let [r, g, b] = cell.color.map(|c| c.round().clamp(0.0, 255.0) as u8);
                    let mut style = Style::new().fg(Color::Rgb(r, g, b));
                    if cell.glow {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    target.set_symbol(&cell.glyph).set_style(style);
                } else {
                    target.set_symbol(" ");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glyphrain_core::RainConfig;
    use glyphrain_engine::{FrameOutcome, MatrixRain};

    use super::*;

    #[test]
    fn test_canvas_reports_pixels() {
        let mut canvas = CellCanvas::new(80, 24);
        assert_eq!(canvas.bounding_size(), (800.0, 480.0));
        canvas.set_viewport(10, 5);
        assert_eq!(canvas.bounding_size(), (100.0, 100.0));
    }

    #[test]
    fn test_text_lands_on_baseline_row() {
        let mut ctx = CellContext::new(20, 10);
        ctx.set_fill_style("rgb(0, 255, 0)");
        // Row 2 of a 20px tile: baseline at 60.
        ctx.fill_text("A", 40.0, 60.0);
        assert_eq!(ctx.glyph_at(4, 2), Some("A"));
        assert_eq!(ctx.glyph_at(4, 3), None);
        assert!(!ctx.glows_at(4, 2));

        ctx.fill_text("B", 1_000.0, 60.0);
        ctx.fill_text("C", 0.0, 0.0);
        assert_eq!(ctx.glyph_at(0, 0), None);
    }

    #[test]
    fn test_translucent_fill_fades_then_erases() {
        let mut ctx = CellContext::new(4, 4);
        ctx.set_fill_style("rgb(0, 255, 0)");
        ctx.fill_text("x", 0.0, 20.0);

        ctx.set_fill_style("rgba(0, 0, 0, 0.5)");
        ctx.fill_rect(0.0, 0.0, 40.0, 80.0);
        assert_eq!(ctx.glyph_at(0, 0), Some("x"));

        for _ in 0..8 {
            ctx.fill_rect(0.0, 0.0, 40.0, 80.0);
        }
        assert_eq!(ctx.glyph_at(0, 0), None);
    }

    #[test]
    fn test_glow_is_saved_state() {
        let mut ctx = CellContext::new(4, 4);
        ctx.save();
        ctx.set_shadow_color("#00FF00");
        ctx.set_shadow_blur(10.0);
        ctx.set_fill_style("#00FF00");
        ctx.fill_text("g", 10.0, 20.0);
        ctx.restore();
        assert!(ctx.glows_at(1, 0));

        ctx.fill_text("h", 20.0, 20.0);
        assert!(!ctx.glows_at(2, 0));

        ctx.set_fill_style("rgba(0, 0, 0, 0.5)");
        ctx.fill_rect(0.0, 0.0, 40.0, 80.0);
        assert!(!ctx.glows_at(1, 0));
    }

    #[test]
    fn test_invalid_style_is_ignored() {
        let mut ctx = CellContext::new(2, 2);
        ctx.set_fill_style("#00FF00");
        ctx.set_fill_style("not a colour");
        ctx.fill_text("k", 0.0, 20.0);

        let mut buf = Buffer::empty(Rect::new(0, 0, 2, 2));
        (&ctx).render(buf.area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "k");
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(0, 255, 0));
    }

    #[test]
    fn test_render_glow_is_bold() {
        let mut ctx = CellContext::new(3, 1);
        ctx.set_fill_style("rgba(17, 17, 17, 1)");
        ctx.fill_rect(0.0, 0.0, 30.0, 20.0);
        ctx.set_shadow_color("#00FF00");
        ctx.set_shadow_blur(10.0);
        ctx.set_fill_style("#00FF00");
        ctx.fill_text("Z", 0.0, 20.0);

        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        (&ctx).render(buf.area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "Z");
        assert!(buf[(0, 0)].modifier.contains(Modifier::BOLD));
        assert_eq!(buf[(1, 0)].symbol(), " ");
        assert_eq!(buf[(1, 0)].bg, Color::Rgb(17, 17, 17));
    }

    #[test]
    fn test_driver_paints_terminal_grid() {
        let config = RainConfig {
            tile_size: 20,
            ..RainConfig::default()
        };
        let mut driver = MatrixRain::new(&config).expect("valid config").mount_with_random(
            CellCanvas::new(40, 10),
            CellContext::new(40, 10),
            |_max: u32| 0u32,
        );
        assert_eq!(driver.columns().len(), 20);

        driver.tick(1.0);
        assert_eq!(driver.tick(150.0), FrameOutcome::Drawn);
        // Every column starts immediately at row 0, one column every two cells.
        for col in (0..40).step_by(2) {
            assert!(driver.context().glyph_at(col, 0).is_some());
            assert!(driver.context().glyph_at(col + 1, 0).is_none());
        }
    }
}
