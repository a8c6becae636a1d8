//! Paints one frame of rain and advances every column.

use glyphrain_core::{Column, GLOW_BLUR};

use crate::color::{rgb_style, rgba_style};
use crate::glyphs::{RandomSource, random_character};
use crate::grid::advance;
use crate::style::RenderStyle;
use crate::surface::{Canvas, DrawingContext};

/// Everything one frame needs, borrowed for the duration of the frame.
///
/// The column slice is borrowed once, so a frame always sees a single grid.
pub struct Renderer<'a, X: ?Sized, C: ?Sized, R: ?Sized> {
    ctx: &'a mut X,
    canvas: &'a C,
    columns: &'a mut [Column],
    max_stack_height: u32,
    style: &'a RenderStyle,
    random: &'a mut R,
}

impl<'a, X, C, R> Renderer<'a, X, C, R>
where
    X: DrawingContext + ?Sized,
    C: Canvas + ?Sized,
    R: RandomSource + ?Sized,
{
    pub fn new(
        ctx: &'a mut X,
        canvas: &'a C,
        columns: &'a mut [Column],
        max_stack_height: u32,
        style: &'a RenderStyle,
        random: &'a mut R,
    ) -> Self {
        Self {
            ctx,
            canvas,
            columns,
            max_stack_height,
            style,
            random,
        }
    }

    /// Fade the previous frame, then paint and advance each column left to right.
    pub fn draw(&mut self) {
        self.draw_background();
        self.draw_columns();
    }

    fn draw_background(&mut self) {
        let fill = rgba_style(self.style.background, self.style.fade_factor);
        self.ctx.set_fill_style(&fill);
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.ctx.set_font(&self.style.canvas_font());
    }

    fn draw_columns(&mut self) {
        let tile = self.style.tile_size as f64;
        let font_fill = rgb_style(self.style.font);

        for column in self.columns.iter_mut() {
            // Waiting columns only count down.
            if !column.is_waiting() {
                let glyph = random_character(self.style.tile_set.as_deref(), &mut *self.random);
                let x = column.x as f64;
                let y = column.stack_counter as f64 * tile + tile;

                self.ctx.set_fill_style(&font_fill);
                self.ctx.fill_text(&glyph, x, y);

                if column.is_head() {
                    self.ctx.save();
                    self.ctx.set_shadow_color(&self.style.glow_color);
                    self.ctx.set_shadow_blur(GLOW_BLUR);
                    self.ctx.set_fill_style(&self.style.glow_color);
                    self.ctx.fill_text(&glyph, x, y);
                    self.ctx.restore();
                }
            }

            advance(column, self.max_stack_height, &mut *self.random);
        }
    }
}
