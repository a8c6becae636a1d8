//! Column grid construction and the per-column state machine.

use glyphrain_core::{Column, MIN_STACK_HEIGHT};

use crate::glyphs::RandomSource;

/// The set of columns covering one canvas size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    pub columns: Vec<Column>,
    /// Number of tiles that fit vertically, rounded up.
    pub max_stack_height: u32,
}

impl Grid {
    /// Lay out `floor(width / tile_size)` columns with random stream lengths
    /// and staggered starts.
    pub fn build<R>(width: u32, height: u32, tile_size: u32, random: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let max_stack_height = height.div_ceil(tile_size);
        let columns = (0..width / tile_size)
            .map(|i| Column {
                x: i * tile_size,
                stack_height: stack_height(max_stack_height, random),
                // Up to two screens of delay so columns start independently
                stack_counter: -slots(random.random_int(max_stack_height.saturating_mul(2))),
            })
            .collect();

        Self {
            columns,
            max_stack_height,
        }
    }
}

/// A fresh stream length: `10 + random_int(max_stack_height)`.
pub fn stack_height<R>(max_stack_height: u32, random: &mut R) -> i32
where
    R: RandomSource + ?Sized,
{
    MIN_STACK_HEIGHT.saturating_add(slots(random.random_int(max_stack_height)))
}

/// A slot count as an `i32`, clamped for canvases taller than `i32::MAX` tiles.
fn slots(count: u32) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

/// Move a column one slot down, starting a new stream once the current one
/// is full.
pub fn advance<R>(column: &mut Column, max_stack_height: u32, random: &mut R)
where
    R: RandomSource + ?Sized,
{
    column.stack_counter += 1;
    if column.stack_counter >= column.stack_height {
        column.stack_height = stack_height(max_stack_height, random);
        column.stack_counter = 0;
    }
}
