//! Random tiled collage.
//!
//! A `grid_size x grid_size` grid of cells, each filled with a stamp drawn
//! uniformly (with replacement) from the input list.

use log::debug;

use crate::error::{RasterError, Result};
use crate::raster::{Color, PixelBuffer};
use crate::util::RandomSource;

/// Compose a collage from equally sized stamps.
///
/// Cells are visited column by column (cell x outer, cell y inner) and each
/// one consumes exactly one draw from `rng`, so a seeded source reproduces
/// the same layout.
pub fn compose<R>(buffers: &[PixelBuffer], grid_size: u32, rng: &mut R) -> Result<PixelBuffer>
where
    R: RandomSource + ?Sized,
{
    let first = buffers.first().ok_or_else(|| {
        RasterError::InvalidParameter("collage needs at least one stamp".to_string())
    })?;
    if grid_size == 0 {
        return Err(RasterError::InvalidParameter(
            "collage grid size must be at least 1".to_string(),
        ));
    }

    let (stamp_w, stamp_h) = first.dimensions();
    if let Some(odd) = buffers.iter().find(|b| b.dimensions() != (stamp_w, stamp_h)) {
        return Err(RasterError::DimensionMismatch {
            expected_width: stamp_w,
            expected_height: stamp_h,
            width: odd.width(),
            height: odd.height(),
        });
    }

    let overflow = || RasterError::InvalidDimensions {
        width: stamp_w.saturating_mul(grid_size),
        height: stamp_h.saturating_mul(grid_size),
    };
    let out_w = stamp_w.checked_mul(grid_size).ok_or_else(overflow)?;
    let out_h = stamp_h.checked_mul(grid_size).ok_or_else(overflow)?;

    let mut collage = PixelBuffer::blank(out_w, out_h, Color::WHITE)?;
    for cell_x in 0..grid_size {
        for cell_y in 0..grid_size {
            let pick = rng.next_index(buffers.len());
            debug!("collage cell ({}, {}) <- stamp {}", cell_x, cell_y, pick);
            collage.paste(&buffers[pick], cell_x * stamp_w, cell_y * stamp_h)?;
        }
    }
    Ok(collage)
}
