use rayon::prelude::*;

use super::color::{clamp_channel, Color};
use super::view::{PixelView, PixelViewMut};
use crate::error::{RasterError, Result};

#[inline]
fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(RasterError::InvalidDimensions { width, height });
    }
    Ok(())
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// Owned RGB pixel grid, row-major with the origin at the top-left.
///
/// `data.len() == width * height` holds for the lifetime of the buffer and
/// both extents are always non-zero. Operators never mutate a buffer they
/// read from; they allocate a fresh destination instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<Color>,
}

impl PixelBuffer {
    /// Create a buffer filled with a single background color
    pub fn blank(width: u32, height: u32, color: Color) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![color; width as usize * height as usize],
        })
    }

    /// Create a buffer from packed RGB bytes (3 bytes per pixel, row-major)
    pub fn from_raw(width: u32, height: u32, rgb: &[u8]) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize * 3;
        if rgb.len() != expected {
            return Err(RasterError::InvalidParameter(format!(
                "expected {} RGB bytes for {}x{}, got {}",
                expected,
                width,
                height,
                rgb.len()
            )));
        }
        let data = rgb
            .chunks_exact(3)
            .map(|px| Color::new(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    ///
    /// Rows are filled in parallel; each row is written by one worker only.
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Result<Self>
    where
        F: Fn(u32, u32) -> Color + Sync,
    {
        check_dimensions(width, height)?;
        Ok(Self::build(width, height, f))
    }

    /// `from_fn` for extents already known to be non-zero
    pub(crate) fn build<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> Color + Sync,
    {
        debug_assert!(width > 0 && height > 0);
        let mut data = vec![Color::BLACK; width as usize * height as usize];
        data.par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, px) in row.iter_mut().enumerate() {
                    *px = f(x as u32, y as u32);
                }
            });
        Self {
            width,
            height,
            data,
        }
    }

    /// Same-size buffer with `f` applied to every pixel
    pub(crate) fn map_pixels<F>(&self, f: F) -> Self
    where
        F: Fn(Color) -> Color + Sync,
    {
        let mut data = self.data.clone();
        data.par_chunks_mut(self.width as usize).for_each(|row| {
            for px in row {
                *px = f(*px);
            }
        });
        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    fn checked_index(&self, x: u32, y: u32) -> Result<usize> {
        if self.in_bounds(x, y) {
            Ok(self.index(x, y))
        } else {
            Err(RasterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    // ========================================================================
    // Pixel access
    // ========================================================================

    /// Read a pixel (bounds checked)
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Result<Color> {
        let idx = self.checked_index(x, y)?;
        Ok(self.data[idx])
    }

    /// Write a pixel (bounds checked)
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        let idx = self.checked_index(x, y)?;
        self.data[idx] = color;
        Ok(())
    }

    /// Write a pixel from wide channel values, clamping each into 0..=255
    #[inline]
    pub fn set_rgb(&mut self, x: u32, y: u32, r: i32, g: i32, b: i32) -> Result<()> {
        self.set(x, y, Color::new(clamp_channel(r), clamp_channel(g), clamp_channel(b)))
    }

    /// Bounds-checked read accessor for one coordinate
    pub fn view(&self, x: u32, y: u32) -> Result<PixelView<'_>> {
        let idx = self.checked_index(x, y)?;
        Ok(PixelView::new(&self.data[idx], x, y))
    }

    /// Bounds-checked read/write accessor for one coordinate
    pub fn view_mut(&mut self, x: u32, y: u32) -> Result<PixelViewMut<'_>> {
        let idx = self.checked_index(x, y)?;
        Ok(PixelViewMut::new(&mut self.data[idx], x, y))
    }

    /// Pixel at a coordinate the caller has already validated
    #[inline]
    pub(crate) fn at(&self, x: u32, y: u32) -> Color {
        self.data[self.index(x, y)]
    }

    /// Row `y` as a slice (bounds checked)
    pub fn row(&self, y: u32) -> Result<&[Color]> {
        let start = self.checked_index(0, y)?;
        Ok(&self.data[start..start + self.width as usize])
    }

    /// Row at a `y` the caller has already validated
    #[inline]
    pub(crate) fn row_at(&self, y: u32) -> &[Color] {
        let start = self.index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Color> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Iterate `(x, y, color)` in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        let w = self.width as usize;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &c)| ((i % w) as u32, (i / w) as u32, c))
    }

    #[inline]
    pub fn as_slice(&self) -> &[Color] {
        &self.data
    }

    // ========================================================================
    // Whole-buffer operations
    // ========================================================================

    /// Full independent duplicate
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Nearest-neighbor resize to the requested dimensions
    pub fn resample_to(&self, target_width: u32, target_height: u32) -> Result<Self> {
        check_dimensions(target_width, target_height)?;
        Ok(self.resampled(target_width, target_height))
    }

    pub(crate) fn resampled(&self, target_width: u32, target_height: u32) -> Self {
        if self.dimensions() == (target_width, target_height) {
            return self.clone();
        }
        let (sw, sh) = (self.width as u64, self.height as u64);
        let (tw, th) = (target_width as u64, target_height as u64);
        Self::build(target_width, target_height, |x, y| {
            let sx = (x as u64 * sw / tw) as u32;
            let sy = (y as u64 * sh / th) as u32;
            self.at(sx, sy)
        })
    }

    /// Copy `src` verbatim into this buffer with its top-left corner at (x0, y0).
    /// The whole source must fit; nothing is written otherwise.
    pub fn paste(&mut self, src: &PixelBuffer, x0: u32, y0: u32) -> Result<()> {
        let fits_x = x0.checked_add(src.width).is_some_and(|end| end <= self.width);
        let fits_y = y0.checked_add(src.height).is_some_and(|end| end <= self.height);
        if !fits_x || !fits_y {
            return Err(RasterError::OutOfBounds {
                x: x0.saturating_add(src.width).saturating_sub(1),
                y: y0.saturating_add(src.height).saturating_sub(1),
                width: self.width,
                height: self.height,
            });
        }
        for (sy, src_row) in src.rows().enumerate() {
            let start = self.index(x0, y0 + sy as u32);
            self.data[start..start + src_row.len()].copy_from_slice(src_row);
        }
        Ok(())
    }

    // ========================================================================
    // Byte views
    // ========================================================================

    /// Packed RGB bytes, 3 per pixel
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 3);
        for c in &self.data {
            out.extend_from_slice(&[c.r, c.g, c.b]);
        }
        out
    }

    /// ABGR bytes (RGBA8888 little-endian byte order), alpha fixed at 255
    pub fn to_rgba8888(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 4);
        for c in &self.data {
            out.extend_from_slice(&[255, c.b, c.g, c.r]);
        }
        out
    }
}
