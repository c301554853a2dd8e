use super::{Axis, Transform};
use crate::error::{RasterError, Result};
use crate::raster::PixelBuffer;

/// Mirror the image across the given axis; dimensions are unchanged
pub fn flip(src: &PixelBuffer, axis: Axis) -> PixelBuffer {
    let (w, h) = src.dimensions();
    match axis {
        Axis::Horizontal => PixelBuffer::build(w, h, |x, y| src.at(w - 1 - x, y)),
        Axis::Vertical => PixelBuffer::build(w, h, |x, y| src.at(x, h - 1 - y)),
    }
}

/// Double the image along `axis`: the original followed by its flipped copy
pub fn mirror(src: &PixelBuffer, axis: Axis) -> Result<PixelBuffer> {
    let (w, h) = src.dimensions();
    let too_big = || RasterError::InvalidDimensions {
        width: w.saturating_mul(2),
        height: h.saturating_mul(2),
    };
    match axis {
        Axis::Horizontal => {
            let out_w = w.checked_mul(2).ok_or_else(too_big)?;
            Ok(PixelBuffer::build(out_w, h, |x, y| {
                if x < w {
                    src.at(x, y)
                } else {
                    src.at(out_w - 1 - x, y)
                }
            }))
        },
        Axis::Vertical => {
            let out_h = h.checked_mul(2).ok_or_else(too_big)?;
            Ok(PixelBuffer::build(w, out_h, |x, y| {
                if y < h {
                    src.at(x, y)
                } else {
                    src.at(x, out_h - 1 - y)
                }
            }))
        },
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Flip {
    pub axis: Axis,
}

impl Flip {
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }
}

impl Transform for Flip {
    fn apply(&self, src: &PixelBuffer) -> Result<PixelBuffer> {
        Ok(flip(src, self.axis))
    }

    fn name(&self) -> String {
        format!("flip-{}", self.axis)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Mirror {
    pub axis: Axis,
}

impl Mirror {
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }
}

impl Transform for Mirror {
    fn apply(&self, src: &PixelBuffer) -> Result<PixelBuffer> {
        mirror(src, self.axis)
    }

    fn name(&self) -> String {
        format!("mirror-{}", self.axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Color;

    fn sample() -> PixelBuffer {
        PixelBuffer::from_fn(5, 3, |x, y| Color::new(x as u8 * 10, y as u8 * 10, (x + y) as u8))
            .unwrap()
    }

    #[test]
    fn test_flip_horizontal_moves_columns() {
        let src = sample();
        let out = flip(&src, Axis::Horizontal);
        assert_eq!(out.dimensions(), (5, 3));
        assert_eq!(out.get(0, 1).unwrap(), src.get(4, 1).unwrap());
        assert_eq!(out.get(2, 2).unwrap(), src.get(2, 2).unwrap());
    }

    #[test]
    fn test_flip_vertical_moves_rows() {
        let src = sample();
        let out = flip(&src, Axis::Vertical);
        assert_eq!(out.get(3, 0).unwrap(), src.get(3, 2).unwrap());
        assert_eq!(out.get(3, 1).unwrap(), src.get(3, 1).unwrap());
    }

    #[test]
    fn test_flip_is_involution() {
        let src = sample();
        for axis in [Axis::Horizontal, Axis::Vertical] {
            assert_eq!(flip(&flip(&src, axis), axis), src);
        }
    }

    #[test]
    fn test_mirror_horizontal_right_half_is_flip() {
        let src = sample();
        let out = mirror(&src, Axis::Horizontal).unwrap();
        assert_eq!(out.dimensions(), (10, 3));
        let flipped = flip(&src, Axis::Horizontal);
        for y in 0..3 {
            assert_eq!(&out.row(y).unwrap()[..5], src.row(y).unwrap());
            assert_eq!(&out.row(y).unwrap()[5..], flipped.row(y).unwrap());
        }
    }

    #[test]
    fn test_mirror_vertical_bottom_half_is_flip() {
        let src = sample();
        let out = mirror(&src, Axis::Vertical).unwrap();
        assert_eq!(out.dimensions(), (5, 6));
        let flipped = flip(&src, Axis::Vertical);
        for y in 0..3 {
            assert_eq!(out.row(y).unwrap(), src.row(y).unwrap());
            assert_eq!(out.row(y + 3).unwrap(), flipped.row(y).unwrap());
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Flip::new(Axis::Vertical).name(), "flip-vertical");
        assert_eq!(Mirror::new(Axis::Horizontal).name(), "mirror-horizontal");
    }
}
