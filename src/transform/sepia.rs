use super::Transform;
use crate::error::Result;
use crate::raster::{Color, PixelBuffer};

/// Rows are output channels (r', g', b'); columns weight the input (r, g, b)
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

#[inline]
fn sepia_pixel(c: Color) -> Color {
    let (r, g, b) = (c.r as f64, c.g as f64, c.b as f64);
    let out = SEPIA.map(|[wr, wg, wb]| (wr * r + wg * g + wb * b) as i32);
    Color::clamped(out[0], out[1], out[2])
}

/// Fixed 3x3 color transfer; each result is truncated then clamped
pub fn sepia(src: &PixelBuffer) -> PixelBuffer {
    src.map_pixels(sepia_pixel)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sepia;

impl Transform for Sepia {
    fn apply(&self, src: &PixelBuffer) -> Result<PixelBuffer> {
        Ok(sepia(src))
    }

    fn name(&self) -> String {
        "sepia".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sepia_black_stays_black() {
        assert_eq!(sepia_pixel(Color::BLACK), Color::BLACK);
    }

    #[test]
    fn test_sepia_white_saturates() {
        // 0.393 + 0.769 + 0.189 > 1, so red and green clip; blue sums to 0.937
        assert_eq!(sepia_pixel(Color::WHITE), Color::new(255, 255, 238));
    }

    #[test]
    fn test_sepia_mid_gray() {
        // 1.351 * 128, 1.203 * 128, 0.937 * 128, truncated
        assert_eq!(sepia_pixel(Color::new(128, 128, 128)), Color::new(172, 153, 119));
    }

    #[test]
    fn test_sepia_pure_channels() {
        assert_eq!(sepia_pixel(Color::new(100, 0, 0)), Color::new(39, 34, 27));
        assert_eq!(sepia_pixel(Color::new(0, 100, 0)), Color::new(76, 68, 53));
        assert_eq!(sepia_pixel(Color::new(0, 0, 100)), Color::new(18, 16, 13));
    }

    #[test]
    fn test_sepia_buffer() {
        let src = PixelBuffer::blank(4, 2, Color::new(0, 100, 0)).unwrap();
        let out = sepia(&src);
        assert_eq!(out.dimensions(), (4, 2));
        assert!(out.as_slice().iter().all(|&c| c == Color::new(76, 68, 53)));
    }
}
