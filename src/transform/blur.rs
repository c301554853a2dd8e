use super::Transform;
use crate::error::Result;
use crate::raster::{Color, PixelBuffer};

/// 3x3 box average with floor division by 9.
///
/// Pixels on the outermost rows and columns are copied unchanged; every
/// interior pixel averages itself and its 8 neighbours from the source.
pub fn blur(src: &PixelBuffer) -> PixelBuffer {
    let (w, h) = src.dimensions();
    PixelBuffer::build(w, h, |x, y| {
        if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
            return src.at(x, y);
        }
        let (mut sr, mut sg, mut sb) = (0u32, 0u32, 0u32);
        for ny in y - 1..=y + 1 {
            for c in &src.row_at(ny)[(x - 1) as usize..=(x + 1) as usize] {
                sr += c.r as u32;
                sg += c.g as u32;
                sb += c.b as u32;
            }
        }
        Color::new((sr / 9) as u8, (sg / 9) as u8, (sb / 9) as u8)
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Blur;

impl Transform for Blur {
    fn apply(&self, src: &PixelBuffer) -> Result<PixelBuffer> {
        Ok(blur(src))
    }

    fn name(&self) -> String {
        "blur".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_single_white_center() {
        let mut src = PixelBuffer::blank(3, 3, Color::BLACK).unwrap();
        src.set(1, 1, Color::WHITE).unwrap();
        let out = blur(&src);
        assert_eq!(out.get(1, 1).unwrap(), Color::new(28, 28, 28));
        for (x, y, c) in out.pixels() {
            if (x, y) != (1, 1) {
                assert_eq!(c, Color::BLACK, "border pixel ({}, {}) changed", x, y);
            }
        }
    }

    #[test]
    fn test_blur_keeps_borders() {
        let src = PixelBuffer::from_fn(7, 5, |x, y| {
            Color::new((x * 37 % 256) as u8, (y * 91 % 256) as u8, ((x * y) % 256) as u8)
        })
        .unwrap();
        let out = blur(&src);
        let (w, h) = src.dimensions();
        for x in 0..w {
            assert_eq!(out.get(x, 0).unwrap(), src.get(x, 0).unwrap());
            assert_eq!(out.get(x, h - 1).unwrap(), src.get(x, h - 1).unwrap());
        }
        for y in 0..h {
            assert_eq!(out.get(0, y).unwrap(), src.get(0, y).unwrap());
            assert_eq!(out.get(w - 1, y).unwrap(), src.get(w - 1, y).unwrap());
        }
    }

    #[test]
    fn test_blur_reads_source_not_output() {
        // Two adjacent bright pixels: a sequential in-place blur would feed the
        // first result into the second average
        let mut src = PixelBuffer::blank(4, 3, Color::BLACK).unwrap();
        src.set(1, 1, Color::new(90, 90, 90)).unwrap();
        src.set(2, 1, Color::new(90, 90, 90)).unwrap();
        let out = blur(&src);
        assert_eq!(out.get(1, 1).unwrap(), Color::new(20, 20, 20));
        assert_eq!(out.get(2, 1).unwrap(), Color::new(20, 20, 20));
    }

    #[test]
    fn test_blur_thin_images_unchanged() {
        let src = PixelBuffer::from_fn(9, 2, |x, _| Color::new(x as u8, 3, 4)).unwrap();
        assert_eq!(blur(&src), src);
        let src = PixelBuffer::from_fn(1, 6, |_, y| Color::new(y as u8, 3, 4)).unwrap();
        assert_eq!(blur(&src), src);
    }

    #[test]
    fn test_blur_uniform_is_fixed_point() {
        let src = PixelBuffer::blank(6, 6, Color::new(200, 100, 50)).unwrap();
        assert_eq!(blur(&src), src);
    }
}
