use super::Transform;
use crate::error::Result;
use crate::raster::PixelBuffer;

/// Replace every pixel with the floored mean of its channels
pub fn grayscale(src: &PixelBuffer) -> PixelBuffer {
    src.map_pixels(|c| c.to_gray())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Grayscale;

impl Transform for Grayscale {
    fn apply(&self, src: &PixelBuffer) -> Result<PixelBuffer> {
        Ok(grayscale(src))
    }

    fn name(&self) -> String {
        "grayscale".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Color;

    #[test]
    fn test_grayscale_mean() {
        let src = PixelBuffer::from_fn(2, 1, |x, _| {
            if x == 0 {
                Color::new(10, 20, 31)
            } else {
                Color::new(255, 0, 1)
            }
        })
        .unwrap();
        let out = grayscale(&src);
        assert_eq!(out.get(0, 0).unwrap(), Color::new(20, 20, 20));
        assert_eq!(out.get(1, 0).unwrap(), Color::new(85, 85, 85));
    }

    #[test]
    fn test_grayscale_preserves_gray() {
        let src = PixelBuffer::blank(3, 3, Color::new(128, 128, 128)).unwrap();
        let out = grayscale(&src);
        assert!(out.as_slice().iter().all(|&c| c == Color::new(128, 128, 128)));
    }

    #[test]
    fn test_grayscale_is_idempotent() {
        let src = PixelBuffer::from_fn(5, 4, |x, y| Color::new(x as u8 * 50, y as u8 * 60, 7))
            .unwrap();
        let once = grayscale(&src);
        assert_eq!(grayscale(&once), once);
    }
}
