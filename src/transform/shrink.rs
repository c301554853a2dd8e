use super::Transform;
use crate::error::{RasterError, Result};
use crate::raster::PixelBuffer;

/// Point-sample downscale: output (x, y) is source (x * scale, y * scale).
///
/// Output is `floor(width / scale) x floor(height / scale)`. A scale of 0 is
/// an `InvalidParameter`; a scale larger than either extent leaves nothing to
/// sample and is reported as `InvalidDimensions`.
pub fn shrink(src: &PixelBuffer, scale: u32) -> Result<PixelBuffer> {
    if scale == 0 {
        return Err(RasterError::InvalidParameter(
            "shrink scale must be at least 1".to_string(),
        ));
    }
    if scale == 1 {
        return Ok(src.copy());
    }
    let (w, h) = (src.width() / scale, src.height() / scale);
    PixelBuffer::from_fn(w, h, |x, y| src.at(x * scale, y * scale))
}

#[derive(Debug, Clone, Copy)]
pub struct Shrink {
    pub scale: u32,
}

impl Shrink {
    pub fn new(scale: u32) -> Self {
        Self { scale }
    }
}

impl Transform for Shrink {
    fn apply(&self, src: &PixelBuffer) -> Result<PixelBuffer> {
        shrink(src, self.scale)
    }

    fn name(&self) -> String {
        format!("shrink-{}", self.scale)
    }
}
