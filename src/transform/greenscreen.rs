use super::Transform;
use crate::error::Result;
use crate::raster::{Channel, PixelBuffer};

/// Chroma-key `foreground` over `background`.
///
/// The background is first resampled (nearest neighbour) to the foreground's
/// size. Pixels whose `channel` is strictly below `intensity` take the
/// background pixel at the same coordinate; the rest keep the foreground.
/// Note the exclusive threshold, where [`channel_filter`](super::channel_filter())
/// is inclusive.
pub fn greenscreen(
    foreground: &PixelBuffer,
    channel: Channel,
    intensity: u8,
    background: &PixelBuffer,
) -> PixelBuffer {
    let (w, h) = foreground.dimensions();
    let backdrop = background.resampled(w, h);
    PixelBuffer::build(w, h, |x, y| {
        let fg = foreground.at(x, y);
        if fg.channel(channel) < intensity {
            backdrop.at(x, y)
        } else {
            fg
        }
    })
}

/// Greenscreen operator keyed over a borrowed background
#[derive(Debug, Clone, Copy)]
pub struct Greenscreen<'a> {
    pub channel: Channel,
    pub intensity: u8,
    background: &'a PixelBuffer,
}

impl<'a> Greenscreen<'a> {
    pub fn new(channel: Channel, intensity: u8, background: &'a PixelBuffer) -> Self {
        Self {
            channel,
            intensity,
            background,
        }
    }

    pub fn background(&self) -> &'a PixelBuffer {
        self.background
    }
}

impl Transform for Greenscreen<'_> {
    fn apply(&self, src: &PixelBuffer) -> Result<PixelBuffer> {
        Ok(greenscreen(src, self.channel, self.intensity, self.background))
    }

    fn name(&self) -> String {
        format!("greenscreen-{}", self.channel)
    }
}
