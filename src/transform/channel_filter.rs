use super::Transform;
use crate::error::Result;
use crate::raster::{Channel, PixelBuffer};

/// Turn pixels gray where `channel <= intensity`; other pixels are copied.
///
/// The threshold is inclusive, unlike [`greenscreen`](super::greenscreen()).
pub fn channel_filter(src: &PixelBuffer, channel: Channel, intensity: u8) -> PixelBuffer {
    src.map_pixels(|c| {
        if c.channel(channel) <= intensity {
            c.to_gray()
        } else {
            c
        }
    })
}

#[derive(Debug, Clone, Copy)]
pub struct ChannelFilter {
    pub channel: Channel,
    pub intensity: u8,
}

impl ChannelFilter {
    pub fn new(channel: Channel, intensity: u8) -> Self {
        Self { channel, intensity }
    }
}

impl Transform for ChannelFilter {
    fn apply(&self, src: &PixelBuffer) -> Result<PixelBuffer> {
        Ok(channel_filter(src, self.channel, self.intensity))
    }

    fn name(&self) -> String {
        format!("filter-{}", self.channel)
    }
}
