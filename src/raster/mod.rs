//! In-memory RGB raster: the buffer every operator reads and writes.

mod color;
mod pixel_buffer;
mod view;

pub use color::{clamp_channel, Channel, Color};
pub use pixel_buffer::PixelBuffer;
pub use view::{PixelView, PixelViewMut};
