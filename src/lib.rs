//! RGB pixel buffers, a fixed library of pixel operators and a random
//! tiled-collage composer.
//!
//! - [`raster`]: [`PixelBuffer`], [`Color`] and single-pixel views
//! - [`transform`]: grayscale, sepia, blur, channel filter, flip, mirror,
//!   shrink and greenscreen, as free functions and as [`Transform`] values
//! - [`collage`]: [`compose`] a grid of randomly drawn stamps
//! - [`codec`] / [`viewer`]: the decode, encode and display boundaries
//! - [`config`] / [`pipeline`]: the standard twelve-variant collage run

pub mod codec;
pub mod collage;
pub mod config;
mod error;
pub mod pipeline;
pub mod raster;
pub mod transform;
pub mod util;
pub mod viewer;

pub use collage::compose;
pub use error::{RasterError, Result};
pub use raster::{Channel, Color, PixelBuffer};
pub use transform::{Axis, Transform};
pub use util::{RandomSource, Rng};
