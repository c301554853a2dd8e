//! Pixel operators.
//!
//! Every operator reads an immutable source buffer and returns a freshly
//! allocated one, so chains of operators never alias intermediate results.
//! Destination rows are filled in parallel.

mod blur;
mod channel_filter;
mod flip;
mod grayscale;
mod greenscreen;
mod sepia;
mod shrink;

pub use blur::{blur, Blur};
pub use channel_filter::{channel_filter, ChannelFilter};
pub use flip::{flip, mirror, Flip, Mirror};
pub use grayscale::{grayscale, Grayscale};
pub use greenscreen::{greenscreen, Greenscreen};
pub use sepia::{sepia, Sepia};
pub use shrink::{shrink, Shrink};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};
use crate::raster::PixelBuffer;

/// Trait for all pixel operators
pub trait Transform: Send + Sync {
    /// Produce a new buffer from `src`; `src` is left untouched
    fn apply(&self, src: &PixelBuffer) -> Result<PixelBuffer>;

    /// Operator name, including its parameters where they matter (e.g. `filter-red`)
    fn name(&self) -> String;
}

/// Leaves the image as it is. The collage uses it for the unmodified stamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transform for Identity {
    fn apply(&self, src: &PixelBuffer) -> Result<PixelBuffer> {
        Ok(src.copy())
    }

    fn name(&self) -> String {
        "original".to_string()
    }
}

/// Axis for flip and mirror
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Mirror column indices (left/right)
    Horizontal,
    /// Mirror row indices (top/bottom)
    Vertical,
}

impl Axis {
    pub fn name(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

impl FromStr for Axis {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "h" | "0" => Ok(Axis::Horizontal),
            "vertical" | "v" | "1" => Ok(Axis::Vertical),
            other => Err(RasterError::InvalidParameter(format!(
                "unknown axis '{}' (expected horizontal or vertical)",
                other
            ))),
        }
    }
}

/// Integer direction codes: 0 = horizontal, 1 = vertical
impl TryFrom<u8> for Axis {
    type Error = RasterError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Axis::Horizontal),
            1 => Ok(Axis::Vertical),
            other => Err(RasterError::InvalidParameter(format!(
                "unknown axis code {} (expected 0 or 1)",
                other
            ))),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
