//! Collage run configuration, stored as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::OutputFormat;
use crate::raster::{Channel, PixelBuffer};
use crate::transform::{
    Axis, Blur, ChannelFilter, Flip, Grayscale, Greenscreen, Identity, Mirror, Sepia, Shrink,
    Transform,
};

pub const DEFAULT_GRID_SIZE: u32 = 5;
pub const DEFAULT_SHRINK_SCALE: u32 = 5;
pub const DEFAULT_INTENSITY: u8 = 100;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// One collage stamp: which operator to run on the shrunk foreground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum VariantSpec {
    Original,
    Grayscale,
    Sepia,
    Blur,
    Filter { channel: Channel, intensity: u8 },
    Flip { axis: Axis },
    Mirror { axis: Axis },
    Shrink { scale: u32 },
    Greenscreen { channel: Channel, intensity: u8 },
}

impl VariantSpec {
    /// Instantiate the operator. Greenscreen variants borrow `background`.
    pub fn build<'a>(&self, background: &'a PixelBuffer) -> Box<dyn Transform + 'a> {
        match *self {
            VariantSpec::Original => Box::new(Identity),
            VariantSpec::Grayscale => Box::new(Grayscale),
            VariantSpec::Sepia => Box::new(Sepia),
            VariantSpec::Blur => Box::new(Blur),
            VariantSpec::Filter { channel, intensity } => {
                Box::new(ChannelFilter::new(channel, intensity))
            },
            VariantSpec::Flip { axis } => Box::new(Flip::new(axis)),
            VariantSpec::Mirror { axis } => Box::new(Mirror::new(axis)),
            VariantSpec::Shrink { scale } => Box::new(Shrink::new(scale)),
            VariantSpec::Greenscreen { channel, intensity } => {
                Box::new(Greenscreen::new(channel, intensity, background))
            },
        }
    }

    /// Whether the variant keeps the stamp size (collage stamps must all match)
    pub fn preserves_size(&self) -> bool {
        !matches!(self, VariantSpec::Mirror { .. } | VariantSpec::Shrink { .. })
    }
}

/// The twelve stamps of the standard collage
pub fn default_variants() -> Vec<VariantSpec> {
    let mut variants = vec![
        VariantSpec::Original,
        VariantSpec::Grayscale,
        VariantSpec::Sepia,
        VariantSpec::Blur,
    ];
    variants.extend(Channel::ALL.map(|channel| VariantSpec::Filter {
        channel,
        intensity: DEFAULT_INTENSITY,
    }));
    variants.push(VariantSpec::Flip {
        axis: Axis::Horizontal,
    });
    variants.push(VariantSpec::Flip {
        axis: Axis::Vertical,
    });
    variants.extend(Channel::ALL.map(|channel| VariantSpec::Greenscreen {
        channel,
        intensity: DEFAULT_INTENSITY,
    }));
    variants
}

/// Per-filter sample images written next to the collage
pub fn default_samples() -> Vec<VariantSpec> {
    vec![
        VariantSpec::Grayscale,
        VariantSpec::Sepia,
        VariantSpec::Blur,
        VariantSpec::Filter {
            channel: Channel::Red,
            intensity: DEFAULT_INTENSITY,
        },
        VariantSpec::Flip {
            axis: Axis::Horizontal,
        },
        VariantSpec::Greenscreen {
            channel: Channel::Red,
            intensity: DEFAULT_INTENSITY,
        },
    ]
}

/// Everything a collage run needs besides the two input images
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollageConfig {
    /// Cells per side of the square grid
    pub grid_size: u32,
    /// Both inputs are shrunk by this factor before any operator runs
    pub shrink_scale: u32,
    /// Fixed seed for reproducible layouts; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Forced output format; `None` picks from the output extension
    pub output_format: Option<OutputFormat>,
    /// Where per-filter samples go; `None` skips them
    pub sample_dir: Option<PathBuf>,
    pub variants: Vec<VariantSpec>,
    pub samples: Vec<VariantSpec>,
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            shrink_scale: DEFAULT_SHRINK_SCALE,
            seed: None,
            output_format: None,
            sample_dir: None,
            variants: default_variants(),
            samples: default_samples(),
        }
    }
}

impl CollageConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::Invalid("grid_size must be at least 1".into()));
        }
        if self.shrink_scale == 0 {
            return Err(ConfigError::Invalid(
                "shrink_scale must be at least 1".into(),
            ));
        }
        if self.variants.is_empty() {
            return Err(ConfigError::Invalid(
                "variants must name at least one operator".into(),
            ));
        }
        if let Some(bad) = self.variants.iter().find(|v| !v.preserves_size()) {
            return Err(ConfigError::Invalid(format!(
                "collage variant {:?} changes the stamp size",
                bad
            )));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
