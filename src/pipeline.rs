//! The standard collage run: shrink both inputs, derive the variant stamps
//! from the foreground, then tile them at random.

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info};

use crate::codec::{write_file, Encoder};
use crate::collage::compose;
use crate::config::{CollageConfig, VariantSpec};
use crate::error::Result;
use crate::raster::PixelBuffer;
use crate::transform::shrink;
use crate::util::RandomSource;

/// An operator output tagged with the operator name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: String,
    pub buffer: PixelBuffer,
}

/// Result of [`run`]
#[derive(Debug, Clone)]
pub struct CollageOutput {
    pub collage: PixelBuffer,
    pub variants: Vec<Variant>,
    pub samples: Vec<Variant>,
}

/// Shrink foreground and background by the configured scale
pub fn prepare(
    foreground: &PixelBuffer,
    background: &PixelBuffer,
    config: &CollageConfig,
) -> Result<(PixelBuffer, PixelBuffer)> {
    let fg = shrink(foreground, config.shrink_scale)?;
    let bg = shrink(background, config.shrink_scale)?;
    debug!(
        "shrunk foreground {}x{} -> {}x{}, background {}x{} -> {}x{}",
        foreground.width(),
        foreground.height(),
        fg.width(),
        fg.height(),
        background.width(),
        background.height(),
        bg.width(),
        bg.height()
    );
    Ok((fg, bg))
}

/// Apply each spec to `foreground`; greenscreen specs key over `background`
pub fn build_variants(
    foreground: &PixelBuffer,
    background: &PixelBuffer,
    specs: &[VariantSpec],
) -> Result<Vec<Variant>> {
    specs
        .iter()
        .map(|spec| {
            let op = spec.build(background);
            let started = Instant::now();
            let buffer = op.apply(foreground)?;
            let name = op.name();
            debug!("{} took {:?}", name, started.elapsed());
            Ok(Variant { name, buffer })
        })
        .collect()
}

/// Encode every variant to `<dir>/<name>.<ext>` and return the written paths
pub fn write_samples(variants: &[Variant], dir: &Path, encoder: &dyn Encoder) -> Result<Vec<PathBuf>> {
    variants
        .iter()
        .map(|v| {
            let path = dir.join(format!("{}.{}", v.name, encoder.extension()));
            write_file(&path, &v.buffer, encoder)?;
            Ok(path)
        })
        .collect()
}

/// Full run: prepare, build collage variants and samples, compose the grid
pub fn run<R>(
    foreground: &PixelBuffer,
    background: &PixelBuffer,
    config: &CollageConfig,
    rng: &mut R,
) -> Result<CollageOutput>
where
    R: RandomSource + ?Sized,
{
    let (fg, bg) = prepare(foreground, background, config)?;
    let variants = build_variants(&fg, &bg, &config.variants)?;
    let samples = if config.sample_dir.is_some() {
        build_variants(&fg, &bg, &config.samples)?
    } else {
        Vec::new()
    };

    let stamps: Vec<PixelBuffer> = variants.iter().map(|v| v.buffer.clone()).collect();
    let collage = compose(&stamps, config.grid_size, rng)?;
    info!(
        "composed {}x{} collage from {} variants on a {}x{} grid",
        collage.width(),
        collage.height(),
        variants.len(),
        config.grid_size,
        config.grid_size
    );

    Ok(CollageOutput {
        collage,
        variants,
        samples,
    })
}
