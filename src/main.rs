use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use pixcollage::codec::{read_file, write_file, ImageCodec, OutputFormat};
use pixcollage::config::CollageConfig;
use pixcollage::pipeline;
use pixcollage::util::Rng;
use pixcollage::viewer::Viewer;

/// Build a random collage of filtered variants of an image
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Image the variants are made from
    foreground: PathBuf,

    /// Image shown through the greenscreen variants
    background: PathBuf,

    /// Where to write the collage
    #[arg(short, long, default_value = "collage.png")]
    output: PathBuf,

    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cells per side of the collage grid
    #[arg(short, long)]
    grid: Option<u32>,

    /// Shrink factor applied to both inputs
    #[arg(short, long)]
    scale: Option<u32>,

    /// Seed for a reproducible layout
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for per-filter sample images
    #[arg(long)]
    samples: Option<PathBuf>,

    /// Show the collage in a window when done
    #[arg(long)]
    show: bool,

    /// Write the effective config as JSON to this path
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn effective_config(args: &Args) -> Result<CollageConfig> {
    let mut config = match &args.config {
        Some(path) => CollageConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CollageConfig::default(),
    };
    if let Some(grid) = args.grid {
        config.grid_size = grid;
    }
    if let Some(scale) = args.scale {
        config.shrink_scale = scale;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.samples.is_some() {
        config.sample_dir = args.samples.clone();
    }
    config.validate().context("invalid settings")?;
    Ok(config)
}

#[cfg(feature = "viewer")]
fn make_viewer() -> Box<dyn Viewer> {
    Box::new(pixcollage::viewer::SdlViewer::new("pixcollage"))
}

#[cfg(not(feature = "viewer"))]
fn make_viewer() -> Box<dyn Viewer> {
    Box::new(pixcollage::viewer::LogViewer::new())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let config = effective_config(&args)?;

    if let Some(path) = &args.write_config {
        config
            .save(path)
            .with_context(|| format!("writing config {}", path.display()))?;
        info!("wrote config to {}", path.display());
    }

    let decoder = ImageCodec::default();
    let foreground = read_file(&args.foreground, &decoder)
        .with_context(|| format!("loading {}", args.foreground.display()))?;
    let background = read_file(&args.background, &decoder)
        .with_context(|| format!("loading {}", args.background.display()))?;
    info!(
        "foreground {}x{}, background {}x{}",
        foreground.width(),
        foreground.height(),
        background.width(),
        background.height()
    );

    let mut rng = match config.seed {
        Some(seed) => Rng::new(seed),
        None => Rng::from_time(),
    };
    let output = pipeline::run(&foreground, &background, &config, &mut rng)
        .context("building collage")?;

    let format = config
        .output_format
        .unwrap_or_else(|| OutputFormat::for_path_or_png(&args.output));
    let encoder = ImageCodec::new(format);

    if let Some(dir) = &config.sample_dir {
        let written = pipeline::write_samples(&output.samples, dir, &encoder)
            .with_context(|| format!("writing samples to {}", dir.display()))?;
        info!("wrote {} samples to {}", written.len(), dir.display());
    }

    write_file(&args.output, &output.collage, &encoder)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!("wrote collage to {}", args.output.display());

    if args.show {
        make_viewer()
            .display(&output.collage)
            .map_err(anyhow::Error::msg)
            .context("displaying collage")?;
    }
    Ok(())
}
