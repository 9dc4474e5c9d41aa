use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use maskforge_core::consts::DEFAULT_VIEWPORT_MAX;
use maskforge_core::geometry::DisplayGeometry;
use maskforge_core::io::image_io::load_source;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Maximum drawing-surface width
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_MAX)]
    pub max_width: u32,

    /// Maximum drawing-surface height
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_MAX)]
    pub max_height: u32,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let source = load_source(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let (w, h) = source.dimensions();
    let geometry = DisplayGeometry::new(w, h, args.max_width, args.max_height)?;

    println!("File:        {}", args.file.display());
    println!("Source:      {}x{}", w, h);
    println!(
        "Display:     {}x{}",
        geometry.display_width, geometry.display_height
    );
    println!("Scale:       {:.4} x {:.4}", geometry.sx, geometry.sy);

    let mask_mb = (w as u64 * h as u64 * 4) as f64 / (1024.0 * 1024.0);
    println!("Mask size:   {:.1} MB (RGBA)", mask_mb);

    Ok(())
}
