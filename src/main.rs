use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use lumen::scene::SceneDescription;

/// Render a JSON scene description to an image file.
#[derive(Parser)]
#[command(name = "lumen", version)]
struct Cli {
    /// Scene description to render.
    scene: PathBuf,

    /// Output image; the extension picks the format (.png or .ppm).
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let (world, camera) = SceneDescription::load(&cli.scene)
        .with_context(|| format!("failed to load scene {}", cli.scene.display()))?;

    let canvas = camera.render(&world).context("render failed")?;

    match cli.output.extension().and_then(|e| e.to_str()) {
        Some("ppm") => fs::write(&cli.output, canvas.to_ppm())
            .with_context(|| format!("failed to write {}", cli.output.display()))?,
        _ => canvas
            .to_rgb_image()
            .save(&cli.output)
            .with_context(|| format!("failed to write {}", cli.output.display()))?,
    }

    info!("wrote {}", cli.output.display());
    Ok(())
}
