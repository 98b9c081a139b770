//! Raster Shade command-line front end
//!
//! Loads a mesh (or the built-in demo), renders it with flat or Gouraud
//! shading and writes the canvas as an image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use raster_shade::config::check_config;
use raster_shade::{demo_mesh, load_config, load_mesh, save_image, RenderConfig, Renderer, ShadeMode};

#[derive(Parser)]
#[command(version, about = "Render a 2D triangle mesh with flat or Gouraud shading")]
struct Args {
    /// Mesh file (RON). Renders the built-in demo mesh when omitted
    #[arg(long)]
    mesh: Option<PathBuf>,

    /// Render config file (RON): width, height, background
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shading mode: "flat" or "gouraud"
    #[arg(long, default_value = "flat")]
    shade: String,

    /// Override the canvas width
    #[arg(long)]
    width: Option<usize>,

    /// Override the canvas height
    #[arg(long)]
    height: Option<usize>,

    /// Output image; format follows the extension. Defaults to img-<shade>.png
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Fail on a bad mode name before touching any files
    let mode: ShadeMode = args.shade.parse()?;

    let mut config = match &args.config {
        Some(path) => load_config(path).with_context(|| format!("loading config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    check_config(&config)?;

    let mesh = match &args.mesh {
        Some(path) => load_mesh(path).with_context(|| format!("loading mesh {}", path.display()))?,
        None => {
            log::info!("no mesh given, rendering the demo mesh");
            demo_mesh(config.width, config.height)
        }
    };

    let renderer = Renderer::new(config);
    let canvas = mesh.render(&renderer, mode)?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("img-{}.png", mode)));
    save_image(&canvas, &output).with_context(|| format!("writing {}", output.display()))?;

    log::info!(
        "rendered {} faces ({} shading) to {}",
        mesh.face_count(),
        mode,
        output.display()
    );
    Ok(())
}
