use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use lumen_core::{load_scene, SceneDescription};
use lumen_renderer::{
    render, render_parallel, Color, RenderConfig, Scene, ShadowTest, DEFAULT_BUCKET_SIZE,
};

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;

/// Render a JSON scene with the Lumen Phong ray tracer
#[derive(Parser, Debug)]
#[command(name = "lumen", version, about)]
struct Args {
    /// Scene description file (JSON)
    #[arg(value_name = "SCENE")]
    scene: PathBuf,

    /// Output image; the format follows the extension (png, ppm, ...)
    #[arg(short, long, value_name = "PATH", default_value = "output.png")]
    output: PathBuf,

    /// Image width in pixels (overrides the scene file)
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Image height in pixels (overrides the scene file)
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,

    /// Render on the calling thread only
    #[arg(long)]
    serial: bool,

    /// How shadow rays decide that a light is blocked
    #[arg(long, value_enum, default_value_t = ShadowMode::Bounded)]
    shadow_test: ShadowMode,

    /// Bucket edge length for parallel rendering
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,

    /// Background color as "r,g,b" (overrides the scene file)
    #[arg(long, value_name = "R,G,B", value_parser = parse_color)]
    background: Option<Color>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ShadowMode {
    /// Only geometry between the surface and the light casts shadows
    Bounded,
    /// Any geometry along the light-to-surface line casts shadows
    AnyHit,
}

impl From<ShadowMode> for ShadowTest {
    fn from(mode: ShadowMode) -> Self {
        match mode {
            ShadowMode::Bounded => ShadowTest::Bounded,
            ShadowMode::AnyHit => ShadowTest::AnyHit,
        }
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    let channels = s
        .split(',')
        .map(|c| c.trim().parse::<f32>().map_err(|e| format!("{c:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    match channels.as_slice() {
        [r, g, b] => Ok(Color::new(*r, *g, *b)),
        _ => Err(format!("expected 3 channels, got {}", channels.len())),
    }
}

/// Resolve output size and render settings: command line first, then the
/// scene file, then defaults.
fn resolve(args: &Args, description: &SceneDescription) -> Result<(u32, u32, RenderConfig)> {
    let width = args.width.or(description.width).unwrap_or(DEFAULT_WIDTH);
    let height = args.height.or(description.height).unwrap_or(DEFAULT_HEIGHT);
    if width == 0 || height == 0 {
        bail!("Image resolution must be positive, got {}x{}", width, height);
    }

    let config = RenderConfig {
        background: args
            .background
            .or(description.background)
            .unwrap_or(Color::ZERO),
        shadow_test: args.shadow_test.into(),
        bucket_size: args.bucket_size,
    };

    Ok((height, width, config))
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let start = Instant::now();
    let description = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;
    let scene = Scene::from_description(&description);
    log::info!("Loaded {} in {:?}", args.scene.display(), start.elapsed());

    let (height, width, config) = resolve(&args, &description)?;

    let rendered = if args.serial {
        render(&scene, height, width, &config)
    } else {
        render_parallel(&scene, height, width, &config)
    };
    let image = rendered.context("Failed to render scene")?;

    image
        .to_rgb_image()
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
