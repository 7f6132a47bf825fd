use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tfedit::{Checkers, Editor, Function, PiecewiseLinear, Point, Rgba, Tent};

#[derive(Parser, Debug)]
#[command(name = "tfedit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite a transfer-function scene into a PNG.
    Render(RenderArgs),
    /// Print evenly spaced envelope samples as JSON.
    Samples(SamplesArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON; omit for the built-in demo scene.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Raster width in pixels.
    #[arg(long, default_value_t = 256)]
    width: u32,

    /// Raster height in pixels.
    #[arg(long, default_value_t = 128)]
    height: u32,
}

#[derive(Parser, Debug)]
struct SamplesArgs {
    /// Input scene JSON; omit for the built-in demo scene.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Number of evenly spaced samples over [0, 1].
    #[arg(long, default_value_t = 32)]
    count: u32,
}

/// Scene description consumed by the CLI. An adapter-side format: the core
/// editor itself has no persistence.
#[derive(serde::Serialize, serde::Deserialize)]
struct Scene {
    #[serde(default)]
    background: Option<Checkers>,
    #[serde(default)]
    functions: Vec<Function>,
    #[serde(default = "default_outline")]
    outline: bool,
}

fn default_outline() -> bool {
    true
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Samples(args) => cmd_samples(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = load_scene(args.in_path.as_deref())?;
    let editor = build_editor(scene);
    let raster = editor.rasterize(args.width, args.height)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &raster.to_rgba8(),
        raster.width(),
        raster.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_samples(args: SamplesArgs) -> anyhow::Result<()> {
    let scene = load_scene(args.in_path.as_deref())?;
    let editor = build_editor(scene);
    let samples = editor.sample_alpha(args.count);
    println!("{}", serde_json::to_string(&samples)?);
    Ok(())
}

fn load_scene(path: Option<&Path>) -> anyhow::Result<Scene> {
    let Some(path) = path else {
        return demo_scene();
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read scene '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse scene '{}'", path.display()))
}

/// Checkerboard background with a dip-and-recover curve and a tent on top.
fn demo_scene() -> anyhow::Result<Scene> {
    let background = Checkers::new(
        16,
        Rgba::opaque(0.0, 0.0, 0.0),
        Rgba::opaque(1.0, 1.0, 1.0),
    )?;

    let ramp = PiecewiseLinear::new(vec![
        Point::new(0.0, 1.0),
        Point::new(0.3, 0.8),
        Point::new(1.0, 1.0),
    ]);

    Ok(Scene {
        background: Some(background),
        functions: vec![ramp.into(), Tent::default().into()],
        outline: true,
    })
}

fn build_editor(scene: Scene) -> Editor {
    let mut editor = Editor::new();
    if let Some(checkers) = scene.background {
        editor.set_background(Box::new(checkers));
    }
    for function in scene.functions {
        editor.add_function(function);
    }
    editor.set_show_outline(scene.outline);
    editor
}
