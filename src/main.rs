use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use polydraw::Config;
use polydraw::draw::{CairoTarget, paint_background};
use polydraw::input::ToolRegistry;
use polydraw::replay::{Workbench, parse_script};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "polydraw")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("POLYDRAW_GIT_HASH"), ")"),
    about = "Replay pointer scripts through interactive polyline and triangle tools"
)]
struct Cli {
    /// Tool to activate (defaults to canvas.default_tool from the config)
    #[arg(long, short = 't', value_name = "NAME")]
    tool: Option<String>,

    /// Pointer script to replay (one `down|move|drag|up X Y` per line)
    #[arg(
        long,
        short = 's',
        value_name = "PATH",
        required_unless_present_any = ["list_tools", "init_config"]
    )]
    script: Option<PathBuf>,

    /// Render the final shape to this PNG file
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/polydraw/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Canvas width override in pixels
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Canvas height override in pixels
    #[arg(long, value_name = "PX")]
    height: Option<u32>,

    /// Print the registered tool names and exit
    #[arg(long, action = ArgAction::SetTrue)]
    list_tools: bool,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let registry = ToolRegistry::with_builtin_tools();

    if cli.list_tools {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let tool_name = cli
        .tool
        .clone()
        .unwrap_or_else(|| config.canvas.default_tool.clone());
    let tool = registry.create(&tool_name, &config.tool_style())?;

    let script_path = cli.script.as_deref().context("--script is required")?;
    let script = fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let events = parse_script(&script)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    log::info!(
        "Replaying {} pointer events with the '{}' tool",
        events.len(),
        tool_name
    );

    let mut bench = Workbench::new(tool);
    bench.run(events);

    let shape = bench.tool();
    println!("tool: {}", shape.name());
    println!("mode: {}", shape.mode());
    println!("vertices: {}", shape.vertices());

    if let Some(output) = cli.output.as_deref() {
        let width = cli.width.unwrap_or(config.canvas.width).clamp(16, 8192);
        let height = cli.height.unwrap_or(config.canvas.height).clamp(16, 8192);
        render_png(&bench, &config, width, height, output)?;
        log::info!("Rendered {}x{} canvas to {}", width, height, output.display());
        println!("wrote {}", output.display());
    }

    Ok(())
}

fn render_png(
    bench: &Workbench,
    config: &Config,
    width: u32,
    height: u32,
    path: &Path,
) -> Result<()> {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)
        .context("Failed to create image surface")?;

    {
        let ctx = cairo::Context::new(&surface).context("Failed to create Cairo context")?;
        paint_background(&ctx, config.background_color());
        let mut target = CairoTarget::new(&ctx);
        bench.render(&mut target);
    }

    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
    Ok(())
}
