//! Vantage Studio: renders `.vsml` scene files to SVG and PNG.

use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use vantage_engine::composite::{DepthOrder, ShapeKind};
use vantage_engine::coords::{Rect, Viewport};
use vantage_engine::logging::{init_logging, LoggingConfig};
use vantage_scene::raster::{rasterize, save_png};
use vantage_scene::svg::write_svg;
use vantage_scene::{load_scene, rings_scene, SceneSpec};

#[derive(Parser)]
#[command(name = "vantage-studio", version, about = "Render point scenes to SVG/PNG", long_about = None)]
struct Cli {
    /// Log filter in env_logger syntax; overrides RUST_LOG
    #[arg(long, global = true)]
    log_filter: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a .vsml scene file
    Render {
        /// Scene file
        scene: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
        /// Override the scene's primitive shape
        #[arg(long, value_enum)]
        shape: Option<ShapeArg>,
        /// Override the scene's depth order
        #[arg(long, value_enum)]
        order: Option<OrderArg>,
    },

    /// Render the built-in three-ring logo
    Demo {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args)]
struct OutputArgs {
    /// SVG output file; SVG goes to stdout when neither -o nor --png is given
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// PNG output file
    #[arg(long)]
    png: Option<PathBuf>,
    /// Output width in pixels
    #[arg(long, default_value = "512")]
    width: u32,
    /// Output height in pixels
    #[arg(long, default_value = "512")]
    height: u32,
}

#[derive(Copy, Clone, ValueEnum)]
enum ShapeArg {
    Circle,
    Square,
}

impl From<ShapeArg> for ShapeKind {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Circle => ShapeKind::Circle,
            ShapeArg::Square => ShapeKind::Square,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum OrderArg {
    Ascending,
    Descending,
}

impl From<OrderArg> for DepthOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Ascending => DepthOrder::Ascending,
            OrderArg::Descending => DepthOrder::Descending,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = cli.log_filter {
        logging = logging.with_filter(filter);
    }
    init_logging(logging);

    match cli.command {
        Command::Render { scene, output, shape, order } => {
            let mut loaded = read_scene(&scene)?;
            if let Some(shape) = shape {
                loaded.shape = shape.into();
            }
            if let Some(order) = order {
                loaded.order = order.into();
            }
            render(&loaded, &output)
        }
        Command::Demo { output } => {
            let demo = rings_scene().context("built-in demo scene is invalid")?;
            render(&demo, &output)
        }
    }
}

fn read_scene(path: &Path) -> Result<SceneSpec> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    load_scene(&src).with_context(|| format!("failed to load scene {}", path.display()))
}

fn render(scene: &SceneSpec, output: &OutputArgs) -> Result<()> {
    let viewport = viewport_for(output.width, output.height);
    if !viewport.is_valid() {
        bail!("output size must be non-zero, got {}x{}", output.width, output.height);
    }

    let started = Instant::now();
    let mut draw_list = scene.draw_list(&viewport);
    log::info!(
        "composited {} of {} points in {:.2?}",
        draw_list.len().saturating_sub(1),
        scene.point_count(),
        started.elapsed()
    );

    let svg = write_svg(&mut draw_list, &viewport);

    if let Some(path) = &output.output {
        std::fs::write(path, &svg).with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    if let Some(path) = &output.png {
        let started = Instant::now();
        let image = rasterize(&svg, output.width, output.height).context("rasterization failed")?;
        save_png(&image, path).with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {} in {:.2?}", path.display(), started.elapsed());
    }

    if output.output.is_none() && output.png.is_none() {
        std::io::stdout().lock().write_all(svg.as_bytes()).context("failed to write svg to stdout")?;
    }
    Ok(())
}

/// Unit-height view widened or narrowed to the output aspect so primitives stay round.
fn viewport_for(width: u32, height: u32) -> Viewport {
    let aspect = f64::from(width) / f64::from(height);
    Viewport::new(Rect::new(-aspect, -1.0, 2.0 * aspect, 2.0), true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_flags_parse() {
        let cli = Cli::try_parse_from([
            "vantage-studio", "render", "rings.vsml", "-o", "out.svg", "--png", "out.png",
            "--width", "800", "--height", "400", "--shape", "square", "--log-filter", "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));
        let Command::Render { scene, output, shape, order } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(scene, PathBuf::from("rings.vsml"));
        assert_eq!(output.output, Some(PathBuf::from("out.svg")));
        assert_eq!((output.width, output.height), (800, 400));
        assert!(matches!(shape, Some(ShapeArg::Square)));
        assert!(order.is_none());
    }

    #[test]
    fn viewport_keeps_unit_height() {
        let viewport = viewport_for(800, 400);
        assert_eq!(viewport.view, Rect::new(-2.0, -1.0, 4.0, 2.0));
        assert!(viewport.flip_y);
        assert_eq!(viewport_for(10, 10).view, Viewport::unit().view);
    }

    #[test]
    fn zero_sized_output_has_no_valid_viewport() {
        assert!(viewport_for(512, 512).is_valid());
        assert!(!viewport_for(0, 512).is_valid());
        assert!(!viewport_for(512, 0).is_valid());
    }
}
