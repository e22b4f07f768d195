use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use girder_elements::{MaterialKind, build_beam_element};
use girder_geometry::{Dimensions, Point3, build_profile};
use girder_io::{DEFAULT_TESSELLATION_TOLERANCE, export_obj, export_step};
use girder_scene::{ObjRenderer, SceneConfig, SummaryRenderer};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "girder")]
#[command(about = "Structural member geometry and scene rendering")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the cross-section outline as JSON.
    Profile(SectionArgs),
    Generate {
        #[command(subcommand)]
        command: GenerateCommand,
    },
    /// Render a JSON scene description into an OBJ file.
    Render(RenderArgs),
}

#[derive(Subcommand)]
enum GenerateCommand {
    Beam(BeamArgs),
}

#[derive(Args)]
struct SectionArgs {
    #[arg(long)]
    width: f64,
    #[arg(long)]
    height: f64,
    #[arg(long)]
    length: f64,
    /// Flange thickness; requires --web.
    #[arg(long)]
    flange: Option<f64>,
    /// Web thickness; requires --flange.
    #[arg(long)]
    web: Option<f64>,
}

impl SectionArgs {
    fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
            length: self.length,
            flange_thickness: self.flange,
            web_thickness: self.web,
        }
    }
}

#[derive(Args)]
struct BeamArgs {
    #[command(flatten)]
    section: SectionArgs,
    #[arg(long, default_value = "0,0,0")]
    start: String,
    /// Defaults to `length` along +X from the start point.
    #[arg(long)]
    end: Option<String>,
    #[arg(long)]
    material: Option<String>,
    #[arg(long)]
    name: Option<String>,
    /// Output file; the extension selects STEP (.step, .stp) or OBJ (.obj).
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args)]
struct RenderArgs {
    #[arg(long)]
    scene: PathBuf,
    #[arg(long)]
    out: PathBuf,
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Profile(args) => print_profile(&args),
        Command::Generate {
            command: GenerateCommand::Beam(args),
        } => generate_beam(args),
        Command::Render(args) => render_scene(args),
    }
}

fn print_profile(args: &SectionArgs) -> Result<()> {
    let dims = args.dimensions();
    let output = match build_profile(&dims).context("invalid section")? {
        Some(profile) => json!({
            "kind": "i-beam",
            "area": profile.area(),
            "points": profile
                .points()
                .iter()
                .map(|p| [p.x, p.y])
                .collect::<Vec<_>>(),
        }),
        None => json!({
            "kind": "rectangular",
            "width": dims.width,
            "height": dims.height,
            "depth": dims.length,
        }),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn generate_beam(args: BeamArgs) -> Result<()> {
    let dims = args.section.dimensions();
    let start = parse_point(&args.start).context("invalid --start")?;
    let end = match args.end.as_deref() {
        Some(text) => parse_point(text).context("invalid --end")?,
        None => Point3::new(start.x + dims.length, start.y, start.z),
    };
    let material = match args.material.as_deref() {
        Some(text) => text.parse::<MaterialKind>()?,
        None => MaterialKind::default(),
    };

    let element = build_beam_element(start, end, &dims, material, args.name.as_deref())
        .context("failed to build beam")?;

    match OutputFormat::from_path(&args.out)? {
        OutputFormat::Step => {
            export_step(element.geometry(), &element.name, &args.out)
                .context("STEP export failed")?;
            info!(path = %args.out.display(), "STEP export complete");
        }
        OutputFormat::Obj => {
            export_obj(
                element.geometry(),
                &args.out,
                DEFAULT_TESSELLATION_TOLERANCE,
            )
            .context("OBJ export failed")?;
            info!(path = %args.out.display(), "OBJ export complete");
        }
    }
    Ok(())
}

fn render_scene(args: RenderArgs) -> Result<()> {
    let config = SceneConfig::load(&args.scene)
        .with_context(|| format!("failed to read scene {}", args.scene.display()))?;
    let scene = config.build_scene().context("failed to build scene")?;
    info!(
        elements = scene.elements().len(),
        loads = scene.loads().count(),
        "scene built"
    );

    scene.render(&mut ObjRenderer::new(&args.out))?;
    if let Some(path) = args.summary {
        scene.render(&mut SummaryRenderer::new(path))?;
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Step,
    Obj,
}

impl OutputFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("step" | "stp") => Ok(Self::Step),
            Some("obj") => Ok(Self::Obj),
            _ => bail!(
                "unsupported output {}; use .step, .stp or .obj",
                path.display()
            ),
        }
    }
}

fn parse_point(text: &str) -> Result<Point3> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 3 {
        bail!("expected three comma-separated numbers, e.g. 0,0,0");
    }

    let x: f64 = parts[0].trim().parse().context("invalid x")?;
    let y: f64 = parts[1].trim().parse().context("invalid y")?;
    let z: f64 = parts[2].trim().parse().context("invalid z")?;
    Ok(Point3::new(x, y, z))
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points() {
        let point = parse_point(" 1, -2.5 ,3").unwrap();
        assert_eq!(point, Point3::new(1.0, -2.5, 3.0));
        assert!(parse_point("1,2").is_err());
        assert!(parse_point("1,a,3").is_err());
    }

    #[test]
    fn output_format_follows_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out/beam.STEP")).unwrap(),
            OutputFormat::Step
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("beam.obj")).unwrap(),
            OutputFormat::Obj
        );
        assert!(OutputFormat::from_path(Path::new("beam.stl")).is_err());
        assert!(OutputFormat::from_path(Path::new("beam")).is_err());
    }

    #[test]
    fn cli_accepts_beam_arguments() {
        let cli = Cli::try_parse_from([
            "girder", "generate", "beam", "--width", "0.2", "--height", "0.4", "--length", "3",
            "--flange", "0.02", "--web", "0.01", "--out", "beam.step",
        ])
        .unwrap();
        match cli.command {
            Command::Generate {
                command: GenerateCommand::Beam(args),
            } => {
                assert_eq!(
                    args.section.dimensions(),
                    Dimensions::i_beam(0.2, 0.4, 3.0, 0.02, 0.01)
                );
                assert_eq!(args.start, "0,0,0");
            }
            _ => panic!("expected generate beam"),
        }
    }
}
