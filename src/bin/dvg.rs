use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dvg::export::JsonLinesHost;
use dvg::layout::layout_arcs;
use dvg::render::bar::bar_layout;
use dvg::style::PaletteColor;
use dvg::{ChartKind, Session, storage, svg};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "dvg",
    version,
    about = "Render JSON data documents as SVG charts"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a document (or the built-in sample) and save or emit it.
    Render(RenderArgs),
    /// List the supported chart kinds.
    Kinds,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Bar,
    Pie,
    Network,
    Tree,
    Wordcloud,
    Donut,
    Legend,
    Pattern,
    Text,
}

impl From<KindArg> for ChartKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Bar => ChartKind::Bar,
            KindArg::Pie => ChartKind::Pie,
            KindArg::Network => ChartKind::Network,
            KindArg::Tree => ChartKind::Tree,
            KindArg::Wordcloud => ChartKind::Wordcloud,
            KindArg::Donut => ChartKind::Donut,
            KindArg::Legend => ChartKind::Legend,
            KindArg::Pattern => ChartKind::Pattern,
            KindArg::Text => ChartKind::Text,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ColorArg {
    Blue,
    Black,
    White,
}

impl From<ColorArg> for PaletteColor {
    fn from(c: ColorArg) -> Self {
        match c {
            ColorArg::Blue => PaletteColor::Blue,
            ColorArg::Black => PaletteColor::Black,
            ColorArg::White => PaletteColor::White,
        }
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// JSON document with "type" and "data" fields. Uses the built-in sample if omitted.
    input: Option<PathBuf>,
    /// Chart kind; overrides the document's "type".
    #[arg(short, long, value_enum)]
    kind: Option<KindArg>,
    /// Width in pixels (leading integer; invalid or non-positive falls back to 300).
    #[arg(long, default_value = "300")]
    width: String,
    /// Height in pixels (leading integer; invalid or non-positive falls back to 300).
    #[arg(long, default_value = "300")]
    height: String,
    /// Fill colour.
    #[arg(long, value_enum, default_value_t = ColorArg::Blue)]
    color: ColorArg,
    /// Write the SVG document to this path.
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Dump bar or slice geometry (.csv or .json). Bar, pie and donut only.
    #[arg(long)]
    geometry: Option<PathBuf>,
    /// Print the host `create-chart` message as one JSON line on stdout.
    #[arg(long, default_value_t = false)]
    emit_message: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Kinds => {
            for kind in ChartKind::ALL {
                println!("{:<10} {}", kind.as_str(), kind.display_name());
            }
            Ok(())
        }
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let mut session = Session::new();
    if let Some(path) = args.input.as_ref() {
        session
            .load_file(path)
            .with_context(|| format!("loading {}", path.display()))?;
    }
    if let Some(kind) = args.kind {
        session.set_kind(kind.into());
    }
    session.set_width_input(&args.width);
    session.set_height_input(&args.height);
    session.set_color(args.color.into());

    let config = session.config();
    log::info!(
        "{} chart, {} records, {}x{}",
        config.kind,
        config.records.len(),
        config.dimensions.width,
        config.dimensions.height
    );

    if let Some(path) = args.out.as_ref() {
        let doc = svg::to_svg_string(&session.render())?;
        storage::save_svg(&doc, path).with_context(|| format!("writing {}", path.display()))?;
        eprintln!("Wrote {} chart to {}", config.kind, path.display());
    }

    if let Some(path) = args.geometry.as_ref() {
        save_geometry(&session, path)?;
        eprintln!("Saved geometry to {}", path.display());
    }

    if args.emit_message {
        session.export(&JsonLinesHost::new(std::io::stdout()))?;
    }
    Ok(())
}

fn save_geometry(session: &Session, path: &Path) -> Result<()> {
    let config = session.config();
    let fmt = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("csv")
        .to_ascii_lowercase();
    let json = match fmt.as_str() {
        "csv" => false,
        "json" => true,
        other => anyhow::bail!("unsupported geometry format: {}", other),
    };
    match config.kind {
        ChartKind::Bar => {
            let layout = bar_layout(&config.records, &config.dimensions);
            let rows = storage::bar_rows(&config.records, &layout.bars);
            if json {
                storage::save_geometry_json(&rows, path)?
            } else {
                storage::save_geometry_csv(&rows, path)?
            }
        }
        ChartKind::Pie | ChartKind::Donut => {
            let arcs = layout_arcs(&config.records);
            let rows = storage::arc_rows(&config.records, &arcs);
            if json {
                storage::save_geometry_json(&rows, path)?
            } else {
                storage::save_geometry_csv(&rows, path)?
            }
        }
        other => anyhow::bail!("geometry export is not available for {} charts", other),
    }
    Ok(())
}
