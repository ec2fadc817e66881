// File: crates/raster-demo/src/main.rs
// Summary: CLI that rasterizes a segment (or a CSV of segments) and prints the result tables.

mod batch;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use raster_core::{Mode, SegmentFields, Session};
use raster_render::{theme, LineChart, RenderOptions};

#[derive(Parser)]
#[command(name = "rasterize", version, about = "Rasterize a line segment with the basic or DDA algorithm")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rasterize a single segment given on the command line.
    Line(LineArgs),
    /// Rasterize every row of a CSV file with headers x1,y1,x2,y2[,mode].
    Batch(BatchArgs),
}

#[derive(Args)]
struct LineArgs {
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    x1: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    y1: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    x2: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    y2: String,
    /// basic | dda
    #[arg(long, default_value_t = Mode::Basic)]
    mode: Mode,
    /// Also draw the chart to this PNG file.
    #[arg(long)]
    png: Option<PathBuf>,
    /// Chart theme: dark, light, high-contrast-dark.
    #[arg(long, default_value = "dark")]
    theme: String,
}

#[derive(Args)]
struct BatchArgs {
    file: PathBuf,
    /// Mode for rows without a `mode` column value.
    #[arg(long, default_value_t = Mode::Basic)]
    mode: Mode,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Line(args) => run_line(args),
        Command::Batch(args) => batch::run(&args.file, args.mode),
    }
}

fn run_line(args: LineArgs) -> Result<()> {
    let fields = SegmentFields::new(args.x1, args.y1, args.x2, args.y2);
    let mut session = Session::new(LineChart::new()).with_fields(fields).with_mode(args.mode);
    let points = session.calculate().context("calculation failed")?;
    log::info!("{} mode produced {} points", args.mode, points.len());

    let chart = session.presenter();
    print!("{}", chart.table());

    if let Some(path) = args.png {
        let opts = RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() };
        write_png(chart, &opts, &path)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(feature = "png")]
fn write_png(chart: &LineChart, opts: &RenderOptions, path: &std::path::Path) -> Result<()> {
    chart.render_to_png(opts, path)
}

#[cfg(not(feature = "png"))]
fn write_png(_chart: &LineChart, _opts: &RenderOptions, path: &std::path::Path) -> Result<()> {
    anyhow::bail!("cannot write {}: rebuild with --features png", path.display())
}
