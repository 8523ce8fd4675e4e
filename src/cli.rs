use crate::config::load_config;
use crate::ir::{Dataset, Selection};
use crate::layout::compute_scatter_layout;
use crate::layout::filter::filter_quality;
use crate::layout_dump::write_layout_dump;
use crate::render::{render_svg, write_output_svg};
use anyhow::Result;
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "pitchplot",
    version,
    about = "Scatter-chart layout and SVG renderer for player/team stats"
)]
pub struct Args {
    /// Input dataset JSON, or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output SVG file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config file (JSON5 overrides of the defaults)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Point id to focus (always labeled, drawn on top)
    #[arg(long = "focus")]
    pub focus: Option<u64>,

    /// Point ids to highlight and label (comma separated)
    #[arg(long = "highlight", value_delimiter = ',')]
    pub highlight: Vec<u64>,

    /// Plot side length in pixels
    #[arg(long = "side")]
    pub side: Option<f32>,

    /// Plot the full dataset instead of the quality-filtered subset
    #[arg(long = "no-filter", default_value_t = false)]
    pub no_filter: bool,

    /// Also write a JSON dump of the computed layout
    #[arg(long = "dump-layout")]
    pub dump_layout: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(side) = args.side {
        anyhow::ensure!(side > 0.0, "--side must be positive");
        config.domain.screen_side = side;
    }

    let dataset = read_dataset(args.input.as_deref())?;
    let mut selection = Selection::default();
    selection.focus = args.focus;
    for id in args.highlight {
        selection.toggle(id);
    }

    let points = if args.no_filter {
        dataset.finite_points()
    } else {
        filter_quality(&dataset.finite_points(), selection.focus, &config.filter)
    };

    let layout = compute_scatter_layout(&points, &selection, &config);
    if let Some(dump_path) = args.dump_layout.as_deref() {
        write_layout_dump(dump_path, &layout)?;
    }
    let svg = render_svg(&layout, &config.theme, &config.render);
    write_output_svg(&svg, args.output.as_deref())?;
    Ok(())
}

fn read_dataset(path: Option<&Path>) -> Result<Dataset> {
    let Some(path) = path else {
        anyhow::bail!("no input dataset; pass -i <file> or -i -");
    };
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(Dataset::from_json(&buf)?);
    }
    Ok(Dataset::from_json_file(path)?)
}
