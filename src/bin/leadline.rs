use anyhow::Result;
use clap::Parser;
use leadline::{dataset, viz};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "leadline",
    version,
    about = "Render the built-in multi-series line chart with non-overlapping end labels"
)]
struct Cli {
    /// Output SVG path.
    #[arg(default_value = "chart.svg")]
    out: PathBuf,
    /// Chart width in pixels (the label gutter comes on top of this).
    #[arg(long, default_value_t = viz::DEFAULT_WIDTH)]
    width: u32,
    /// Chart height in pixels.
    #[arg(long, default_value_t = viz::DEFAULT_HEIGHT)]
    height: u32,
    /// Horizontal room reserved for leaders and label text.
    #[arg(long, default_value_t = viz::DEFAULT_LABEL_MARGIN)]
    label_margin: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let series = dataset::builtin_series();
    viz::render_chart(&series, &cli.out, cli.width, cli.height, cli.label_margin)?;
    println!("wrote {}", cli.out.display());
    Ok(())
}
