mod analysis;
mod chart;
mod data;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};

use chart::html::PlotlyHtml;

/// Input file used when no path is given on the command line.
const DEFAULT_INPUT: &str = "dataset/netflix_titles.csv";
/// Where chart files are written.
const OUT_DIR: &str = "charts";

fn main() -> Result<()> {
    env_logger::init();

    let input: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

    let rows = data::loader::load_csv(&input)?;
    log::info!("loaded {} raw rows from {}", rows.len(), input.display());

    let table = data::clean::clean(rows).context("cleaning catalog data")?;
    log::info!("cleaned table has {} titles", table.len());

    let mut renderer = PlotlyHtml::new(OUT_DIR);
    report::run_report(&table, &mut renderer)?;

    println!("Report complete. Charts written to {OUT_DIR}/.");
    Ok(())
}
