use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, Command, ValueHint};

use quadview::config::Config;
use quadview::data::export::export_table;
use quadview::data::table::Table;
use quadview::data::transform::square_curve;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("quadview=info"))
        .init();

    let matches = Command::new("export_table")
        .version(clap::crate_version!())
        .about("Compute y = x² and write the x/y table without opening a window")
        .arg(
            Arg::new("output")
                .help("Output file; the format follows the extension (.csv, .json, .parquet)")
                .default_value("quadratic.parquet")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("JSON configuration file for the range and column labels")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .get_matches();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let output = matches
        .get_one::<PathBuf>("output")
        .context("missing output path")?;

    let samples = config.range.generate().context("sampling range")?;
    let curve = square_curve(samples);
    let table = Table::with_labels(&curve, config.table.labels.clone())
        .context("assembling table")?;

    export_table(&table, output)?;

    println!(
        "Wrote {} rows ({}, {}) over [{}, {}] to {}",
        table.num_rows(),
        config.table.labels[0],
        config.table.labels[1],
        config.range.lower,
        config.range.upper,
        output.display()
    );
    Ok(())
}
