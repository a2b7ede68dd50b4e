use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use eframe::egui;

use quadview::app::QuadViewApp;
use quadview::config::Config;
use quadview::data::export::export_table;
use quadview::session::{Cell, HelperOutcome, Session};

fn cli() -> Command {
    Command::new("quadview")
        .version(clap::crate_version!())
        .about("Plot y = x² over a sampled range, tabulate it and call ext_list")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("lower")
                .long("lower")
                .help("Lower bound of the sampled range. Overrides the configuration file.")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("upper")
                .long("upper")
                .help("Upper bound of the sampled range. Overrides the configuration file.")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .help("Number of samples. Overrides the configuration file.")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("table")
                .long("table")
                .help("Assemble and print the x/y table")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("helper")
                .long("helper")
                .help("Call ext_list with the configured list and parameters")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("helper_cmd")
                .long("helper-cmd")
                .help("Program implementing ext_list (JSON on stdin, JSON on stdout)")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::CommandName),
        )
        .arg(
            Arg::new("export")
                .short('o')
                .long("export")
                .help("Write the table to a .csv, .json or .parquet file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("headless")
                .long("headless")
                .help("Do not open the plot window")
                .action(ArgAction::SetTrue),
        )
}

/// Configuration file (if any) with command-line overrides applied.
fn build_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(&lower) = matches.get_one::<f64>("lower") {
        config.range.lower = lower;
    }
    if let Some(&upper) = matches.get_one::<f64>("upper") {
        config.range.upper = upper;
    }
    if let Some(&count) = matches.get_one::<usize>("count") {
        config.range.count = count;
    }
    if matches.get_flag("table") {
        config.table.enabled = true;
    }
    if matches.get_flag("helper") {
        config.helper.enabled = true;
    }
    if let Some(cmd) = matches.get_one::<PathBuf>("helper_cmd") {
        config.helper.command = Some(cmd.clone());
    }
    Ok(config)
}

/// Cells to run. Exporting needs the table, so `--export` adds that cell.
fn build_plan(config: &Config, matches: &ArgMatches) -> Vec<Cell> {
    let mut cells = Cell::plan(config);
    if matches.get_one::<PathBuf>("export").is_some() && !cells.contains(&Cell::Table) {
        cells.push(Cell::Table);
        cells.sort();
    }
    cells
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("quadview=info"))
        .init();

    let matches = cli().get_matches();
    let config = build_config(&matches)?;
    let export = matches.get_one::<PathBuf>("export").cloned();
    let cells = build_plan(&config, &matches);

    let mut session = Session::new(config);
    session.run(&cells).context("running cells")?;

    if let Some(table) = &session.table {
        println!("{}", table.pretty()?);
    }

    match &session.helper_outcome {
        Some(HelperOutcome::Returned(value)) => println!("ext_list -> {value}"),
        Some(HelperOutcome::Failed(msg)) => eprintln!("ext_list failed: {msg}"),
        None => {}
    }

    if let Some(path) = export {
        let table = session.table.as_ref().context("no table to export")?;
        export_table(table, &path)
            .with_context(|| format!("exporting table to {}", path.display()))?;
    }

    if matches.get_flag("headless") {
        return Ok(());
    }

    let plot = &session.config.plot;
    let title = plot.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(plot.size)
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(QuadViewApp::new(session)))),
    )
    .map_err(|e| anyhow!("plot window failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn flags_override_configuration() {
        let matches = cli()
            .try_get_matches_from([
                "quadview",
                "--lower",
                "-1",
                "--upper",
                "3",
                "-n",
                "5",
                "--table",
                "--helper",
                "--helper-cmd",
                "ext_list",
            ])
            .unwrap();
        let config = build_config(&matches).unwrap();
        assert_eq!(config.range.lower, -1.0);
        assert_eq!(config.range.upper, 3.0);
        assert_eq!(config.range.count, 5);
        assert!(config.table.enabled);
        assert!(config.helper.enabled);
        assert_eq!(config.helper.command, Some(PathBuf::from("ext_list")));
    }

    #[test]
    fn export_adds_the_table_cell() {
        let matches = cli()
            .try_get_matches_from(["quadview", "--export", "t.csv"])
            .unwrap();
        let config = build_config(&matches).unwrap();
        assert_eq!(
            build_plan(&config, &matches),
            vec![Cell::Computation, Cell::Visualization, Cell::Table]
        );
    }

    #[test]
    fn export_keeps_table_before_helper() {
        let matches = cli()
            .try_get_matches_from(["quadview", "--helper", "-o", "t.json"])
            .unwrap();
        let config = build_config(&matches).unwrap();
        assert_eq!(
            build_plan(&config, &matches),
            vec![
                Cell::Computation,
                Cell::Visualization,
                Cell::Table,
                Cell::Helper,
            ]
        );
    }

    #[test]
    fn no_export_leaves_the_plan_alone() {
        let matches = cli().try_get_matches_from(["quadview"]).unwrap();
        let config = build_config(&matches).unwrap();
        assert_eq!(
            build_plan(&config, &matches),
            vec![Cell::Computation, Cell::Visualization]
        );
    }

    #[test]
    fn no_flags_keep_defaults() {
        let matches = cli().try_get_matches_from(["quadview"]).unwrap();
        assert_eq!(build_config(&matches).unwrap(), Config::default());
    }
}
