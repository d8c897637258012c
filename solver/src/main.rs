use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use cablewrap::{Analysis, GridAnalyzer};
use clap::Parser;
use log::LevelFilter;

/// Count how many times the wire in a grid wraps around its metal bars.
#[derive(Debug, Parser)]
#[command(version)]
struct CLIArgs {
    /// Grid file: `rows cols` followed by the rows. Reads stdin when omitted or `-`.
    input_path: Option<PathBuf>,
    /// Print the bars, junctions, tallies and wire network after the answer.
    #[arg(long)]
    report: bool,
    /// Log more; repeat for more detail. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_input(input_path: Option<&PathBuf>) -> Result<String> {
    match input_path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid from given input file({}).", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read grid from stdin.")?;
            Ok(text)
        }
    }
}

fn print_report(analysis: &Analysis, network: &str) {
    let join = |indices: &[usize]| indices.iter().map(usize::to_string).collect::<Vec<_>>().join(" ");

    println!("metal rows: {}", join(&analysis.metal_rows));
    println!("metal columns: {}", join(&analysis.metal_columns));
    println!("junctions: {}", analysis.junctions.len());
    println!("path: {} cell(s) from {}", analysis.path.len(), analysis.start);
    for (row, sum) in &analysis.row_tallies {
        println!("row {}: tally {:+}, wraps {}", row, sum, sum.unsigned_abs() / 2);
    }
    for (col, sum) in &analysis.column_tallies {
        println!("column {}: tally {:+}, wraps {}", col, sum, sum.unsigned_abs() / 2);
    }
    print!("{}", network);
}

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    init_logging(args.verbose);

    let text = read_input(args.input_path.as_ref())?;
    let grid = cablewrap::parse_grid(&text).context("Failed to parse grid.")?;
    let analyzer = GridAnalyzer::from(&grid);
    let analysis = analyzer.analyze().context("Failed to walk the wire.")?;

    println!("{}", analysis.answer);
    if args.report {
        print_report(&analysis, &grid.render_network(analyzer.classification()));
    }

    Ok(())
}
