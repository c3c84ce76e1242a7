mod extract;
mod io;
mod state;
mod types;

use std::{error::Error, io::BufRead};

const USAGE: &str = "Usage: solver_bench_stats <extract|averages|speedups> <input-file>";

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let stage = args.next().ok_or(USAGE)?;
    let input_filename = args.next().ok_or(USAGE)?;

    match stage.as_str() {
        "extract" => run_extract(&input_filename),
        "averages" => run_averages(&input_filename),
        "speedups" => run_speedups(&input_filename),
        _ => Err(USAGE.into()),
    }
}

/// Condense a raw solver log into one record per run.
fn run_extract(input_filename: &str) -> Result<(), Box<dyn Error>> {
    let file = std::fs::File::open(input_filename)?;
    let mut condenser = extract::Condenser::default();

    for line in std::io::BufReader::new(file).lines() {
        if let Some(record) = condenser.feed(&line?) {
            println!("{}", record);
        }
    }

    Ok(())
}

/// Print the mean seconds of each contiguous group of condensed records.
fn run_averages(input_filename: &str) -> Result<(), Box<dyn Error>> {
    let mut state = state::GroupMeanState::default();

    for result in io::TrialFileReader::new(input_filename)? {
        if let Some(group) = state.process(result?)? {
            println!("{}", group);
        }
    }

    println!("{}", state.finish()?);

    Ok(())
}

/// Print per-trial speedups against the latest baseline, then the final
/// per-thread-count averages.
fn run_speedups(input_filename: &str) -> Result<(), Box<dyn Error>> {
    let mut state = state::SpeedupState::default();

    for result in io::MeasurementFileReader::new(input_filename)? {
        if let Some(speedup) = state.process(result?)? {
            println!("{}", speedup);
        }
    }

    // Dump the averages to stdout
    state.into_averages()?.write(std::io::stdout())?;

    Ok(())
}
