//! Atmospheric refraction and barometric pressure calculator.
//!
//! Computes the Saemundsson (1986) refraction correction of the solar
//! elevation angle and the pressure profile of a constant-lapse-rate
//! standard atmosphere, as single values, streamed sweeps, or rendered
//! reference figures.

mod atmosphere;
mod chart;
mod cli;
mod compute;
mod data;
mod error;
mod output;
mod planner;
mod refraction;

use crate::data::Command;
use crate::error::CliError;
use std::process;
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    match cli::parse_cli(args) {
        Ok((series, command, params)) => {
            let start_time = params.perf.then(Instant::now);

            if command == Command::Chart {
                match chart::render_charts(&params) {
                    Ok(paths) => {
                        for path in paths {
                            println!("{}", path.display());
                        }
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        process::exit(1);
                    }
                }
                report_perf(start_time, 2);
                return;
            }

            // parse_cli guarantees a series for the calculation commands
            let Some(series) = series else {
                eprintln!("Error: Missing series argument");
                process::exit(1);
            };

            let plan = match planner::build_job(series, command, params.clone()) {
                Ok(plan) => plan,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            };

            let results = compute::calculate_stream(plan.samples, plan.command, plan.params);
            match output::dispatch_output(results, command, &params) {
                Ok(count) => report_perf(start_time, count),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }
        }
        Err(CliError::Exit(message)) => {
            println!("{}", message);
        }
        Err(CliError::Message(message)) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    }
}

fn report_perf(start_time: Option<Instant>, records: usize) {
    if let Some(start) = start_time {
        let elapsed = start.elapsed().as_secs_f64();
        eprintln!(
            "Processed {} records in {:.3}s ({:.0} records/sec)",
            records,
            elapsed,
            records as f64 / elapsed.max(1e-9)
        );
    }
}
