mod args;
mod sample;

use analysis::AnalysisReport;
use args::Args;
use clap::Parser;
use log::LevelFilter;
use sample::SAMPLE_GAME;
use simplelog::{Config, SimpleLogger, WriteLogger};
use std::error::Error;
use std::fs::File;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;
    let config = args.analysis_config();

    let moves: Vec<String> = if args.moves.is_empty() {
        SAMPLE_GAME.iter().map(|m| m.to_string()).collect()
    } else {
        args.moves.clone()
    };

    log::info!(
        "Analysing {} moves with {} (depth {}, {} ms per position)",
        moves.len(),
        config.engine.display(),
        config.limits.depth,
        config.limits.timeout.as_millis()
    );

    let report = analysis::run(&config, &moves)?;
    print_report(&report);

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    match &args.log_file {
        Some(log_file) => WriteLogger::init(level, Config::default(), File::create(log_file)?)?,
        None => SimpleLogger::init(level, Config::default())?,
    }

    Ok(args)
}

fn print_report(report: &AnalysisReport) {
    println!();
    for analyzed in &report.moves {
        println!(
            "{:>4}. {:<8} {}",
            analyzed.index + 1,
            analyzed.text,
            analyzed.result
        );
    }

    for skipped in &report.skipped {
        println!("{:>4}. {:<8} skipped: {}", skipped.index + 1, skipped.text, skipped.error);
    }

    log::info!("Final evaluations: {:?}", report.evaluations());
    if report.failures() > 0 {
        log::warn!(
            "{} of {} positions could not be evaluated",
            report.failures(),
            report.moves.len()
        );
    }
}
