// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use tree_inventory::{app, cli::Args, config::ScanConfig, logging};

fn main() -> ExitCode {
    let started = Instant::now();
    let outcome = run();
    eprintln!("elapsed: {:.2?}", started.elapsed());
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.log_level)?;

    let config = ScanConfig::from_args(args, prompt_for_root).context("invalid arguments")?;
    let report = app::run(&config).with_context(|| format!("scan of '{}' failed", config.root.display()))?;

    eprintln!("{}", report.summary);
    eprintln!("inventory written to {}", report.output.display());
    Ok(())
}

fn prompt_for_root() -> io::Result<String> {
    let mut err = io::stderr().lock();
    write!(err, "Directory to inventory: ")?;
    err.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
