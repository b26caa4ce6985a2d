// ecef-llh - Main Entry Point
// Copyright (C) 2026 - ecef-llh contributors
// Licensed under AGPL v3

use ecef_llh::cli::{self, Outcome};
use ecef_llh::config::Config;
use std::io;
use std::process;
use tracing::{debug, error, info};

fn main() {
    // Parse command-line arguments
    let config = Config::from_env();

    // Initialize logging
    init_logging(config.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli::run(&config, &mut out) {
        Ok(Outcome::Usage) => {}
        Ok(Outcome::Report(llh)) => {
            debug!("Finished after {} iterations (converged: {})", llh.iterations, llh.converged);
        }
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

/// Initialize logging subsystem. Logs go to stderr so stdout carries only the report.
fn init_logging(verbose: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    if verbose {
        subscriber
            .with_max_level(tracing::Level::DEBUG)
            .init();
        info!("Verbose logging enabled (DEBUG level)");
    } else {
        subscriber
            .with_max_level(tracing::Level::INFO)
            .init();
    }
}
