//! HashMill CLI - Sustained Parallel Digest Generation
//!
//! Hashes the integers forever, as fast as the machine allows.

use clap::Parser;
use hashmill::config::{CliArgs, OutputFormat, RunConfig};
use hashmill::core::HashEngine;
use hashmill::error::{HashMillError, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    // Parse CLI arguments
    let args = CliArgs::parse();

    // Handle result
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    // Build configuration
    let config = RunConfig::from_cli(&args).map_err(HashMillError::ConfigError)?;

    // Print configuration if verbose
    if args.verbose > 0 {
        print_config(&config);
    }

    // Run the engine; without --duration this blocks until the process
    // is terminated externally.
    let engine = HashEngine::new(config);
    let summary = engine.run()?;

    match args.output_format {
        OutputFormat::Text => {
            if !args.quiet {
                summary.print_summary();
            }
        }
        OutputFormat::Json => {
            println!("{}", summary.to_json()?);
        }
    }

    Ok(())
}

fn print_config(config: &RunConfig) {
    println!("=== Configuration ===");
    println!("Output:          {:?}", config.output);
    println!("Workers:         {}", config.effective_threads());
    println!("Batch size:      {}", config.batch_size);
    println!("Algorithm:       {}", config.algorithm.name());
    println!("Report interval: {:?}", config.report_interval);
    match config.duration {
        Some(d) => println!("Duration:        {}", humantime::format_duration(d)),
        None => println!("Duration:        unbounded"),
    }
    println!();
}
