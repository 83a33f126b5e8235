use anyhow::Context;
use catalog_cleaner::cli::{Args, print_summary, setup_logging};
use catalog_cleaner::{CatalogProcessor, CleaningStats};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    if let Err(error) = setup_logging(&args) {
        eprintln!("Failed to initialize logging: {:#}", error);
        process::exit(1);
    }

    match run(&args) {
        Ok(stats) => {
            print_summary(&args, &stats);
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<CleaningStats> {
    let processor = CatalogProcessor::new(args.to_config())
        .context("Failed to start catalog cleaning")?;

    let stats = processor.process().with_context(|| {
        format!(
            "Failed to clean catalog {}",
            args.input_path.display()
        )
    })?;

    Ok(stats)
}
