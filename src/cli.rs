//! Command-line interface components.

use crate::config::CleanerConfig;
use crate::constants::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use crate::models::CleaningStats;
use clap::Parser;
use colored::*;
use indicatif::HumanDuration;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalog_cleaner")]
#[command(about = "Clean a product-catalog CSV export into a JSON record set")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Catalog CSV export to clean
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input_path: PathBuf,

    /// JSON file to write the cleaned records to
    #[arg(short, long = "output", value_name = "OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: PathBuf,

    /// Clean and report statistics without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Enable verbose logging (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the run configuration from the parsed arguments
    pub fn to_config(&self) -> CleanerConfig {
        let mut config = CleanerConfig::default()
            .with_input_path(&self.input_path)
            .with_output_path(&self.output_path);

        if self.dry_run {
            config = config.with_dry_run();
        }
        if self.no_progress || self.quiet {
            config = config.without_progress();
        }

        config
    }
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("catalog_cleaner={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    tracing::debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print the success confirmation and run summary
pub fn print_summary(args: &Args, stats: &CleaningStats) {
    if args.dry_run {
        println!(
            "{} {}",
            "✓ Dry run complete, nothing written to".bright_green().bold(),
            args.output_path.display()
        );
    } else {
        println!(
            "{} {}",
            "✓ Data cleaned and saved to".bright_green().bold(),
            args.output_path.display()
        );
    }

    if args.quiet {
        return;
    }

    println!();
    println!("  {} {}", "Rows read:".bright_cyan(), stats.total_rows);
    println!(
        "  {} {} ({:.1}%)",
        "Records written:".bright_cyan(),
        stats.records_written.to_string().bright_white().bold(),
        stats.retention_rate()
    );

    if stats.dropped() > 0 {
        println!(
            "  {} {} ({} missing price, {} unparsable price)",
            "Rows dropped:".bright_yellow(),
            stats.dropped(),
            stats.missing_price,
            stats.invalid_price
        );
    }

    println!(
        "  {} rating {}, category {}, brand {}, description {}",
        "Defaults applied:".bright_cyan(),
        stats.rating_defaults,
        stats.category_defaults,
        stats.brand_defaults,
        stats.description_defaults
    );

    if !args.dry_run {
        println!(
            "  {} {}",
            "Output size:".bright_cyan(),
            CleaningStats::format_size(stats.output_bytes)
        );
    }

    println!(
        "  {} {}",
        "Elapsed:".bright_cyan(),
        HumanDuration(stats.processing_time)
    );
}
