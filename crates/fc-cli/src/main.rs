//! CLI frontend for the fatecheck dice roller.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use fc_core::CheckConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fatecheck",
    about = "fatecheck: d20 checks refined by a fate die",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

// Flags shared by every command that rolls dice.
#[derive(Args)]
struct CheckArgs {
    /// Level gap; each point lowers the threshold by one
    #[arg(
        short = 'g',
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-10..=10)
    )]
    level_gap: i32,

    /// Situational modifier added to the d20
    #[arg(
        short,
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-10..=10)
    )]
    modifier: i32,

    /// Number of rolls
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=50)
    )]
    count: u32,

    /// RNG seed for reproducible rolls
    #[arg(short, long)]
    seed: Option<u64>,
}

impl CheckArgs {
    fn config(&self) -> CheckConfig {
        let config = CheckConfig::default()
            .with_level_gap(self.level_gap)
            .with_modifier(self.modifier)
            .with_count(self.count);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Roll checks and print the results table
    Roll {
        #[command(flatten)]
        check: CheckArgs,
    },

    /// Roll checks and export the results
    Export {
        /// Output format: csv, json, markdown
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        check: CheckArgs,
    },

    /// Explain how checks are resolved
    Rules,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Roll { check } => commands::roll::run(&check.config()),
        Commands::Export {
            format,
            output,
            check,
        } => commands::export::run(&check.config(), &format, output.as_deref()),
        Commands::Rules => commands::rules::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
