//! Greeks CLI - Black-Scholes sensitivities from the command line
//!
//! Results are written to stdout; logs go to stderr.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use greeks_cli::commands;
use greeks_cli::config::{build_config, CliArgs, InputsSection};
use greeks_cli::Result;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Black-Scholes Greeks calculator for European options
#[derive(Parser)]
#[command(name = "greeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", env = "GREEKS_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Output options shared by the evaluating commands
#[derive(Args)]
struct OutputArgs {
    /// Output format (table, json, csv)
    #[arg(short, long)]
    format: Option<String>,

    /// Decimal places in table and CSV output
    #[arg(short, long)]
    precision: Option<usize>,

    /// Also print d1, d2 and n(d1)
    #[arg(short, long)]
    intermediates: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the Greeks for a set of pricing inputs
    Evaluate {
        /// Spot price of the underlying (S0)
        #[arg(long, allow_negative_numbers = true)]
        spot: Option<f64>,

        /// Strike price (K)
        #[arg(long, allow_negative_numbers = true)]
        strike: Option<f64>,

        /// Time to expiry in years (T)
        #[arg(long, allow_negative_numbers = true)]
        expiry: Option<f64>,

        /// Continuously compounded risk-free rate (r)
        #[arg(long, allow_negative_numbers = true)]
        rate: Option<f64>,

        /// Annualised volatility (sigma)
        #[arg(long, allow_negative_numbers = true)]
        volatility: Option<f64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Evaluate the Greeks for the reference inputs
    Reference {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Validate configuration and print the effective settings
    Check,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let mut args = CliArgs {
            config_file: self.config.clone(),
            verbose: self.verbose,
            log_level: self.log_level.clone(),
            ..CliArgs::default()
        };

        match &self.command {
            Commands::Evaluate {
                spot,
                strike,
                expiry,
                rate,
                volatility,
                output,
            } => {
                args.inputs = InputsSection {
                    spot: *spot,
                    strike: *strike,
                    expiry: *expiry,
                    rate: *rate,
                    volatility: *volatility,
                };
                args.format = output.format.clone();
                args.precision = output.precision;
            }
            Commands::Reference { output } => {
                args.format = output.format.clone();
                args.precision = output.precision;
            }
            Commands::Check => {}
        }

        args
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(config.log_level.as_filter_str());

    debug!(
        log_level = %config.log_level,
        format = %config.format,
        precision = config.precision,
        "Configuration loaded"
    );
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Commands::Evaluate { output, .. } => {
            commands::evaluate::run(&config, output.intermediates, &mut stdout)
        }
        Commands::Reference { output } => {
            commands::reference::run(&config, output.intermediates, &mut stdout)
        }
        Commands::Check => commands::check::run(&config, &mut stdout),
    }
}
