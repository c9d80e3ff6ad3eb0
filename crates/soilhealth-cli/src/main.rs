//! Soil-health CLI entry point.
//!
//! Provides command-line tools for working with parameter sets:
//! - `soilhealth eval` - Evaluate a single expression
//! - `soilhealth assess` - Resolve and classify a parameter set
//! - `soilhealth check` - Report problems in a parameter set

mod commands;
mod load;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_assess, run_check, run_eval, AssessArgs, CheckArgs, EvalArgs};
use tracing_subscriber::EnvFilter;

/// Soil-health parameter tools.
#[derive(Debug, Parser)]
#[command(name = "soilhealth")]
#[command(about = "Soil-health parameter evaluation tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate an arithmetic expression
    Eval(EvalArgs),
    /// Resolve and classify every parameter in a set
    Assess(AssessArgs),
    /// Check a parameter set for broken expressions
    Check(CheckArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` shows engine debug events.
fn setup_tracing(verbose: bool) {
    let default_filter = if verbose { "soilhealth=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(true)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Eval(args) => run_eval(args),
        Commands::Assess(args) => run_assess(args),
        Commands::Check(args) => run_check(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
