//! tacline - CLI for tactical graphic point generation
//!
//! Usage:
//!   tacline families                          List symbol families
//!   tacline count <input>                     Print the point count
//!   tacline generate <input> [-f svg] [-o f]  Generate points
//!   tacline harness [-n 20] [--seed 1]        Consistency sweep
//!
//! Input documents are JSON or YAML (`.yaml`/`.yml`); `-` reads stdin.

mod cli;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cli::{cmd_count, cmd_families, cmd_generate, cmd_harness, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "tacline", version, about = "Point generation for tactical line graphics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every symbol family with its class and minimum anchor count
    Families,
    /// Print the exact number of points a graphic needs
    Count {
        /// Input document (JSON or YAML), or `-` for stdin
        input: String,
    },
    /// Generate the styled points of a graphic
    Generate {
        /// Input document (JSON or YAML), or `-` for stdin
        input: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Randomised count/generate consistency sweep over every family
    Harness {
        #[arg(short = 'n', long, default_value_t = 20)]
        iterations: usize,
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Families => {
            cmd_families();
            Ok(())
        }
        Command::Count { input } => cmd_count(&input),
        Command::Generate { input, format, output } => cmd_generate(&input, format, output.as_deref()),
        Command::Harness { iterations, seed } => cmd_harness(iterations, seed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
