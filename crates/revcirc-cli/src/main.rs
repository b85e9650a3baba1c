//! Revcirc Command-Line Interface
//!
//! Loads reversible circuit documents (JSON or YAML) and evaluates them.
//!
//! ```text
//! l0 ──●──────x──
//! l1 ──●──────x──
//! l2 ──⊕──●───●──
//! l3 ─────⊕──────
//!
//!      R E V C I R C
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{check, eval, invert, table, version};

/// Revcirc - reversible logic circuit evaluation
#[derive(Parser)]
#[command(name = "revcirc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a circuit on an input register
    Eval {
        /// Circuit document (JSON or YAML)
        #[arg(short, long, env = "REVCIRC_CIRCUIT")]
        circuit: String,

        /// Input bits, line 0 first (e.g. 1101)
        #[arg(short, long, env = "REVCIRC_INPUT")]
        input: String,

        /// Print a JSON object instead of the bare output bits
        #[arg(long)]
        json: bool,
    },

    /// Load and validate a circuit, then print a summary
    Check {
        /// Circuit document (JSON or YAML)
        #[arg(short, long, env = "REVCIRC_CIRCUIT")]
        circuit: String,
    },

    /// Print the input/output table of a circuit
    Table {
        /// Circuit document (JSON or YAML)
        #[arg(short, long, env = "REVCIRC_CIRCUIT")]
        circuit: String,
    },

    /// Write the inverse of a circuit
    Invert {
        /// Circuit document (JSON or YAML)
        #[arg(short, long, env = "REVCIRC_CIRCUIT")]
        circuit: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; RUST_LOG wins over -v when set.
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Eval {
            circuit,
            input,
            json,
        } => eval::execute(&circuit, &input, json),

        Commands::Check { circuit } => check::execute(&circuit),

        Commands::Table { circuit } => table::execute(&circuit),

        Commands::Invert { circuit, output } => invert::execute(&circuit, output.as_deref()),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
