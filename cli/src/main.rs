use std::{io, process::ExitCode};

use anyhow::Error;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use trinary::{strictly, weakly, Operator, Trinary, Value};

#[derive(Parser, Debug)]
#[command(version, about = "Kleene three-valued logic", long_about = None)]
struct Args {
    /// Log debug events to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a binary operator to two values
    Eval {
        #[arg(allow_hyphen_values = true)]
        lhs: Value,
        op: Operator,
        #[arg(allow_hyphen_values = true)]
        rhs: Value,
    },
    /// Negate a value
    Not {
        #[arg(allow_hyphen_values = true)]
        value: Value,
    },
    /// Collapse a value, treating Unknown as false
    Strictly {
        #[arg(allow_hyphen_values = true)]
        value: Value,
    },
    /// Collapse a value, treating Unknown as true
    Weakly {
        #[arg(allow_hyphen_values = true)]
        value: Value,
    },
    /// Cast a value directly to a bool
    Cast {
        #[arg(allow_hyphen_values = true)]
        value: Value,
    },
    /// Print the truth table of an operator
    Table { op: Operator },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn print_trinary(format: OutputFormat, value: Trinary) -> Result<(), Error> {
    match format {
        OutputFormat::Text => println!("{value}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(&value)?),
    }
    Ok(())
}

fn print_bool(value: bool) {
    println!("{value}");
}

fn run(args: &Args) -> Result<(), Error> {
    match &args.command {
        Command::Eval { lhs, op, rhs } => {
            tracing::debug!(%lhs, %op, %rhs, "evaluating");
            let result = lhs.apply(*op, rhs)?;
            tracing::debug!(%result, "evaluated");
            print_trinary(args.format, result)?;
        }
        Command::Not { value } => {
            tracing::debug!(%value, "negating");
            print_trinary(args.format, value.negate()?)?;
        }
        Command::Strictly { value } => {
            tracing::debug!(%value, "collapsing strictly");
            print_bool(strictly(value));
        }
        Command::Weakly { value } => {
            tracing::debug!(%value, "collapsing weakly");
            print_bool(weakly(value));
        }
        Command::Cast { value } => {
            tracing::debug!(%value, "casting");
            print_bool(value.to_bool()?);
        }
        Command::Table { op } => {
            let table = op.truth_table();
            match args.format {
                OutputFormat::Text => println!("{table}"),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
            }
        }
    }
    Ok(())
}

fn main() -> Result<ExitCode, Error> {
    let args = Args::parse();
    init_tracing(args.verbose);
    tracing::debug!(?args, "parsed arguments");

    run(&args)?;

    Ok(ExitCode::SUCCESS)
}
