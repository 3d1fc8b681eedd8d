//! envforge - reconcile expected environment variables with `.env` files.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Install the tracing subscriber (text or JSON, filtered by `RUST_LOG`).
//! - Run the requested command and map its outcome to an exit code.
//!
//! Does NOT handle:
//! - Resolution or file regeneration logic (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr; only `get` writes to stdout.
//! - Any error surfaced to `main` exits with `ExitCode::GeneralError`.

mod args;
mod commands;
mod error;

use args::{Cli, Commands, LogFormat};
use clap::Parser;
use error::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let exit_code = match cli.command {
        Commands::Setup {
            config,
            dir,
            no_dotenv,
        } => commands::setup::run(config, &dir, no_dotenv),
        Commands::Get { key, kind } => {
            commands::get::run(&key, kind);
            Ok(ExitCode::Success)
        }
    };

    match exit_code {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}
