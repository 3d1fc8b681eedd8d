//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variable fallbacks.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envforge")]
#[command(about = "Reconcile expected environment variables and regenerate .env files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envforge setup --config env.yaml\n  envforge setup --config env.yaml --dir deploy --no-dotenv\n  envforge get APP_PORT --as int\n  envforge get UPLOAD_LIMIT --as size\n"
)]
pub struct Cli {
    /// Log output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = LogFormat::Text,
        env = "ENVFORGE_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve declared variables and regenerate .env and .env.example
    Setup {
        /// YAML file listing the expected variables (key, default, is_required, description)
        #[arg(short, long, env = "ENVFORGE_CONFIG", value_name = "FILE")]
        config: Option<PathBuf>,

        /// Directory holding .env and .env.example
        #[arg(short, long, env = "ENVFORGE_DIR", default_value = ".", value_name = "DIR")]
        dir: PathBuf,

        /// Do not load an existing .env before resolving
        #[arg(long)]
        no_dotenv: bool,
    },

    /// Print an environment value decoded as a type
    Get {
        /// Environment variable name
        key: String,

        /// How to decode the value
        #[arg(long = "as", value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    Int,
    Int64,
    String,
    Bool,
    List,
    Duration,
    Size,
}
