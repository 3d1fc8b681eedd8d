//! `envforge get`: print an environment value decoded as a type.

use envforge_config::constants::ENV_FILE_NAME;
use envforge_config::dotenv::{dotenv_disabled, load_dotenv};
use envforge_config::{ProcessEnv, TypedEnv};
use std::path::Path;

use crate::args::ValueKind;

/// Render `key` from `env` the way `get` prints it.
pub fn format_value(env: &impl TypedEnv, key: &str, kind: ValueKind) -> String {
    match kind {
        ValueKind::Int => env.get_int(key).to_string(),
        ValueKind::Int64 => env.get_int64(key).to_string(),
        ValueKind::String => env.get_string(key),
        ValueKind::Bool => env.get_bool(key).to_string(),
        ValueKind::List => env.get_list_string(key).join("\n"),
        ValueKind::Duration => format!("{:?}", env.get_duration(key)),
        ValueKind::Size => env.get_size(key).to_string(),
    }
}

pub fn run(key: &str, kind: ValueKind) {
    let mut env = ProcessEnv;
    if !dotenv_disabled()
        && let Err(e) = load_dotenv(&mut env, Path::new(ENV_FILE_NAME))
    {
        tracing::debug!(reason = %e, "No .env loaded");
    }
    println!("{}", format_value(&env, key, kind));
}
