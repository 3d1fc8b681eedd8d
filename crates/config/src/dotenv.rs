//! `.env` loading into an environment store.
//!
//! Responsibilities:
//! - Read `KEY=VALUE` pairs from a dotenv file with `dotenvy`.
//! - Fill the store only where it has no value yet, so the live environment
//!   takes precedence over the file.
//! - Honor the `DOTENV_DISABLED` gate.
//!
//! Invariants:
//! - A file that fails to parse sets nothing: all lines are read before the
//!   first write.
//! - Errors never include raw `.env` line contents.

use std::path::Path;

use crate::constants::DOTENV_DISABLED_VAR;
use crate::error::DotenvError;
use crate::store::EnvStore;

/// Check if dotenv loading is disabled via environment variable.
pub fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load `path` into `store` without overriding non-empty values.
///
/// Returns the number of variables that were filled from the file.
pub fn load_dotenv<S: EnvStore + ?Sized>(store: &mut S, path: &Path) -> Result<usize, DotenvError> {
    let pairs = dotenvy::from_path_iter(path)?.collect::<Result<Vec<_>, _>>()?;

    let mut loaded = 0;
    for (key, value) in pairs {
        if store.get(&key).is_some_and(|current| !current.is_empty()) {
            continue;
        }
        match store.set(&key, &value) {
            Ok(()) => loaded += 1,
            Err(e) => tracing::warn!(env_key = %key, error = %e, "Skipping .env entry"),
        }
    }

    tracing::debug!(path = %path.display(), loaded, "Loaded .env file");
    Ok(loaded)
}
