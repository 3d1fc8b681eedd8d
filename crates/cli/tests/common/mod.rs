//! Shared test utilities for envforge integration tests.
//!
//! Invariants / Assumptions:
//! - Every command built here is hermetic: `DOTENV_DISABLED=1` is set and
//!   envforge's own variables are cleared from the inherited environment.

use assert_cmd::Command;

/// Returns a hermetic `envforge` command for integration testing.
pub fn envforge_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envforge");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("ENVFORGE_CONFIG")
        .env_remove("ENVFORGE_DIR")
        .env_remove("ENVFORGE_LOG_FORMAT")
        .env_remove("RUST_LOG");

    cmd
}
