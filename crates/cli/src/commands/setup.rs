//! `envforge setup`: resolve declared variables and regenerate env files.

use anyhow::{Context, Result};
use envforge_config::{EnvSetup, ProcessEnv, Regeneration};
use std::path::{Path, PathBuf};

use crate::error::ExitCode;

fn describe(regeneration: Regeneration) -> &'static str {
    match regeneration {
        Regeneration::Created => "created",
        Regeneration::Unchanged => "unchanged",
        Regeneration::Replaced => "updated",
    }
}

pub fn run(config: Option<PathBuf>, dir: &Path, no_dotenv: bool) -> Result<ExitCode> {
    let buffer = match &config {
        Some(path) => Some(
            std::fs::read(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?,
        ),
        None => None,
    };

    let setup = EnvSetup::new().with_dir(dir).with_dotenv(!no_dotenv);
    let report = setup
        .run_bytes(&mut ProcessEnv, buffer.as_deref())
        .context("Environment setup failed")?;

    eprintln!(
        "{}: {}, {}: {}",
        setup.env_path().display(),
        describe(report.env_file),
        setup.example_path().display(),
        describe(report.example_file),
    );
    for failure in report.failures() {
        eprintln!("error: {}", failure);
    }

    Ok(ExitCode::from(&report))
}
