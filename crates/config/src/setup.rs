//! Environment setup runs.
//!
//! Responsibilities:
//! - Provide the `EnvSetup` builder that configures where files are written,
//!   whether `.env` is loaded, and who is named in the header.
//! - Orchestrate one run: load `.env`, resolve descriptors, regenerate
//!   `.env` and `.env.example`, and report the outcome.
//! - Provide the process-level entry points `setup_config` and
//!   `try_setup_config`.
//!
//! Does NOT handle:
//! - Descriptor parsing details (see `descriptor.rs`).
//! - Line formatting (see `render.rs`) or file comparison (see `regenerate.rs`).
//!
//! Invariants / Assumptions:
//! - Both files are regenerated even when required variables are missing.
//! - A parse error leaves the store and the file system untouched.
//! - Setup runs once per process, before other threads read the environment.

use std::path::{Path, PathBuf};

use crate::constants::{ENV_FILE_NAME, EXAMPLE_FILE_NAME};
use crate::descriptor::{ConfigDescriptor, parse_descriptors};
use crate::dotenv::{dotenv_disabled, load_dotenv};
use crate::error::{SetupError, SetupFailure};
use crate::identity::{OperatorIdentity, SystemIdentity};
use crate::regenerate::{Header, Regeneration, regenerate};
use crate::resolve::{Resolution, resolve};
use crate::store::{EnvStore, ProcessEnv};

/// Process exit status for a failed setup.
pub const SETUP_FAILURE_EXIT_CODE: i32 = 1;

/// Outcome of a setup run that got as far as writing both files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub resolution: Resolution,
    pub env_file: Regeneration,
    pub example_file: Regeneration,
}

impl SetupReport {
    pub fn failures(&self) -> &[SetupFailure] {
        &self.resolution.failures
    }

    pub fn is_success(&self) -> bool {
        !self.resolution.has_failures()
    }

    /// `0` on success, `1` when any failure was collected.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            SETUP_FAILURE_EXIT_CODE
        }
    }
}

/// Builder for a setup run.
pub struct EnvSetup {
    dir: PathBuf,
    env_file: String,
    example_file: String,
    load_dotenv: bool,
    identity: Box<dyn OperatorIdentity>,
}

impl Default for EnvSetup {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvSetup {
    /// Setup in the current directory with the default file names.
    pub fn new() -> Self {
        Self {
            dir: PathBuf::from("."),
            env_file: ENV_FILE_NAME.to_string(),
            example_file: EXAMPLE_FILE_NAME.to_string(),
            load_dotenv: true,
            identity: Box::new(SystemIdentity),
        }
    }

    /// Directory holding `.env` and `.env.example`.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn with_env_file(mut self, name: impl Into<String>) -> Self {
        self.env_file = name.into();
        self
    }

    pub fn with_example_file(mut self, name: impl Into<String>) -> Self {
        self.example_file = name.into();
        self
    }

    /// Enable or disable loading the existing `.env` before resolution.
    ///
    /// Loading is also skipped when `DOTENV_DISABLED` is `1` or `true`.
    pub fn with_dotenv(mut self, enabled: bool) -> Self {
        self.load_dotenv = enabled;
        self
    }

    pub fn with_identity(mut self, identity: impl OperatorIdentity + 'static) -> Self {
        self.identity = Box::new(identity);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn env_path(&self) -> PathBuf {
        self.dir.join(&self.env_file)
    }

    pub fn example_path(&self) -> PathBuf {
        self.dir.join(&self.example_file)
    }

    /// Parse `buffer` and run setup against `store`.
    pub fn run_bytes<S: EnvStore + ?Sized>(
        &self,
        store: &mut S,
        buffer: Option<&[u8]>,
    ) -> Result<SetupReport, SetupError> {
        let descriptors = parse_descriptors(buffer)?;
        self.run(store, &descriptors)
    }

    /// Resolve `descriptors` against `store` and regenerate both files.
    ///
    /// Collected failures are reported in the returned `SetupReport`; only
    /// file I/O errors are returned as `Err`.
    pub fn run<S: EnvStore + ?Sized>(
        &self,
        store: &mut S,
        descriptors: &[ConfigDescriptor],
    ) -> Result<SetupReport, SetupError> {
        if self.load_dotenv && !dotenv_disabled() {
            let path = self.env_path();
            if let Err(e) = load_dotenv(store, &path) {
                tracing::info!(
                    path = %path.display(),
                    reason = %e,
                    "Failed to load .env file, using environment variables"
                );
            }
        }

        let resolution = resolve(store, descriptors);

        let header = Header::now(self.identity.as_ref());
        let env_file = regenerate(&self.env_path(), &resolution.env_groups, &header)?;
        let example_file = regenerate(&self.example_path(), &resolution.example_groups, &header)?;

        for failure in &resolution.failures {
            tracing::debug!(env_key = %failure.key(), "{}", failure);
        }

        Ok(SetupReport {
            resolution,
            env_file,
            example_file,
        })
    }
}

/// Run setup against the process environment in the current directory.
pub fn try_setup_config(buffer: Option<&[u8]>) -> Result<SetupReport, SetupError> {
    tracing::info!("Setup Configuration");
    EnvSetup::new().run_bytes(&mut ProcessEnv, buffer)
}

/// Run setup and terminate the process if it failed.
///
/// A malformed buffer is logged and setup is skipped without side effects.
/// File I/O errors and collected failures exit with status 1, the latter
/// only after both files have been written.
pub fn setup_config(buffer: Option<&[u8]>) {
    match try_setup_config(buffer) {
        Ok(report) if report.is_success() => {}
        Ok(report) => {
            tracing::error!(
                failures = report.failures().len(),
                "Environment setup failed"
            );
            std::process::exit(SETUP_FAILURE_EXIT_CODE);
        }
        Err(e @ (SetupError::Parse(_) | SetupError::EmptyKey { .. })) => {
            tracing::error!(err = %e, "failed to load config");
        }
        Err(e) => {
            tracing::error!(err = %e, "Environment setup aborted");
            std::process::exit(SETUP_FAILURE_EXIT_CODE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::StaticIdentity;
    use crate::store::MemoryEnv;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn setup_in(dir: &TempDir) -> EnvSetup {
        EnvSetup::new()
            .with_dir(dir.path())
            .with_identity(StaticIdentity::new("tester"))
    }

    #[test]
    fn test_default_paths() {
        let setup = EnvSetup::new().with_dir("/srv/app");
        assert_eq!(setup.env_path(), PathBuf::from("/srv/app/.env"));
        assert_eq!(setup.example_path(), PathBuf::from("/srv/app/.env.example"));
    }

    #[test]
    fn test_parse_error_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let mut env = MemoryEnv::new();

        let result = setup_in(&dir).run_bytes(&mut env, Some(b"- key: [oops"));

        assert!(matches!(result, Err(SetupError::Parse(_))));
        assert!(env.is_empty());
        assert!(!dir.path().join(".env").exists());
        assert!(!dir.path().join(".env.example").exists());
    }

    #[test]
    fn test_absent_buffer_writes_header_only_files() {
        let dir = TempDir::new().unwrap();
        let mut env = MemoryEnv::new();

        let report = setup_in(&dir).run_bytes(&mut env, None).unwrap();

        assert!(report.is_success());
        assert_eq!(report.env_file, Regeneration::Created);
        let content = fs::read_to_string(dir.path().join(".env")).unwrap();
        assert!(content.ends_with("# Updated By tester\n\n"));
    }

    #[test]
    fn test_missing_required_still_writes_both_files() {
        let dir = TempDir::new().unwrap();
        let mut env = MemoryEnv::new();
        let descriptors = vec![ConfigDescriptor::new("API_TOKEN").required()];

        let report = setup_in(&dir).run(&mut env, &descriptors).unwrap();

        assert_eq!(report.exit_code(), SETUP_FAILURE_EXIT_CODE);
        assert_eq!(report.failures()[0].key(), "API_TOKEN");
        assert!(
            fs::read_to_string(dir.path().join(".env"))
                .unwrap()
                .contains("# REQUIRED")
        );
        assert!(dir.path().join(".env.example").exists());
    }

    #[test]
    #[serial]
    fn test_dotenv_values_take_effect_when_enabled() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), "API_TOKEN=from-file\n").unwrap();
        let descriptors = vec![ConfigDescriptor::new("API_TOKEN").required()];

        temp_env::with_var_unset("DOTENV_DISABLED", || {
            let mut loaded = MemoryEnv::new();
            let report = setup_in(&dir).run(&mut loaded, &descriptors).unwrap();
            assert!(report.is_success());
            assert_eq!(loaded.get("API_TOKEN").as_deref(), Some("from-file"));

            let mut skipped = MemoryEnv::new();
            let skipped_report = setup_in(&dir)
                .with_dotenv(false)
                .run(&mut skipped, &descriptors)
                .unwrap();
            assert!(!skipped_report.is_success());
            assert_eq!(skipped.get("API_TOKEN"), None);
        });
    }

    #[test]
    #[serial]
    fn test_dotenv_disabled_var_skips_loading() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), "API_TOKEN=from-file\n").unwrap();
        let descriptors = vec![ConfigDescriptor::new("API_TOKEN").required()];

        temp_env::with_var("DOTENV_DISABLED", Some("1"), || {
            let mut env = MemoryEnv::new();
            let report = setup_in(&dir).run(&mut env, &descriptors).unwrap();
            assert!(!report.is_success());
            assert_eq!(env.get("API_TOKEN"), None);
        });
    }
}
