//! Error types for environment setup.
//!
//! Responsibilities:
//! - Define fatal errors that abort a setup run (`SetupError`).
//! - Define non-fatal failures that are collected and reported after both
//!   output files have been regenerated (`SetupFailure`).
//! - Define the error returned by environment store writes (`EnvWriteError`).
//!
//! Invariants:
//! - Every variant carries the key or path it concerns.
//! - Dotenv errors never carry raw `.env` line contents.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a setup run.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Failed to parse config descriptors: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Config descriptor at index {index} has an empty key")]
    EmptyKey { index: usize },

    #[error("Failed to read {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to replace {path}")]
    FileReplace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Problems found while resolving descriptors.
///
/// These do not stop resolution; they are collected so that a single run
/// reports every problem, and they force a failing exit code once both
/// files have been written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupFailure {
    #[error("Environment variable '{key}' is required")]
    MissingRequired { key: String, description: String },

    #[error("Failed to set environment variable '{key}': {message}")]
    EnvWrite { key: String, message: String },
}

impl SetupFailure {
    /// The environment variable this failure concerns.
    pub fn key(&self) -> &str {
        match self {
            SetupFailure::MissingRequired { key, .. } | SetupFailure::EnvWrite { key, .. } => key,
        }
    }
}

/// Rejected write into an environment store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvWriteError {
    #[error("key is empty")]
    EmptyKey,

    #[error("key contains '=' or a NUL byte")]
    InvalidKey,

    #[error("value contains a NUL byte")]
    InvalidValue,
}

/// Failure to load a `.env` file.
///
/// SAFETY: variants only carry positions and error kinds, never the
/// offending line, so secrets in `.env` cannot leak through logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DotenvError {
    #[error("Failed to parse .env file at position {error_index}")]
    Parse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    Io { kind: std::io::ErrorKind },

    #[error("Failed to load .env file")]
    Unknown,
}

impl From<dotenvy::Error> for DotenvError {
    fn from(error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, error_index) => DotenvError::Parse { error_index },
            dotenvy::Error::Io(io_err) => DotenvError::Io {
                kind: io_err.kind(),
            },
            _ => DotenvError::Unknown,
        }
    }
}
