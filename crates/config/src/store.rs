//! Environment variable stores.
//!
//! Responsibilities:
//! - Abstract the key/value environment that setup reads from and writes to.
//! - Provide the real process environment (`ProcessEnv`) and an in-memory
//!   map (`MemoryEnv`) for tests and embedding.
//!
//! Does NOT handle:
//! - Typed decoding of values (see `accessors.rs`).
//! - `.env` file parsing (see `dotenv.rs`).
//!
//! Invariants:
//! - Writes that `std::env::set_var` would panic on are rejected with an
//!   `EnvWriteError` by every store, so both stores fail the same way.

use std::collections::BTreeMap;

use crate::error::EnvWriteError;

/// A mutable key/value environment.
pub trait EnvStore {
    /// Returns the value of `key`, or `None` when it is unset or not valid unicode.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvWriteError>;
}

fn validate(key: &str, value: &str) -> Result<(), EnvWriteError> {
    if key.is_empty() {
        return Err(EnvWriteError::EmptyKey);
    }
    if key.contains('=') || key.contains('\0') {
        return Err(EnvWriteError::InvalidKey);
    }
    if value.contains('\0') {
        return Err(EnvWriteError::InvalidValue);
    }
    Ok(())
}

/// The environment of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        if key.is_empty() || key.contains('=') || key.contains('\0') {
            return None;
        }
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvWriteError> {
        validate(key, value)?;
        // SAFETY: setup runs once at startup, before other threads read the
        // environment.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }
}

/// An in-memory environment backed by a sorted map.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over all variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvStore for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvWriteError> {
        validate(key, value)?;
        self.vars.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
