//! Typed reads of environment values.
//!
//! Responsibilities:
//! - Decode environment strings as integers, strings, booleans, lists,
//!   durations and byte sizes.
//! - Provide the same getters over any `EnvStore` (`TypedEnv`) and as free
//!   functions over the process environment.
//!
//! Invariants:
//! - Getters never fail or panic. Unset or malformed values yield the
//!   zero value of the type: `0`, `""`, `false`, `[]`, `Duration::ZERO`.

use std::time::Duration;

use crate::duration::parse_duration;
use crate::size::parse_size;
use crate::store::{EnvStore, ProcessEnv};

/// Typed getters for any environment store.
pub trait TypedEnv: EnvStore {
    fn get_int(&self, key: &str) -> i32 {
        self.get(key).and_then(|v| v.parse().ok()).unwrap_or(0)
    }

    fn get_int64(&self, key: &str) -> i64 {
        self.get(key).and_then(|v| v.parse().ok()).unwrap_or(0)
    }

    fn get_string(&self, key: &str) -> String {
        self.get(key).unwrap_or_default()
    }

    /// Only the exact string `true` is true.
    fn get_bool(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| v == "true")
    }

    /// Comma-separated list; items are not trimmed.
    fn get_list_string(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(v) if !v.is_empty() => v.split(',').map(str::to_string).collect(),
            _ => Vec::new(),
        }
    }

    fn get_duration(&self, key: &str) -> Duration {
        self.get(key)
            .and_then(|v| parse_duration(&v))
            .unwrap_or(Duration::ZERO)
    }

    /// Byte size, see [`parse_size`].
    fn get_size(&self, key: &str) -> i64 {
        self.get(key).map(|v| parse_size(&v)).unwrap_or(0)
    }
}

impl<S: EnvStore + ?Sized> TypedEnv for S {}

/// Set a process environment variable.
///
/// Invalid keys or values are logged and ignored.
pub fn set(key: &str, value: &str) {
    match ProcessEnv.set(key, value) {
        Ok(()) => tracing::info!("Setting '{}' to '{}'", key, value),
        Err(e) => tracing::warn!(env_key = %key, error = %e, "Failed to set environment variable"),
    }
}

pub fn get_int(key: &str) -> i32 {
    ProcessEnv.get_int(key)
}

pub fn get_int64(key: &str) -> i64 {
    ProcessEnv.get_int64(key)
}

pub fn get_string(key: &str) -> String {
    ProcessEnv.get_string(key)
}

pub fn get_bool(key: &str) -> bool {
    ProcessEnv.get_bool(key)
}

pub fn get_list_string(key: &str) -> Vec<String> {
    ProcessEnv.get_list_string(key)
}

pub fn get_duration(key: &str) -> Duration {
    ProcessEnv.get_duration(key)
}

pub fn get_size(key: &str) -> i64 {
    ProcessEnv.get_size(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryEnv;
    use serial_test::serial;

    fn env() -> MemoryEnv {
        [
            ("PORT", "8080"),
            ("BIG", "9000000000"),
            ("NEG", "-12"),
            ("NAME", "envforge"),
            ("FLAG_ON", "true"),
            ("FLAG_CAPS", "True"),
            ("HOSTS", "a,b,,c"),
            ("EMPTY", ""),
            ("TIMEOUT", "1m30s"),
            ("BUFFER", "1kb"),
            ("JUNK", "nope"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_integers() {
        let env = env();
        assert_eq!(env.get_int("PORT"), 8080);
        assert_eq!(env.get_int("NEG"), -12);
        assert_eq!(env.get_int("BIG"), 0, "i32 overflow falls back to zero");
        assert_eq!(env.get_int64("BIG"), 9_000_000_000);
        assert_eq!(env.get_int("JUNK"), 0);
        assert_eq!(env.get_int64("MISSING"), 0);
    }

    #[test]
    fn test_strings() {
        let env = env();
        assert_eq!(env.get_string("NAME"), "envforge");
        assert_eq!(env.get_string("MISSING"), "");
    }

    #[test]
    fn test_bools_are_exact() {
        let env = env();
        assert!(env.get_bool("FLAG_ON"));
        assert!(!env.get_bool("FLAG_CAPS"));
        assert!(!env.get_bool("MISSING"));
    }

    #[test]
    fn test_lists() {
        let env = env();
        assert_eq!(env.get_list_string("HOSTS"), vec!["a", "b", "", "c"]);
        assert!(env.get_list_string("EMPTY").is_empty());
        assert!(env.get_list_string("MISSING").is_empty());
    }

    #[test]
    fn test_durations_and_sizes() {
        let env = env();
        assert_eq!(env.get_duration("TIMEOUT"), Duration::from_secs(90));
        assert_eq!(env.get_duration("JUNK"), Duration::ZERO);
        assert_eq!(env.get_size("BUFFER"), 2048);
        assert_eq!(env.get_size("JUNK"), 0);
        assert_eq!(env.get_size("MISSING"), 0);
    }

    #[test]
    #[serial]
    fn test_process_env_getters() {
        temp_env::with_vars(
            [
                ("_ENVFORGE_TEST_BOOL", Some("true")),
                ("_ENVFORGE_TEST_SIZE", Some("2gb")),
                ("_ENVFORGE_TEST_UNSET", None),
            ],
            || {
                assert!(get_bool("_ENVFORGE_TEST_BOOL"));
                assert_eq!(get_size("_ENVFORGE_TEST_SIZE"), 8192);
                assert!(!get_bool("_ENVFORGE_TEST_UNSET"));
                assert_eq!(get_string("_ENVFORGE_TEST_UNSET"), "");
            },
        );
    }

    #[test]
    #[serial]
    fn test_set_writes_process_env() {
        temp_env::with_var_unset("_ENVFORGE_TEST_SET", || {
            set("_ENVFORGE_TEST_SET", "42");
            assert_eq!(get_int("_ENVFORGE_TEST_SET"), 42);
            assert_eq!(get_int64("_ENVFORGE_TEST_SET"), 42);
        });
    }
}
