//! Value resolution for config descriptors.
//!
//! Responsibilities:
//! - Resolve each descriptor's effective value (store value, else default).
//! - Write resolved values back into the store.
//! - Render the `.env` and `.env.example` lines and bucket them by group.
//! - Collect every missing-required and env-write failure in one pass.
//!
//! Does NOT handle:
//! - Loading `.env` into the store (see `dotenv.rs`).
//! - Writing files (see `regenerate.rs`).
//!
//! Invariants:
//! - Descriptors are processed in list order; resolution never stops early.
//! - A required descriptor with an empty effective value always yields
//!   `SetupFailure::MissingRequired` and a `# REQUIRED` annotation.
//! - The example line shows the default value but the same annotation as
//!   the live line.

use crate::descriptor::ConfigDescriptor;
use crate::error::SetupFailure;
use crate::render::{Annotation, RenderGroups, render_line};
use crate::store::EnvStore;

/// The outcome of resolving one descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub key: String,
    pub group_key: String,
    pub effective_value: String,
    pub rendered_line: String,
    pub rendered_example_line: String,
}

/// The outcome of resolving a descriptor list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub entries: Vec<ResolvedEntry>,
    /// Lines for `.env`.
    pub env_groups: RenderGroups,
    /// Lines for `.env.example`.
    pub example_groups: RenderGroups,
    pub failures: Vec<SetupFailure>,
}

impl Resolution {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// The effective value resolved for `key`, if the key was declared.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.effective_value.as_str())
    }
}

/// Resolve every descriptor against `store`, writing values back into it.
pub fn resolve<S: EnvStore + ?Sized>(store: &mut S, descriptors: &[ConfigDescriptor]) -> Resolution {
    let mut resolution = Resolution::default();

    for descriptor in descriptors {
        let entry = resolve_one(store, descriptor, &mut resolution.failures);
        resolution
            .env_groups
            .push(&entry.group_key, entry.rendered_line.clone());
        resolution
            .example_groups
            .push(&entry.group_key, entry.rendered_example_line.clone());
        resolution.entries.push(entry);
    }

    resolution
}

fn resolve_one<S: EnvStore + ?Sized>(
    store: &mut S,
    conf: &ConfigDescriptor,
    failures: &mut Vec<SetupFailure>,
) -> ResolvedEntry {
    let mut value = store.get(&conf.key).unwrap_or_default();

    if value.is_empty() {
        value = conf.default_value.clone();
        if conf.is_required && value.is_empty() {
            tracing::error!(
                description = %conf.description,
                "Environment variable '{}' is required.",
                conf.key
            );
            failures.push(SetupFailure::MissingRequired {
                key: conf.key.clone(),
                description: conf.description.clone(),
            });
        } else if !conf.is_required {
            if value.is_empty() {
                tracing::info!(
                    description = %conf.description,
                    "Environment variable '{}' is not set.",
                    conf.key
                );
            } else {
                tracing::info!(
                    description = %conf.description,
                    "Environment variable '{}' not provided, set default '{}'.",
                    conf.key,
                    conf.default_value
                );
            }
        }
    }

    if !value.is_empty() {
        match store.set(&conf.key, &value) {
            Ok(()) => tracing::info!(
                env_key = %conf.key,
                value = %value,
                description = %conf.description,
                "Success to set environment variable."
            ),
            Err(e) => {
                tracing::error!(
                    env_key = %conf.key,
                    value = %value,
                    error = %e,
                    "Failed to set environment variable."
                );
                failures.push(SetupFailure::EnvWrite {
                    key: conf.key.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    let annotation = Annotation::select(conf.is_required && value.is_empty(), &conf.default_value);
    let rendered_line = render_line(&conf.key, &value, annotation, &conf.description);
    let rendered_example_line =
        render_line(&conf.key, &conf.default_value, annotation, &conf.description);

    ResolvedEntry {
        key: conf.key.clone(),
        group_key: conf.group_key().to_string(),
        effective_value: value,
        rendered_line,
        rendered_example_line,
    }
}
