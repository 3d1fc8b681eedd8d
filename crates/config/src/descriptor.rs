//! Config descriptor parsing.
//!
//! Responsibilities:
//! - Define `ConfigDescriptor`, the declaration of one expected variable.
//! - Parse a YAML buffer into an ordered list of descriptors.
//!
//! Invariants:
//! - Descriptor order is the order of the YAML sequence.
//! - An absent or blank buffer yields an empty list, never an error.
//! - Every returned descriptor has a non-empty key.

use serde::Deserialize;

use crate::error::SetupError;

/// One expected environment variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigDescriptor {
    pub key: String,
    #[serde(rename = "default", default)]
    pub default_value: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub description: String,
}

impl ConfigDescriptor {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Prefix of the key up to the first underscore.
    ///
    /// `DATABASE_HOST` groups under `DATABASE`; a key without an underscore
    /// groups under itself.
    pub fn group_key(&self) -> &str {
        self.key.split('_').next().unwrap_or(&self.key)
    }
}

/// Parse a YAML sequence of descriptors.
///
/// `None` means no configuration was supplied and yields an empty list.
pub fn parse_descriptors(buffer: Option<&[u8]>) -> Result<Vec<ConfigDescriptor>, SetupError> {
    let Some(buffer) = buffer else {
        tracing::info!("no config file provided");
        return Ok(Vec::new());
    };

    if buffer.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let descriptors: Vec<ConfigDescriptor> =
        serde_yaml::from_slice(buffer).inspect_err(|e| {
            tracing::error!(error = %e, "failed to decode config");
        })?;

    if let Some(index) = descriptors.iter().position(|d| d.key.is_empty()) {
        tracing::error!(index, "config descriptor has an empty key");
        return Err(SetupError::EmptyKey { index });
    }

    Ok(descriptors)
}
