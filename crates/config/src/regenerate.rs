//! Conditional regeneration of env files.
//!
//! Responsibilities:
//! - Build the `# Updated At` / `# Updated By` header.
//! - Compare freshly rendered content with the file on disk, ignoring the
//!   header, and rewrite the file only when the body changed.
//! - Write files atomically (temp file + rename).
//!
//! Does NOT handle:
//! - Rendering individual lines (see `render.rs`).
//! - Deciding the process exit code (see `setup.rs`).
//!
//! Invariants:
//! - The header always ends with a blank line, so the first `\n\n` of a
//!   generated file separates header from body.
//! - An unchanged body leaves the file untouched, old header included.
//! - A changed body replaces the whole file, header included.
//! - The target is never observed half-written.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::constants::{HEADER_SEPARATOR, HEADER_TIMESTAMP_FORMAT, TEMP_FILE_SUFFIX};
use crate::error::SetupError;
use crate::identity::OperatorIdentity;
use crate::render::RenderGroups;

/// The header block of a generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    updated_at: String,
    updated_by: String,
}

impl Header {
    pub fn new(updated_at: impl Into<String>, updated_by: impl Into<String>) -> Self {
        Self {
            updated_at: single_line(updated_at.into()),
            updated_by: single_line(updated_by.into()),
        }
    }

    /// Header stamped with the current local time.
    pub fn now(identity: &dyn OperatorIdentity) -> Self {
        let updated_at = chrono::Local::now()
            .format(HEADER_TIMESTAMP_FORMAT)
            .to_string();
        Self::new(updated_at, identity.operator())
    }

    pub fn updated_by(&self) -> &str {
        &self.updated_by
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "# Updated At {} \n# Updated By {}\n\n",
            self.updated_at, self.updated_by
        )
    }
}

fn single_line(text: String) -> String {
    let trimmed = text.trim();
    if trimmed.contains('\n') || trimmed.contains('\r') {
        trimmed.replace(['\n', '\r'], " ")
    } else if trimmed.len() == text.len() {
        text
    } else {
        trimmed.to_string()
    }
}

/// What `regenerate` did to the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regeneration {
    /// The file did not exist and was written.
    Created,
    /// The body matched; the file was left as is.
    Unchanged,
    /// The body differed; the file was rewritten with a fresh header.
    Replaced,
}

impl Regeneration {
    pub fn wrote_file(self) -> bool {
        !matches!(self, Regeneration::Unchanged)
    }
}

/// The part of a file after the first blank line.
///
/// Returns `None` when the content has no header separator.
pub fn file_body(content: &[u8]) -> Option<&[u8]> {
    let separator = HEADER_SEPARATOR.as_bytes();
    content
        .windows(separator.len())
        .position(|window| window == separator)
        .map(|index| &content[index + separator.len()..])
}

/// Full file content: header followed by the serialized groups.
pub fn file_content(header: &Header, groups: &RenderGroups) -> String {
    format!("{}{}", header, groups.body())
}

/// Write `groups` to `path` unless the file already holds the same body.
pub fn regenerate(
    path: &Path,
    groups: &RenderGroups,
    header: &Header,
) -> Result<Regeneration, SetupError> {
    let content = file_content(header, groups);

    let existing = match fs::read(path) {
        Ok(existing) => existing,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            write_atomically(path, content.as_bytes())?;
            tracing::info!(path = %path.display(), "Created file");
            return Ok(Regeneration::Created);
        }
        Err(source) => {
            tracing::error!(path = %path.display(), error = %source, "Failed to read file");
            return Err(SetupError::FileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if file_body(&existing).is_some() && file_body(&existing) == file_body(content.as_bytes()) {
        tracing::debug!(path = %path.display(), "File is up to date");
        return Ok(Regeneration::Unchanged);
    }

    write_atomically(path, content.as_bytes())?;
    tracing::info!(path = %path.display(), "Recreate file");
    Ok(Regeneration::Replaced)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(TEMP_FILE_SUFFIX);
    path.with_file_name(name)
}

/// Writes to a temporary sibling first, then renames it over `path`.
fn write_atomically(path: &Path, content: &[u8]) -> Result<(), SetupError> {
    let temp_path = temp_path(path);

    if let Err(source) = fs::write(&temp_path, content) {
        tracing::error!(path = %temp_path.display(), error = %source, "Failed to write file");
        return Err(SetupError::FileWrite {
            path: temp_path,
            source,
        });
    }

    if let Err(source) = fs::rename(&temp_path, path) {
        tracing::error!(path = %path.display(), error = %source, "Failed to replace file");
        let _ = fs::remove_file(&temp_path);
        return Err(SetupError::FileReplace {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}
