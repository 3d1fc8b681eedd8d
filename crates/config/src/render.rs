//! Line rendering for generated env files.
//!
//! Responsibilities:
//! - Format one descriptor as a `KEY="value"` line with its annotation and
//!   description comments.
//! - Compute the stepped comment padding.
//! - Collect rendered lines into prefix groups and serialize the file body.
//!
//! Does NOT handle:
//! - Choosing the displayed value (see `resolve.rs`).
//! - Headers or writing files (see `regenerate.rs`).
//!
//! Invariants:
//! - Every rendered line ends with exactly one `\n`.
//! - Groups serialize in ascending byte order of their key; lines within a
//!   group keep insertion order; each group is followed by a blank line.

use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{BASE_COMMENT_COLUMN, COMMENT_COLUMN_STEP, MIN_COMMENT_GAP};

/// Comment level of the `REQUIRED` / `DEFAULT` annotation.
const ANNOTATION_LEVEL: usize = 0;

/// Comment level of the description.
const DESCRIPTION_LEVEL: usize = 1;

/// The inline annotation placed after the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation<'a> {
    /// Required and no value could be resolved.
    Required,
    /// A non-empty default exists.
    Default(&'a str),
    None,
}

impl<'a> Annotation<'a> {
    /// Pick the annotation for a descriptor.
    ///
    /// `unresolved_required` wins over the default.
    pub fn select(unresolved_required: bool, default_value: &'a str) -> Self {
        if unresolved_required {
            Annotation::Required
        } else if !default_value.is_empty() {
            Annotation::Default(default_value)
        } else {
            Annotation::None
        }
    }
}

impl fmt::Display for Annotation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Required => f.write_str("# REQUIRED"),
            Annotation::Default(value) => write!(f, "# DEFAULT:\"{}\"", value),
            Annotation::None => Ok(()),
        }
    }
}

/// Number of spaces to append to a line of `len` bytes so that a comment
/// of the given level starts on the next column stop.
///
/// Column stops start at 40 and advance by 20. A level-1 comment never
/// starts before column 60. A stop is only taken when it leaves at least
/// two columns of gap after the text.
pub fn column_padding(len: usize, level: usize) -> usize {
    let mut base = BASE_COMMENT_COLUMN;
    let mut space = BASE_COMMENT_COLUMN;
    loop {
        base += level * COMMENT_COLUMN_STEP;
        if len + MIN_COMMENT_GAP < base {
            return base - len;
        } else if len + MIN_COMMENT_GAP < space + COMMENT_COLUMN_STEP {
            return space + COMMENT_COLUMN_STEP - len;
        }
        space += COMMENT_COLUMN_STEP;
    }
}

fn push_comment(line: &mut String, level: usize, comment: &dyn fmt::Display) {
    let padding = column_padding(line.len(), level);
    line.extend(std::iter::repeat_n(' ', padding));
    line.push_str(&comment.to_string());
}

/// Render one env file line.
///
/// The same function serves `.env` and `.env.example`; only `value`
/// differs between the two.
pub fn render_line(key: &str, value: &str, annotation: Annotation<'_>, description: &str) -> String {
    let mut line = format!("{}=\"{}\"", key, value);

    if annotation != Annotation::None {
        push_comment(&mut line, ANNOTATION_LEVEL, &annotation);
    }
    if !description.is_empty() {
        push_comment(&mut line, DESCRIPTION_LEVEL, &format!("# {}", description));
    }

    line.push('\n');
    line
}

/// Rendered lines bucketed by key prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderGroups {
    groups: BTreeMap<String, Vec<String>>,
}

impl RenderGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rendered line to a group, creating the group if needed.
    pub fn push(&mut self, group_key: &str, line: String) {
        self.groups.entry(group_key.to_string()).or_default().push(line);
    }

    /// Group keys in serialization order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn lines(&self, group_key: &str) -> &[String] {
        self.groups.get(group_key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Serialize all groups: each group's lines, then a blank line.
    pub fn body(&self) -> String {
        let mut body = String::new();
        for lines in self.groups.values() {
            for line in lines {
                body.push_str(line);
            }
            body.push('\n');
        }
        body
    }
}
