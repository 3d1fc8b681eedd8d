//! Centralized constants for the envforge workspace.
//!
//! This module contains file names, layout widths and gate variables used
//! across the crate to avoid magic values in the rendering and setup code.

// =============================================================================
// Output Files
// =============================================================================

/// Name of the resolved environment file written next to the process.
pub const ENV_FILE_NAME: &str = ".env";

/// Name of the example template that carries only default values.
pub const EXAMPLE_FILE_NAME: &str = ".env.example";

/// Suffix appended to a target file name for the staging file of an atomic write.
pub const TEMP_FILE_SUFFIX: &str = ".tmp";

/// Separator between the header block and the body of a generated file.
pub const HEADER_SEPARATOR: &str = "\n\n";

// =============================================================================
// Line Layout
// =============================================================================

/// First column at which an inline annotation may start.
pub const BASE_COMMENT_COLUMN: usize = 40;

/// Column increment between comment levels and between padding steps.
pub const COMMENT_COLUMN_STEP: usize = 20;

/// Minimum gap (in columns) kept between a line's text and its next comment.
pub const MIN_COMMENT_GAP: usize = 2;

// =============================================================================
// Environment & Identity
// =============================================================================

/// Setting this variable to `1` or `true` skips `.env` loading during setup.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Placeholder written into the header when no operator name can be found.
pub const UNKNOWN_OPERATOR: &str = "unknown";

/// `strftime` layout of the `# Updated At` header line (RFC 850 style).
pub const HEADER_TIMESTAMP_FORMAT: &str = "%A, %d-%b-%y %H:%M:%S %Z";

// =============================================================================
// Size Codec
// =============================================================================

/// Recognized byte-size units, in multiplier order.
pub const SIZE_UNITS: [&str; 6] = ["b", "kb", "mb", "gb", "tb", "pb"];

/// Base factor for byte-size units.
pub const SIZE_UNIT_BASE: i64 = 1024;
