//! CLI exit codes for scripting and automation.
//!
//! Invariants:
//! - `0` means every declared variable resolved and both files were written.
//! - `1` covers missing required variables, rejected environment writes,
//!   unreadable or malformed input, and file I/O failures.

use envforge_config::SetupReport;

/// Structured exit codes for envforge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - setup failed or the command could not run.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&SetupReport> for ExitCode {
    fn from(report: &SetupReport) -> Self {
        if report.is_success() {
            ExitCode::Success
        } else {
            ExitCode::GeneralError
        }
    }
}
