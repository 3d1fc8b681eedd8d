//! Operator identity for generated file headers.
//!
//! The default source tries, in order, the git-configured user name, the
//! host name reported by the OS, and finally the literal `unknown`.

use std::process::Command;

use crate::constants::UNKNOWN_OPERATOR;

/// Supplies the display name written into `# Updated By`.
pub trait OperatorIdentity {
    fn operator(&self) -> String;
}

/// Looks the operator up from the host system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentity;

impl SystemIdentity {
    fn git_user_name() -> Option<String> {
        command_output("git", &["config", "user.name"])
    }

    fn host_name() -> Option<String> {
        hostname::get()
            .ok()
            .and_then(|name| name.into_string().ok())
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
    }
}

impl OperatorIdentity for SystemIdentity {
    fn operator(&self) -> String {
        Self::git_user_name()
            .or_else(Self::host_name)
            .unwrap_or_else(|| UNKNOWN_OPERATOR.to_string())
    }
}

/// A fixed operator name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticIdentity(pub String);

impl StaticIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl OperatorIdentity for StaticIdentity {
    fn operator(&self) -> String {
        self.0.clone()
    }
}

/// Run a command and return its trimmed stdout when it succeeds with output.
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}
