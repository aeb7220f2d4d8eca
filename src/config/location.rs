//! Install location.

use std::fmt;

use serde::Serialize;

/// Where skills are installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// `~/.skills/ddd/`, available in all projects.
    Global,
    /// `./.skills/ddd/`, only available in the current project.
    Local,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Local => "local",
        }
    }

    /// Human-readable destination used in progress messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Global => "global scope",
            Self::Local => "the current project",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
