//! Error types for the ddd-skill CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using ddd-skill's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ddd-skill.
#[derive(Error, Debug)]
pub enum Error {
    /// Source root holds no bundle with a SKILL.md.
    #[error("no skills found in the project\nexpected location: {}", path.display())]
    NoSkillsFound { path: PathBuf },

    /// Home directory could not be determined for the global location.
    #[error("could not determine home directory")]
    HomeDirNotFound,

    /// Input ended before a valid location was chosen.
    #[error("no location selected")]
    NoLocationSelected,

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
