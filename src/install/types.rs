//! Types for installation operations.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Location;

/// A skill bundle found in the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBundle {
    /// Directory name for display, lossily converted to UTF-8
    pub name: String,
    /// Directory name as found on disk, unique within the source root
    pub dir_name: OsString,
    /// Value of the `description:` line in SKILL.md
    pub description: Option<String>,
    /// Bundle directory inside the source root
    pub path: PathBuf,
}

/// A skill as reported after installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledSkill {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&SkillBundle> for InstalledSkill {
    fn from(bundle: &SkillBundle) -> Self {
        Self {
            name: bundle.name.clone(),
            description: bundle.description.clone(),
        }
    }
}

/// Progress notifications emitted while installing.
#[derive(Debug)]
pub enum InstallEvent<'a> {
    /// Copying is about to begin
    Started { target: &'a Path, total: usize },
    /// The target root did not exist and was created
    CreatedTarget(&'a Path),
    /// A bundle finished copying (1-based `index` of `total`)
    Installed {
        index: usize,
        total: usize,
        skill: &'a InstalledSkill,
    },
}

/// Result of installation operation
#[derive(Debug, Serialize)]
pub struct InstallReport {
    pub location: Location,
    pub target: PathBuf,
    /// Target root is the source root; nothing was copied
    pub already_present: bool,
    pub installed: Vec<InstalledSkill>,
}

/// Result of uninstallation operation
#[derive(Debug, Serialize)]
pub struct UninstallReport {
    pub location: Location,
    pub target: PathBuf,
    /// False when nothing was installed at the target
    pub removed: bool,
    /// Bundle directories present before removal
    pub count: usize,
}
