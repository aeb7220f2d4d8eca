//! Skill discovery from the bundled source directory.
//!
//! A bundle is any immediate subdirectory of the source root that holds a
//! `SKILL.md` descriptor.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::SkillBundle;

/// Descriptor file marking a directory as a skill bundle.
pub const DESCRIPTOR_FILE: &str = "SKILL.md";

const DESCRIPTION_PREFIX: &str = "description:";

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Failed to read skills directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read descriptor {}: {source}", path.display())]
    ReadDescriptor {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List the bundles under `source_root`, sorted by name.
///
/// A missing source root yields an empty list.
pub fn discover_skills(source_root: &Path) -> Result<Vec<SkillBundle>, DiscoveryError> {
    if !source_root.exists() {
        log::debug!("source root {} does not exist", source_root.display());
        return Ok(Vec::new());
    }

    let read_dir_err = |source: std::io::Error| DiscoveryError::ReadDir {
        path: source_root.to_path_buf(),
        source,
    };

    let mut skills = Vec::new();
    for entry in fs::read_dir(source_root).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        let descriptor = path.join(DESCRIPTOR_FILE);
        if !path.is_dir() || !descriptor.exists() {
            continue;
        }

        let Some(dir_name) = path.file_name().map(|n| n.to_os_string()) else {
            continue;
        };
        let name = dir_name.to_string_lossy().into_owned();

        let description = read_description(&descriptor).map_err(|source| {
            DiscoveryError::ReadDescriptor {
                path: descriptor.clone(),
                source,
            }
        })?;

        log::debug!("discovered skill {name}");
        skills.push(SkillBundle {
            name,
            dir_name,
            description,
            path,
        });
    }

    skills.sort_by(|a, b| a.dir_name.cmp(&b.dir_name));
    Ok(skills)
}

/// Read a SKILL.md file and extract its description.
pub fn read_description(descriptor: &Path) -> std::io::Result<Option<String>> {
    let content = fs::read_to_string(descriptor)?;
    Ok(parse_description(&content))
}

/// Value of the first line starting with `description:`, trimmed.
///
/// Returns `None` when no such line exists or its value is blank.
pub fn parse_description(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix(DESCRIPTION_PREFIX))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}
