//! Skill installation executor.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use super::discovery::{DESCRIPTOR_FILE, read_description};
use super::types::{InstallEvent, InstallReport, InstalledSkill, SkillBundle};
use crate::config::Location;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove existing skill {}: {source}", path.display())]
    RemoveExisting {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read descriptor {}: {source}", path.display())]
    ReadDescriptor {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Copy every bundle from `source_root` into `target_root`.
///
/// Bundles already present in the target are removed first, so repeated
/// installs replace rather than merge. When both roots resolve to the same
/// directory nothing is touched and all bundles are reported as present.
///
/// Stops at the first filesystem error; bundles installed before it stay.
pub fn install_skills<F>(
    bundles: &[SkillBundle],
    location: Location,
    source_root: &Path,
    target_root: &Path,
    mut on_event: F,
) -> Result<InstallReport, InstallError>
where
    F: FnMut(InstallEvent<'_>),
{
    if same_directory(source_root, target_root) {
        log::info!(
            "target {} is the source directory, nothing to copy",
            target_root.display()
        );
        return Ok(InstallReport {
            location,
            target: target_root.to_path_buf(),
            already_present: true,
            installed: bundles.iter().map(InstalledSkill::from).collect(),
        });
    }

    let total = bundles.len();
    on_event(InstallEvent::Started {
        target: target_root,
        total,
    });

    if !target_root.exists() {
        create_dir(target_root)?;
        on_event(InstallEvent::CreatedTarget(target_root));
    }

    let mut installed = Vec::with_capacity(total);

    for (idx, bundle) in bundles.iter().enumerate() {
        let skill = install_bundle(bundle, target_root)?;
        on_event(InstallEvent::Installed {
            index: idx + 1,
            total,
            skill: &skill,
        });
        installed.push(skill);
    }

    Ok(InstallReport {
        location,
        target: target_root.to_path_buf(),
        already_present: false,
        installed,
    })
}

fn install_bundle(
    bundle: &SkillBundle,
    target_root: &Path,
) -> Result<InstalledSkill, InstallError> {
    let dest = target_root.join(&bundle.dir_name);

    if dest.exists() {
        log::debug!("replacing existing skill at {}", dest.display());
        fs::remove_dir_all(&dest).map_err(|source| InstallError::RemoveExisting {
            path: dest.clone(),
            source,
        })?;
    }

    copy_dir_all(&bundle.path, &dest)?;

    let descriptor = dest.join(DESCRIPTOR_FILE);
    let description =
        read_description(&descriptor).map_err(|source| InstallError::ReadDescriptor {
            path: descriptor,
            source,
        })?;

    log::info!("installed {} to {}", bundle.name, dest.display());

    Ok(InstalledSkill {
        name: bundle.name.clone(),
        description,
    })
}

/// Recursively copy `from` to `to`, following symlinks.
fn copy_dir_all(from: &Path, to: &Path) -> Result<(), InstallError> {
    for entry in WalkDir::new(from).follow_links(true) {
        let entry = entry.map_err(|source| InstallError::Walk {
            path: from.to_path_buf(),
            source,
        })?;
        let Ok(relative) = entry.path().strip_prefix(from) else {
            continue;
        };
        let dest = to.join(relative);

        if entry.file_type().is_dir() {
            create_dir(&dest)?;
        } else {
            fs::copy(entry.path(), &dest).map_err(|source| InstallError::Copy {
                from: entry.path().to_path_buf(),
                to: dest.clone(),
                source,
            })?;
        }
    }
    Ok(())
}

fn create_dir(path: &Path) -> Result<(), InstallError> {
    fs::create_dir_all(path).map_err(|source| InstallError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn same_directory(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
