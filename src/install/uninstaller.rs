//! Skill removal executor.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::UninstallReport;
use crate::config::Location;

#[derive(Debug, Error)]
pub enum UninstallError {
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove directory {}: {source}", path.display())]
    RemoveDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Remove `target_root` and everything under it.
///
/// The whole root goes, including files that were not installed by us.
/// A missing root is reported with `removed: false` rather than an error.
pub fn uninstall_skills(
    location: Location,
    target_root: &Path,
) -> Result<UninstallReport, UninstallError> {
    if !target_root.exists() {
        log::debug!("nothing installed at {}", target_root.display());
        return Ok(UninstallReport {
            location,
            target: target_root.to_path_buf(),
            removed: false,
            count: 0,
        });
    }

    let count = count_skill_dirs(target_root)?;

    fs::remove_dir_all(target_root).map_err(|source| UninstallError::RemoveDir {
        path: target_root.to_path_buf(),
        source,
    })?;

    log::info!("removed {count} skill(s) from {}", target_root.display());

    Ok(UninstallReport {
        location,
        target: target_root.to_path_buf(),
        removed: true,
        count,
    })
}

fn count_skill_dirs(target_root: &Path) -> Result<usize, UninstallError> {
    let read_dir_err = |source: std::io::Error| UninstallError::ReadDir {
        path: target_root.to_path_buf(),
        source,
    };

    let mut count = 0;
    for entry in fs::read_dir(target_root).map_err(read_dir_err)? {
        if entry.map_err(read_dir_err)?.path().is_dir() {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn uninstall_missing_target_is_noop() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join(".skills/ddd");

        let report = uninstall_skills(Location::Local, &target).unwrap();

        assert!(!report.removed);
        assert_eq!(report.count, 0);
        assert!(!target.exists());
    }

    #[test]
    fn uninstall_counts_dirs_and_removes_root() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join(".skills/ddd");
        fs::create_dir_all(target.join("alpha")).unwrap();
        fs::create_dir_all(target.join("beta/nested")).unwrap();
        fs::write(target.join("notes.txt"), "loose file").unwrap();

        let report = uninstall_skills(Location::Global, &target).unwrap();

        assert!(report.removed);
        assert_eq!(report.count, 2);
        assert!(!target.exists());
        assert!(temp.path().join(".skills").exists());
    }

    #[test]
    fn uninstall_removes_unrelated_content_too() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("ddd");
        fs::create_dir_all(target.join("user-notes")).unwrap();
        fs::write(target.join("user-notes/todo.md"), "mine").unwrap();

        let report = uninstall_skills(Location::Local, &target).unwrap();

        assert_eq!(report.count, 1);
        assert!(!target.join("user-notes/todo.md").exists());
    }
}
