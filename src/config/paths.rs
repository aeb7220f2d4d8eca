//! Source and target roots, resolved once at startup.

use std::path::{Path, PathBuf};

use super::Location;
use crate::error::{Error, Result};

const SKILLS_DIR: &str = ".skills";
const SOURCE_DIR: &str = "skills-source";
const BUNDLE_SET: &str = "ddd";

/// Every directory the installer reads from or writes to.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Bundles shipped alongside the executable.
    pub source_root: PathBuf,
    /// `~/.skills/ddd`, or `None` when no home directory is known.
    pub global_root: Option<PathBuf>,
    /// `<cwd>/.skills/ddd`.
    pub local_root: PathBuf,
}

impl Paths {
    /// Resolve paths from the running executable, home directory and cwd.
    pub fn from_env() -> Result<Self> {
        let source_root = Self::source_under(&Self::install_dir()?);
        let global_root = dirs::home_dir().map(|home| Self::target_under(&home));
        let local_root = Self::target_under(&std::env::current_dir()?);

        log::debug!(
            "source root {}, local root {}",
            source_root.display(),
            local_root.display()
        );

        Ok(Self {
            source_root,
            global_root,
            local_root,
        })
    }

    /// Target root for `location`.
    pub fn target_root(&self, location: Location) -> Result<&Path> {
        match location {
            Location::Global => self.global_root.as_deref().ok_or(Error::HomeDirNotFound),
            Location::Local => Ok(&self.local_root),
        }
    }

    /// `<install_dir>/skills-source/ddd`
    pub fn source_under(install_dir: &Path) -> PathBuf {
        install_dir.join(SOURCE_DIR).join(BUNDLE_SET)
    }

    /// `<base>/.skills/ddd`
    pub fn target_under(base: &Path) -> PathBuf {
        base.join(SKILLS_DIR).join(BUNDLE_SET)
    }

    fn install_dir() -> Result<PathBuf> {
        let exe = std::env::current_exe()?;
        Ok(exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(global: Option<&str>) -> Paths {
        Paths {
            source_root: Paths::source_under(Path::new("/opt/ddd-skill")),
            global_root: global.map(|g| Paths::target_under(Path::new(g))),
            local_root: Paths::target_under(Path::new("/work/project")),
        }
    }

    #[test]
    fn target_under_appends_skill_dirs() {
        assert_eq!(
            Paths::target_under(Path::new("/home/dev")),
            PathBuf::from("/home/dev/.skills/ddd")
        );
    }

    #[test]
    fn source_under_sits_next_to_executable() {
        assert_eq!(
            Paths::source_under(Path::new("/opt/ddd-skill/bin")),
            PathBuf::from("/opt/ddd-skill/bin/skills-source/ddd")
        );
    }

    #[test]
    fn from_env_derives_source_from_current_exe() {
        let paths = Paths::from_env().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(paths.source_root, Paths::source_under(exe.parent().unwrap()));
        assert_eq!(
            paths.local_root,
            Paths::target_under(&std::env::current_dir().unwrap())
        );
    }

    #[test]
    fn target_root_resolves_each_location() {
        let paths = paths(Some("/home/dev"));
        assert_eq!(
            paths.target_root(Location::Global).unwrap(),
            Path::new("/home/dev/.skills/ddd")
        );
        assert_eq!(
            paths.target_root(Location::Local).unwrap(),
            Path::new("/work/project/.skills/ddd")
        );
    }

    #[test]
    fn global_without_home_is_an_error() {
        let paths = paths(None);
        assert!(matches!(
            paths.target_root(Location::Global),
            Err(Error::HomeDirNotFound)
        ));
        assert!(paths.target_root(Location::Local).is_ok());
    }
}
