//! Skill discovery, installation and removal.

pub mod discovery;
pub mod installer;
mod types;
pub mod uninstaller;

pub use discovery::{DiscoveryError, discover_skills};
pub use installer::{InstallError, install_skills};
pub use types::*;
pub use uninstaller::{UninstallError, uninstall_skills};
