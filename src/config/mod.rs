//! Installer configuration: locations and the paths they resolve to.

mod location;
mod paths;

pub use location::Location;
pub use paths::Paths;
