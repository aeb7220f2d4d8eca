//! CLI module for ddd-skill.

mod commands;
pub mod install;
pub mod output;
pub mod prompt;
pub mod uninstall;

pub use commands::Commands;
