//! CLI subcommand definitions.

use clap::{Args, Subcommand};

use crate::config::Location;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install all DDD skills.
    Install(LocationArgs),

    /// Uninstall all DDD skills.
    Uninstall(LocationArgs),
}

/// Location flags. Prompts when neither is given.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(multiple = false)]
pub struct LocationArgs {
    /// Use the global location (~/.skills/ddd/).
    #[arg(short, long)]
    global: bool,

    /// Use the project-local location (./.skills/ddd/).
    #[arg(short, long)]
    local: bool,
}

impl LocationArgs {
    pub fn location(&self) -> Option<Location> {
        if self.global {
            Some(Location::Global)
        } else if self.local {
            Some(Location::Local)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    fn parse(args: &[&str]) -> Result<Commands, clap::Error> {
        TestCli::try_parse_from(std::iter::once("ddd-skill").chain(args.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn install_flags_map_to_locations() {
        let Commands::Install(args) = parse(&["install", "-g"]).unwrap() else {
            panic!("expected install");
        };
        assert_eq!(args.location(), Some(Location::Global));

        let Commands::Install(args) = parse(&["install", "--local"]).unwrap() else {
            panic!("expected install");
        };
        assert_eq!(args.location(), Some(Location::Local));
    }

    #[test]
    fn no_flag_means_prompt() {
        let Commands::Uninstall(args) = parse(&["uninstall"]).unwrap() else {
            panic!("expected uninstall");
        };
        assert_eq!(args.location(), None);
    }

    #[test]
    fn conflicting_flags_rejected() {
        let err = parse(&["install", "-g", "-l"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let err = parse(&["uninstall", "--global", "--local"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
