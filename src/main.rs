mod cli;
mod config;
mod error;
mod install;

use clap::{CommandFactory, Parser};
use cli::Commands;
use cli::output::OutputFormat;
use config::Paths;

#[derive(Parser)]
#[command(name = "ddd-skill")]
#[command(version, about = "Install or uninstall DDD skills")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Usage errors exit 1, --help and --version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            err.print()?;
            std::process::exit(code);
        }
    };

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        std::process::exit(1);
    };

    let paths = Paths::from_env()?;

    match command {
        Commands::Install(args) => cli::install::run(&paths, args.location(), cli.format)?,
        Commands::Uninstall(args) => cli::uninstall::run(&paths, args.location(), cli.format)?,
    }

    Ok(())
}
