//! CLI install command implementation.

use color_eyre::eyre::Result;
use colored::Colorize;

use crate::cli::output::{OutputFormat, output, wrap_description};
use crate::cli::prompt::resolve_location;
use crate::config::{Location, Paths};
use crate::error::Error;
use crate::install::{InstallEvent, InstallReport, discover_skills, install_skills};

const RULE_WIDTH: usize = 70;

pub fn run(paths: &Paths, location: Option<Location>, format: OutputFormat) -> Result<()> {
    let location = resolve_location(location)?;

    let bundles = discover_skills(&paths.source_root)?;
    if bundles.is_empty() {
        return Err(Error::NoSkillsFound {
            path: paths.source_root.clone(),
        }
        .into());
    }

    let target = paths.target_root(location)?;
    let report = install_skills(&bundles, location, &paths.source_root, target, |event| {
        print_progress(event, location)
    })?;

    output(&report, format, print_summary)
}

fn print_progress(event: InstallEvent<'_>, location: Location) {
    match event {
        InstallEvent::Started { target, total } => {
            eprintln!("\nInstalling {total} DDD skill(s) to {}...", location.label());
            eprintln!("Target: {}", target.display());
        }
        InstallEvent::CreatedTarget(path) => {
            eprintln!("\nCreated directory: {}", path.display());
        }
        InstallEvent::Installed {
            index,
            total,
            skill,
        } => {
            if index == 1 {
                eprintln!("\n{}", "=".repeat(RULE_WIDTH));
                eprintln!("Progress:\n");
            }
            eprintln!("  [{index}/{total}] {} {}", "✓".green(), skill.name);
            if let Some(description) = &skill.description {
                eprintln!("{}", wrap_description(description, "      "));
            }
        }
    }
}

fn print_summary(report: &InstallReport) {
    let rule = "=".repeat(RULE_WIDTH);

    if report.already_present {
        println!(
            "\n{} Skills are already installed at: {}",
            "✓".green(),
            report.target.display()
        );
        println!("\n{rule}");
        println!("Installed skills:");
        for skill in &report.installed {
            println!("  {} {}", "✓".green(), skill.name);
            if let Some(description) = &skill.description {
                println!("{}", wrap_description(description, "    "));
            }
        }
        println!("{rule}");
        println!("\n{} skill(s) available!", report.installed.len());
        return;
    }

    println!("{rule}");
    println!("\n{} Installation complete!", "✓".green());
    println!(
        "\nInstalled {} skill(s) to {}",
        report.installed.len(),
        report.location.label()
    );
    println!("Location: {}", report.target.display());
    println!("\nInstalled skills:");
    for skill in &report.installed {
        println!("  • {}", skill.name.bold());
        if let Some(description) = &skill.description {
            println!("{}", wrap_description(description, "    "));
        }
    }
    println!("\n{rule}");
    println!("\nUsage: type /<skill-name> in your coding agent to use a skill");
}
