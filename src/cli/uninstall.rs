//! CLI uninstall command implementation.

use color_eyre::eyre::Result;

use crate::cli::output::{OutputFormat, output};
use crate::cli::prompt::resolve_location;
use crate::config::{Location, Paths};
use crate::install::{UninstallReport, uninstall_skills};

pub fn run(paths: &Paths, location: Option<Location>, format: OutputFormat) -> Result<()> {
    let location = resolve_location(location)?;
    let target = paths.target_root(location)?;

    let report = uninstall_skills(location, target)?;

    output(&report, format, print_report)
}

fn print_report(report: &UninstallReport) {
    if !report.removed {
        println!("DDD skills are not installed at this location.");
        return;
    }

    println!(
        "DDD skills ({}) uninstalled from: {}",
        report.location,
        report.target.display()
    );
    println!("Removed {} skill(s).", report.count);
}
