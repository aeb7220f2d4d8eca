//! Interactive location prompt.

use std::io::{BufRead, Write};

use crate::config::Location;
use crate::error::{Error, Result};

/// Use `explicit` if given, otherwise ask on stdin.
pub fn resolve_location(explicit: Option<Location>) -> Result<Location> {
    if let Some(location) = explicit {
        return Ok(location);
    }
    let stdin = std::io::stdin();
    prompt_location(&mut stdin.lock(), &mut std::io::stderr())
}

/// Ask for a location until `1` or `2` is entered.
///
/// Fails with [`Error::NoLocationSelected`] if `input` ends first.
pub fn prompt_location<R, W>(input: &mut R, output: &mut W) -> Result<Location>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Where would you like to install the DDD skills?")?;
    writeln!(output)?;
    writeln!(output, "  [1] Global   (~/.skills/ddd/)")?;
    writeln!(output, "      Available in all projects")?;
    writeln!(output)?;
    writeln!(output, "  [2] Local    (./.skills/ddd/)")?;
    writeln!(output, "      Only available in this project")?;
    writeln!(output)?;

    let mut line = String::new();
    loop {
        write!(output, "Enter choice [1/2]: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Err(Error::NoLocationSelected);
        }

        match line.trim() {
            "1" => return Ok(Location::Global),
            "2" => return Ok(Location::Local),
            _ => writeln!(output, "Invalid choice. Please enter 1 or 2.")?,
        }
    }
}
