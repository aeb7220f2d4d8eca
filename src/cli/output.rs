use clap::ValueEnum;
use color_eyre::eyre::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `data` as a JSON line, or hand it to `text_fn` for text output.
pub fn output<T, F>(data: &T, format: OutputFormat, text_fn: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&T),
{
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(data)?);
        }
        OutputFormat::Text => {
            text_fn(data);
        }
    }
    Ok(())
}

/// Indent and wrap a description under a list item.
pub fn wrap_description(description: &str, indent: &str) -> String {
    let options = textwrap::Options::new(76)
        .initial_indent(indent)
        .subsequent_indent(indent);
    textwrap::fill(description, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_description_indents_every_line() {
        let text = "word ".repeat(30);
        let wrapped = wrap_description(text.trim(), "    ");
        assert!(wrapped.lines().count() > 1);
        assert!(wrapped.lines().all(|line| line.starts_with("    word")));
    }

    #[test]
    fn wrap_description_short_text_single_line() {
        assert_eq!(wrap_description("Does A", "  "), "  Does A");
    }
}
