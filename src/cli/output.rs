//! Output formatting utilities

use console::style;

use crate::cli::OutputFormat;

/// Determine the effective output format based on context
pub fn effective_format(format: OutputFormat, is_list: bool) -> OutputFormat {
    match format {
        OutputFormat::Auto => {
            if is_list {
                OutputFormat::Table
            } else {
                OutputFormat::Yaml
            }
        }
        other => other,
    }
}

/// Green check with a message, the way every mutation reports success
pub fn success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Yellow bang for a non-fatal problem
pub fn warn(message: &str) {
    eprintln!("{} {}", style("!").yellow(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_resolves_by_context() {
        assert_eq!(effective_format(OutputFormat::Auto, true), OutputFormat::Table);
        assert_eq!(effective_format(OutputFormat::Auto, false), OutputFormat::Yaml);
        assert_eq!(effective_format(OutputFormat::Json, true), OutputFormat::Json);
    }
}
