//! Shared helper functions for CLI commands

use miette::{IntoDiagnostic, Result};

use crate::core::validate::normalize_date;

/// Truncate to at most `max_len` characters, adding "..." when cut.
///
/// Counts chars, not bytes, so multi-byte names never split mid-character.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Render a server timestamp as a plain calendar date for a table cell;
/// empty values become a dash.
pub fn date_cell(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        normalize_date(value)
    }
}

/// Ask for a y/N confirmation on stdout, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::Write::flush(&mut std::io::stdout()).into_diagnostic()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input).into_diagnostic()?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_date_cell() {
        assert_eq!(date_cell(""), "-");
        assert_eq!(date_cell("2024-03-05T00:00:00Z"), "2024-03-05");
        assert_eq!(date_cell("2024-03-05"), "2024-03-05");
    }
}
