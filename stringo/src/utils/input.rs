// stringo/src/utils/input.rs
//! Resolves the text a command works on.

use anyhow::{Context, Result};
use log::debug;
use std::io::Read;

/// Returns `arg` if given, otherwise everything on stdin minus one trailing
/// line break.
pub fn resolve_text(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(text) => Ok(text.to_string()),
        None => {
            debug!("No text argument given, reading stdin.");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read input from stdin")?;
            Ok(strip_line_break(&buffer).to_string())
        }
    }
}

/// Removes a single trailing `\n` or `\r\n`.
pub fn strip_line_break(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_line_break_only() {
        assert_eq!(strip_line_break("abc\n"), "abc");
        assert_eq!(strip_line_break("abc\r\n"), "abc");
        assert_eq!(strip_line_break("abc\n\n"), "abc\n");
        assert_eq!(strip_line_break("  abc  "), "  abc  ");
    }

    #[test]
    fn argument_wins() {
        assert_eq!(resolve_text(Some(" given ")).unwrap(), " given ");
    }
}
