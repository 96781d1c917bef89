// stringo/src/ui/output_format.rs
//! Styled writers for command output.
//!
//! Every function takes the destination writer and whether that writer
//! supports color, so callers decide per stream (stdout vs. stderr).

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes `text` in the color configured for `entry`, or plain when color is off.
pub fn write_styled<W: Write>(
    writer: &mut W,
    text: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    let color = theme.get(&entry).and_then(|style| style.fg.as_ref());
    match color {
        Some(color) if enable_colors => write!(writer, "{}", text.color(color.to_ansi_color())),
        _ => write!(writer, "{}", text),
    }
}

/// Prints a pass/fail result name on its own line.
pub fn print_result<W: Write>(
    writer: &mut W,
    name: &str,
    passed: bool,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    let entry = if passed { ThemeEntry::Success } else { ThemeEntry::Error };
    write_styled(writer, name, entry, theme, enable_colors)?;
    writeln!(writer)
}

pub fn print_header<W: Write>(writer: &mut W, text: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    write_styled(writer, text, ThemeEntry::Header, theme, enable_colors)?;
    writeln!(writer)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    write_styled(writer, &format!("Error: {}", msg), ThemeEntry::Error, theme, enable_colors)?;
    writeln!(writer)
}
