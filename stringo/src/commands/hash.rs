// stringo/src/commands/hash.rs
use anyhow::Result;
use std::io::Write;
use stringo_core::text::sha256_hash;

use super::CommandOutcome;
use crate::cli::TextArg;
use crate::utils::input::resolve_text;

pub fn run<W: Write>(cmd: &TextArg, out: &mut W) -> Result<CommandOutcome> {
    let text = resolve_text(cmd.text.as_deref())?;
    writeln!(out, "{}", sha256_hash(&text))?;
    Ok(CommandOutcome::Passed)
}
