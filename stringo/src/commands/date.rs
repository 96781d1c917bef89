// stringo/src/commands/date.rs
use anyhow::{Context, Result};
use std::io::Write;
use stringo_core::{date_reformat, date_time_as_string};

use super::CommandOutcome;
use crate::cli::DateCommand;

pub fn run<W: Write>(cmd: &DateCommand, out: &mut W) -> Result<CommandOutcome> {
    let formatted = if cmd.now {
        date_time_as_string(&chrono::Local::now().naive_local(), &cmd.to)
    } else {
        let date = cmd.date.as_deref().context("A date is required unless --now is given")?;
        let from = cmd.from.as_deref().context("--from is required unless --now is given")?;
        date_reformat(date, from, &cmd.to)?
    };
    writeln!(out, "{}", formatted)?;
    Ok(CommandOutcome::Passed)
}
