// stringo/src/commands/password.rs
use anyhow::Result;
use std::io::Write;
use stringo_core::{check_new_password, PasswordComplexity};

use super::{AppContext, CommandOutcome};
use crate::cli::PasswordCommand;
use crate::ui::output_format;

pub fn run<W: Write>(cmd: &PasswordCommand, ctx: &AppContext, out: &mut W) -> Result<CommandOutcome> {
    let complexity = if cmd.require.is_empty() {
        PasswordComplexity::LOWEST
    } else {
        cmd.require.iter().try_fold(PasswordComplexity::empty(), |acc, name| {
            Ok::<_, anyhow::Error>(acc | PasswordComplexity::parse_flag(name)?)
        })?
    };
    let confirmation = cmd.confirmation.as_deref().unwrap_or(&cmd.password);

    let result = check_new_password(&cmd.password, confirmation, cmd.min_len, complexity);
    output_format::print_result(out, result.name(), result.is_ok(), &ctx.theme, ctx.colors)?;
    Ok(CommandOutcome::from_passed(result.is_ok()))
}
