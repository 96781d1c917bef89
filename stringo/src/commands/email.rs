// stringo/src/commands/email.rs
use anyhow::Result;
use std::io::Write;
use stringo_core::{str_contains_email, validate_email};

use super::{AppContext, CommandOutcome};
use crate::cli::EmailCommand;
use crate::ui::output_format;
use crate::utils::input::resolve_text;

pub fn run<W: Write>(cmd: &EmailCommand, ctx: &AppContext, out: &mut W) -> Result<CommandOutcome> {
    let text = resolve_text(cmd.input.text.as_deref())?;
    let (passed, label) = if cmd.contains {
        let found = str_contains_email(&text);
        (found, if found { "found" } else { "not-found" })
    } else {
        let valid = validate_email(&text);
        (valid, if valid { "valid" } else { "invalid" })
    };
    output_format::print_result(out, label, passed, &ctx.theme, ctx.colors)?;
    Ok(CommandOutcome::from_passed(passed))
}
