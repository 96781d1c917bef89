// stringo/src/commands/name.rs
//! `stringo name ...`: person-name helpers.

use anyhow::Result;
use std::io::Write;
use stringo_core::{chk_person_name, initials, name_first, name_first_and_last};

use super::{parse_flag_set, AppContext, CommandOutcome};
use crate::cli::NameCommand;
use crate::ui::output_format;
use crate::utils::input::resolve_text;

pub fn run<W: Write>(cmd: &NameCommand, ctx: &AppContext, out: &mut W) -> Result<CommandOutcome> {
    match cmd {
        NameCommand::Check { input, accept_empty } => {
            let text = resolve_text(input.text.as_deref())?;
            let result = chk_person_name(&text, *accept_empty);
            output_format::print_result(out, result.name(), result.is_ok(), &ctx.theme, ctx.colors)?;
            Ok(CommandOutcome::from_passed(result.is_ok()))
        }
        NameCommand::First(args) => {
            let text = resolve_text(args.input.text.as_deref())?;
            writeln!(out, "{}", name_first(&text, parse_flag_set(&args.flags)?))?;
            Ok(CommandOutcome::Passed)
        }
        NameCommand::FirstLast(args) => {
            let text = resolve_text(args.input.text.as_deref())?;
            writeln!(out, "{}", name_first_and_last(&text, parse_flag_set(&args.flags)?))?;
            Ok(CommandOutcome::Passed)
        }
        NameCommand::Initials(args) => {
            let text = resolve_text(args.input.text.as_deref())?;
            writeln!(out, "{}", initials(&text, parse_flag_set(&args.flags)?))?;
            Ok(CommandOutcome::Passed)
        }
    }
}
