// stringo/src/commands/check.rs
//! `stringo check`: runs the check engine.

use anyhow::Result;
use log::debug;
use serde::Serialize;
use std::io::Write;
use stringo_core::{check_str, ChkResult};

use super::{parse_rules, AppContext, CommandOutcome};
use crate::cli::CheckCommand;
use crate::ui::output_format;
use crate::utils::input::resolve_text;

#[derive(Serialize)]
struct CheckReport {
    result: ChkResult,
    code: i32,
    ok: bool,
}

pub fn run<W: Write>(cmd: &CheckCommand, ctx: &AppContext, out: &mut W) -> Result<CommandOutcome> {
    let text = resolve_text(cmd.input.text.as_deref())?;

    let (min_len, max_len, rules) = match &cmd.policy {
        Some(name) => {
            let policy = ctx.config.find_policy(name)?;
            debug!("Using policy '{}'.", policy.name);
            (policy.min_len, policy.max_len, policy.rules)
        }
        None => (cmd.min_len, cmd.max_len, parse_rules(&cmd.rules)?),
    };

    let result = check_str(&text, min_len, max_len, rules);
    debug!("check: min={}, max={}, rules={:?} -> {}", min_len, max_len, rules, result);

    if cmd.json {
        let report = CheckReport {
            result,
            code: result.code(),
            ok: result.is_ok(),
        };
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        output_format::print_result(out, result.name(), result.is_ok(), &ctx.theme, ctx.colors)?;
    }

    Ok(CommandOutcome::from_passed(result.is_ok()))
}
