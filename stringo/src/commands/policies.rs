// stringo/src/commands/policies.rs
//! `stringo policies`: lists the merged policies and recipes.

use anyhow::Result;
use std::io::Write;

use super::{AppContext, CommandOutcome};
use crate::cli::PoliciesCommand;
use crate::ui::output_format;
use crate::ui::theme::ThemeEntry;

fn flag_names<I: Iterator<Item = (&'static str, T)>, T>(names: I) -> String {
    names.map(|(name, _)| name).collect::<Vec<_>>().join(" | ")
}

pub fn run<W: Write>(cmd: &PoliciesCommand, ctx: &AppContext, out: &mut W) -> Result<CommandOutcome> {
    if cmd.json {
        serde_json::to_writer_pretty(&mut *out, &ctx.config)?;
        writeln!(out)?;
        return Ok(CommandOutcome::Passed);
    }

    output_format::print_header(out, "Policies", &ctx.theme, ctx.colors)?;
    for policy in &ctx.config.policies {
        write!(out, "  ")?;
        output_format::write_styled(out, &policy.name, ThemeEntry::Label, &ctx.theme, ctx.colors)?;
        writeln!(
            out,
            "  min={} max={}  {}",
            policy.min_len,
            policy.max_len,
            flag_names(policy.rules.iter_names())
        )?;
    }

    output_format::print_header(out, "Recipes", &ctx.theme, ctx.colors)?;
    for recipe in &ctx.config.recipes {
        let steps: Vec<String> = recipe.steps.iter().map(|step| flag_names(step.iter_names())).collect();
        write!(out, "  ")?;
        output_format::write_styled(out, &recipe.name, ThemeEntry::Label, &ctx.theme, ctx.colors)?;
        writeln!(
            out,
            "  {:?} max={}  {}",
            recipe.mode,
            recipe.max_len,
            steps.join(", ")
        )?;
    }

    Ok(CommandOutcome::Passed)
}
