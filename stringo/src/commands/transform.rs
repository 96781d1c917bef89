// stringo/src/commands/transform.rs
//! `stringo transform`: flag mode, serial mode or a named recipe.

use anyhow::Result;
use log::debug;
use std::io::Write;
use stringo_core::{Pipeline, PipelineMode};

use super::{parse_flags, AppContext, CommandOutcome};
use crate::cli::TransformCommand;
use crate::utils::input::resolve_text;

pub fn run<W: Write>(cmd: &TransformCommand, ctx: &AppContext, out: &mut W) -> Result<CommandOutcome> {
    let text = resolve_text(cmd.input.text.as_deref())?;

    let pipeline = match &cmd.recipe {
        Some(name) => ctx.config.find_recipe(name)?.pipeline(),
        None => {
            let mode = if cmd.serial { PipelineMode::Serial } else { PipelineMode::Combined };
            Pipeline::from_steps(mode, &parse_flags(&cmd.flags)?, cmd.max_len)
        }
    };
    debug!("transform: {:?}", pipeline);

    writeln!(out, "{}", pipeline.apply(&text))?;
    Ok(CommandOutcome::Passed)
}
