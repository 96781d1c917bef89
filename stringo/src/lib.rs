// stringo/src/lib.rs
//! # Stringo CLI Application
//!
//! This crate provides the terminal interface for `stringo-core`: checks,
//! transforms, hashing, person names, e-mail, dates, random numbers,
//! passwords, and a listing of the configured policies and recipes.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

use anyhow::Result;
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io::{self, Write};
use stringo_core::{merge_configs, StringoConfig};

use crate::cli::{Cli, Commands};
use crate::commands::{AppContext, CommandOutcome};
use crate::ui::theme::build_theme_map;

/// Loads the built-in policies and merges the user's file over them.
pub fn load_config(cli: &Cli) -> Result<StringoConfig> {
    let defaults = StringoConfig::load_default_policies()?;
    let user = match &cli.config {
        Some(path) => Some(StringoConfig::load_from_file(path)?),
        None => None,
    };
    Ok(merge_configs(defaults, user))
}

/// Runs the parsed command line, writing command output to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W, colors: bool) -> Result<CommandOutcome> {
    let ctx = AppContext {
        config: load_config(cli)?,
        theme: build_theme_map(cli.theme.as_deref())?,
        colors,
    };
    debug!(
        "Loaded {} policies and {} recipes.",
        ctx.config.policies.len(),
        ctx.config.recipes.len()
    );

    let outcome = match &cli.command {
        Commands::Check(cmd) => commands::check::run(cmd, &ctx, out)?,
        Commands::Transform(cmd) => commands::transform::run(cmd, &ctx, out)?,
        Commands::Hash(cmd) => commands::hash::run(cmd, out)?,
        Commands::Name(cmd) => commands::name::run(cmd, &ctx, out)?,
        Commands::Email(cmd) => commands::email::run(cmd, &ctx, out)?,
        Commands::Date(cmd) => commands::date::run(cmd, out)?,
        Commands::Random(cmd) => commands::random::run(cmd, out)?,
        Commands::Password(cmd) => commands::password::run(cmd, &ctx, out)?,
        Commands::Policies(cmd) => commands::policies::run(cmd, &ctx, out)?,
    };
    info!("Command finished: {:?}", outcome);
    Ok(outcome)
}

/// Runs against the real stdout, coloring only when it is a terminal.
pub fn run_stdout(cli: &Cli) -> Result<CommandOutcome> {
    let stdout = io::stdout();
    let colors = stdout.is_terminal();
    let mut writer = stdout.lock();
    let outcome = run(cli, &mut writer, colors)?;
    writer.flush()?;
    Ok(outcome)
}
