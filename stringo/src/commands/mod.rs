// stringo/src/commands/mod.rs
//! Command implementations.
//!
//! Each command writes its result to the writer it is given and reports
//! whether the input passed. Errors are reserved for bad invocations
//! (unknown flags, missing policies, unreadable input).

pub mod check;
pub mod date;
pub mod email;
pub mod hash;
pub mod name;
pub mod password;
pub mod policies;
pub mod random;
pub mod transform;

use anyhow::Result;
use stringo_core::{ChkRule, StringoConfig, TransformFlag};

use crate::ui::theme::ThemeMap;

/// Everything a command needs besides its own arguments.
pub struct AppContext {
    pub config: StringoConfig,
    pub theme: ThemeMap,
    /// Whether the output writer supports ANSI colors.
    pub colors: bool,
}

/// Whether the command's input passed. Maps to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Passed,
    Failed,
}

impl CommandOutcome {
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            CommandOutcome::Passed
        } else {
            CommandOutcome::Failed
        }
    }
}

/// Parses rule names and unions them into one set.
pub fn parse_rules(names: &[String]) -> Result<ChkRule> {
    names.iter().try_fold(ChkRule::empty(), |acc, name| Ok(acc | ChkRule::parse_rule(name)?))
}

/// Parses transform flag names, keeping their order.
pub fn parse_flags(names: &[String]) -> Result<Vec<TransformFlag>> {
    names
        .iter()
        .map(|name| TransformFlag::parse_flag(name).map_err(anyhow::Error::from))
        .collect()
}

/// Parses transform flag names into one set; no names means `NONE`.
pub fn parse_flag_set(names: &[String]) -> Result<TransformFlag> {
    if names.is_empty() {
        return Ok(TransformFlag::NONE);
    }
    Ok(parse_flags(names)?.into_iter().fold(TransformFlag::empty(), |acc, f| acc | f))
}
