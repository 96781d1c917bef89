// stringo/src/commands/random.rs
use anyhow::Result;
use log::debug;
use std::io::Write;
use stringo_core::RandomGenerator;

use super::CommandOutcome;
use crate::cli::RandomCommand;

pub fn run<W: Write>(cmd: &RandomCommand, out: &mut W) -> Result<CommandOutcome> {
    let mut generator = match cmd.seed {
        Some(seed) => {
            debug!("Seeding random generator with {}.", seed);
            RandomGenerator::from_seed(seed)
        }
        None => RandomGenerator::from_os_entropy(),
    };
    for _ in 0..cmd.count {
        writeln!(out, "{}", generator.int_in_range(cmd.min, cmd.max))?;
    }
    Ok(CommandOutcome::Passed)
}
