// stringo/src/main.rs
//! Stringo entry point.
//!
//! Exit codes: 0 when the input passed, 1 when a check failed, 2 on errors.

use clap::Parser;
use is_terminal::IsTerminal;
use std::process::ExitCode;

use stringo::cli::Cli;
use stringo::commands::CommandOutcome;
use stringo::logger;
use stringo::ui::output_format;
use stringo::ui::theme::ThemeStyle;

fn main() -> ExitCode {
    let cli = Cli::parse();

    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));

    match stringo::run_stdout(&cli) {
        Ok(CommandOutcome::Passed) => ExitCode::SUCCESS,
        Ok(CommandOutcome::Failed) => ExitCode::from(1),
        Err(e) => {
            let stderr = std::io::stderr();
            let colors = stderr.is_terminal();
            let theme = ThemeStyle::default_theme_map();
            let _ = output_format::print_error_message(&mut stderr.lock(), &format!("{:#}", e), &theme, colors);
            ExitCode::from(2)
        }
    }
}
