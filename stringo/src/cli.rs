// stringo/src/cli.rs
//! This file defines the command-line interface (CLI) for the stringo application,
//! including all available commands and their arguments.
//! License: MIT OR APACHE 2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "stringo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate and reshape strings from the terminal",
    long_about = "Stringo checks text against composable structural rules (length, character classes, word count, casing, ASCII-only) and rewrites it through composable transforms (case mapping, filtering, truncation, hashing). Named policies and recipes can be loaded from a YAML configuration file.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML file with extra policies and recipes.
    #[arg(long = "config", value_name = "FILE", global = true, env = "STRINGO_CONFIG", help = "Path to a custom policy configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `stringo` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Checks text against a rule set or a named policy. Exits with 1 on failure.
    Check(CheckCommand),

    /// Rewrites text with transform flags or a named recipe.
    Transform(TransformCommand),

    /// Prints the SHA-256 hex digest of the text.
    Hash(TextArg),

    /// Person-name helpers.
    #[command(subcommand)]
    Name(NameCommand),

    /// Validates an e-mail address. Exits with 1 when invalid.
    Email(EmailCommand),

    /// Reformats a date from one layout to another.
    Date(DateCommand),

    /// Prints random integers from an inclusive range.
    Random(RandomCommand),

    /// Checks a new password and its confirmation. Exits with 1 on failure.
    Password(PasswordCommand),

    /// Lists the available policies and recipes.
    Policies(PoliciesCommand),
}

/// Text taken from the command line, or from stdin when omitted.
#[derive(Args, Debug)]
pub struct TextArg {
    /// Input text (reads stdin if not provided).
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: TextArg,

    /// Use a named policy instead of explicit rules.
    #[arg(long, short = 'p', value_name = "NAME", conflicts_with_all = ["rules", "min_len", "max_len"], help = "Check against a named policy.")]
    pub policy: Option<String>,

    /// Rules to apply (comma-separated, e.g. `deny-spaces,require-numbers`).
    #[arg(long = "rule", short = 'r', value_delimiter = ',', value_name = "RULE", help = "Rules to apply (comma-separated).")]
    pub rules: Vec<String>,

    /// Minimum length in codepoints (0 disables).
    #[arg(long = "min", default_value_t = 0, help = "Minimum length in codepoints; 0 disables the bound.")]
    pub min_len: usize,

    /// Maximum length in codepoints (0 disables).
    #[arg(long = "max", default_value_t = 0, help = "Maximum length in codepoints; 0 disables the bound.")]
    pub max_len: usize,

    /// Print the result as JSON.
    #[arg(long, help = "Print the result as a JSON object.")]
    pub json: bool,
}

/// Arguments for the `transform` command.
#[derive(Args, Debug)]
pub struct TransformCommand {
    #[command(flatten)]
    pub input: TextArg,

    /// Use a named recipe instead of explicit flags.
    #[arg(long, short = 'R', value_name = "NAME", conflicts_with_all = ["flags", "serial", "max_len"], help = "Apply a named recipe.")]
    pub recipe: Option<String>,

    /// Transform flags (comma-separated, e.g. `trim,lowercase`).
    #[arg(long = "flag", short = 'f', value_delimiter = ',', value_name = "FLAG", help = "Transform flags (comma-separated).")]
    pub flags: Vec<String>,

    /// Apply the flags in the given order instead of the fixed priority order.
    #[arg(long, short = 's', help = "Apply the flags one after the other, in the order given.")]
    pub serial: bool,

    /// Maximum output length in codepoints (0 = unlimited).
    #[arg(long = "max", default_value_t = 0, help = "Maximum output length in codepoints; 0 means unlimited.")]
    pub max_len: usize,
}

/// Person-name subcommands.
#[derive(Subcommand, Debug)]
pub enum NameCommand {
    /// Checks that the text looks like a complete person name.
    Check {
        #[command(flatten)]
        input: TextArg,

        /// Treat an empty name as valid.
        #[arg(long, help = "Treat an empty name as valid.")]
        accept_empty: bool,
    },
    /// Prints the first name.
    First(NameTransformArgs),
    /// Prints the first and last names.
    FirstLast(NameTransformArgs),
    /// Prints the initials.
    Initials(NameTransformArgs),
}

#[derive(Args, Debug)]
pub struct NameTransformArgs {
    #[command(flatten)]
    pub input: TextArg,

    /// Transform flags applied before splitting (comma-separated).
    #[arg(long = "flag", short = 'f', value_delimiter = ',', value_name = "FLAG", help = "Transform flags applied before splitting (comma-separated).")]
    pub flags: Vec<String>,
}

/// Arguments for the `email` command.
#[derive(Args, Debug)]
pub struct EmailCommand {
    #[command(flatten)]
    pub input: TextArg,

    /// Search for an address anywhere in the text instead of validating all of it.
    #[arg(long, help = "Succeed if an address appears anywhere in the text.")]
    pub contains: bool,
}

/// Arguments for the `date` command.
#[derive(Args, Debug)]
pub struct DateCommand {
    /// The date to reformat (ignored with --now).
    #[arg(value_name = "DATE", required_unless_present = "now")]
    pub date: Option<String>,

    /// Layout of the input date, e.g. `yyyy-mm-dd`.
    #[arg(long = "from", value_name = "LAYOUT", required_unless_present = "now")]
    pub from: Option<String>,

    /// Layout of the output, e.g. `dd/mm/yyyy`.
    #[arg(long = "to", value_name = "LAYOUT")]
    pub to: String,

    /// Format the current local time instead of parsing a date.
    #[arg(long, conflicts_with_all = ["date", "from"])]
    pub now: bool,
}

/// Arguments for the `random` command.
#[derive(Args, Debug)]
pub struct RandomCommand {
    /// Lower bound (inclusive).
    #[arg(long, allow_negative_numbers = true, default_value_t = 0)]
    pub min: i64,

    /// Upper bound (inclusive).
    #[arg(long, allow_negative_numbers = true, default_value_t = 100)]
    pub max: i64,

    /// Seed for a reproducible sequence.
    #[arg(long)]
    pub seed: Option<u64>,

    /// How many numbers to print.
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,
}

/// Arguments for the `password` command.
#[derive(Args, Debug)]
pub struct PasswordCommand {
    /// The new password.
    #[arg(value_name = "PASSWORD")]
    pub password: String,

    /// The confirmation; defaults to the password itself.
    #[arg(value_name = "CONFIRMATION")]
    pub confirmation: Option<String>,

    /// Minimum length in codepoints (never below 4).
    #[arg(long = "min-len", default_value_t = 8)]
    pub min_len: usize,

    /// Complexity requirements (comma-separated, e.g. `require-number,require-symbol`).
    #[arg(long = "require", value_delimiter = ',', value_name = "REQUIREMENT")]
    pub require: Vec<String>,
}

/// Arguments for the `policies` command.
#[derive(Args, Debug)]
pub struct PoliciesCommand {
    /// Print as JSON.
    #[arg(long)]
    pub json: bool,
}
