// stringo-core/src/lib.rs
//! # Stringo Core Library
//!
//! `stringo-core` provides the platform-independent logic for validating and
//! rewriting strings. It is built around two rule-composition engines:
//!
//! * The **check engine** classifies a string against a [`ChkRule`] set
//!   (length bounds, character classes, word count, casing, ASCII-only) and
//!   reports exactly one [`ChkResult`]: success or the first violated rule.
//! * The **transform pipeline** rewrites a string through a [`TransformFlag`]
//!   set, either in the engine's fixed priority order ([`transform`]) or in a
//!   caller-given sequence ([`transform_serially`]), then truncates by
//!   codepoints.
//!
//! Both engines are pure functions with no error channel; they never touch
//! global state and are safe to call from any thread.
//!
//! ## Modules
//!
//! * `engines`: the check engine and the transform engine.
//! * `pipeline`: [`Pipeline`], a stored transform that can be replayed.
//! * `config`: named check policies and transform recipes loaded from YAML.
//! * `text`: hashing, codepoint truncation, filters, case mapping, fixpoint replacement.
//! * `validators`: person names, e-mail addresses and new passwords.
//! * `datetime`: a readable date layout language on top of `chrono`.
//! * `convert`: lenient string-to-number conversion.
//! * `random`: a caller-owned, explicitly seeded random generator.
//! * `errors`: the [`StringoError`] type.
//!
//! Codepoint classification itself lives in the `no_std` crate `stringo-chars`.
//!
//! ## Usage Example
//!
//! ```rust
//! use stringo_core::{check_str, transform, transform_serially, ChkResult, ChkRule, TransformFlag};
//!
//! let rules = ChkRule::DENY_SPACES | ChkRule::REQUIRE_NUMBERS;
//! assert_eq!(check_str("abc123", 3, 16, rules), ChkResult::Ok);
//! assert_eq!(check_str("abc", 3, 16, rules), ChkResult::NumbersNotFound);
//!
//! assert_eq!(transform("abc123", 0, TransformFlag::ONLY_DIGITS), "123");
//!
//! let steps = [TransformFlag::TRIM, TransformFlag::LOWERCASE];
//! assert_eq!(transform_serially("  Test String", 0, &steps), "test string");
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use stringo_core::{merge_configs, ChkResult, StringoConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = merge_configs(StringoConfig::load_default_policies()?, None);
//!     let username = config.find_policy("username")?;
//!     assert_eq!(username.check("john_doe"), ChkResult::SymbolsDenied);
//!     assert_eq!(config.find_recipe("compact-key")?.apply("  Hello, World "), "helloworld");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible file and configuration loading returns `anyhow::Result` with
//! context. Lookups, flag-name parsing and date parsing return [`StringoError`].
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod config;
pub mod convert;
pub mod datetime;
pub mod engines;
pub mod errors;
pub mod pipeline;
pub mod random;
pub mod text;
pub mod validators;

/// The check engine under its short name.
pub use engines::check_engine as check;
/// The transform engine under its short name.
pub use engines::transform_engine as transform;

pub use validators::{email, name, password};

/// Re-exports the configuration types and functions.
pub use config::{merge_configs, CheckPolicy, StringoConfig, TransformRecipe, MAX_POLICY_NAME_LENGTH};

/// Re-exports the custom error type.
pub use errors::StringoError;

pub use engines::check_engine::{check_str, ChkResult, ChkRule, ClassificationFacts};
pub use engines::transform_engine::{transform, transform_serially, TransformFlag};
pub use pipeline::{Pipeline, PipelineMode};

pub use convert::as_float64;
pub use datetime::{date_reformat, date_time_as_string};
pub use validators::email::{str_contains_email, validate_email};
pub use validators::name::{chk_person_name, initials, name_first, name_first_and_last, PersonNameCheck};
pub use validators::password::{check_new_password, PasswordCheck, PasswordComplexity};
pub use random::RandomGenerator;
