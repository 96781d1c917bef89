// stringo-core/src/engines/mod.rs
//! The two rule-composition engines.
//!
//! Each engine lives in its own file and is a pure function of
//! `(input, configuration) -> result`:
//!
//! * `check_engine`: the bitflag-configured validator, returning [`check_engine::ChkResult`].
//! * `transform_engine`: the flag-mode and serial-mode rewriting pipeline.
//!
//! License: MIT OR APACHE 2.0

pub mod check_engine;
pub mod transform_engine;
