// stringo-core/src/validators/mod.rs
//! Domain predicates that sit outside the generic check engine.
//!
//! The check engine only knows character classes and lengths. Structured
//! inputs such as person names, e-mail addresses and new passwords get their
//! own dedicated validators here.
//!
//! License: MIT OR APACHE 2.0

pub mod email;
pub mod name;
pub mod password;
