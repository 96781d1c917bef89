// stringo-core/src/validators/password.rs
//! New-password checks: confirmation match, minimum length and complexity.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use stringo_chars::{char_count, has_letter, has_number, has_symbol, has_uppercase, is_space};

use crate::errors::StringoError;

/// Passwords shorter than this are always rejected, whatever the caller asks for.
pub const MIN_PASSWORD_LENGTH: usize = 4;

bitflags! {
    /// Complexity requirements for a new password.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct PasswordComplexity: u8 {
        /// Only the length is checked.
        const LOWEST = 1;
        const REQUIRE_LETTER = 1 << 1;
        const REQUIRE_UPPERCASE = 1 << 2;
        const REQUIRE_NUMBER = 1 << 3;
        const REQUIRE_SPACE = 1 << 4;
        const REQUIRE_SYMBOL = 1 << 5;
    }
}

impl PasswordComplexity {
    /// Parses a single requirement name. Accepts both `REQUIRE_NUMBER` and `require-number`.
    pub fn parse_flag(name: &str) -> Result<Self, StringoError> {
        let normalized = name.trim().replace('-', "_").to_ascii_uppercase();
        Self::from_name(&normalized).ok_or_else(|| StringoError::UnknownRule(name.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PasswordCheck {
    Ok,
    /// Password and confirmation differ.
    Divergent,
    TooShort,
    /// A complexity requirement is not met.
    TooSimple,
}

impl PasswordCheck {
    pub fn is_ok(self) -> bool {
        self == PasswordCheck::Ok
    }

    pub fn name(self) -> &'static str {
        match self {
            PasswordCheck::Ok => "ok",
            PasswordCheck::Divergent => "divergent",
            PasswordCheck::TooShort => "too-short",
            PasswordCheck::TooSimple => "too-simple",
        }
    }
}

impl fmt::Display for PasswordCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validates a new password against its confirmation, a minimum length
/// (floored at [`MIN_PASSWORD_LENGTH`]) and the requested complexity.
pub fn check_new_password(
    password: &str,
    confirmation: &str,
    min_len: usize,
    complexity: PasswordComplexity,
) -> PasswordCheck {
    if password != confirmation {
        return PasswordCheck::Divergent;
    }

    if char_count(password) < min_len.max(MIN_PASSWORD_LENGTH) {
        return PasswordCheck::TooShort;
    }

    let unmet = (complexity.contains(PasswordComplexity::REQUIRE_LETTER) && !has_letter(password))
        || (complexity.contains(PasswordComplexity::REQUIRE_UPPERCASE) && !has_uppercase(password))
        || (complexity.contains(PasswordComplexity::REQUIRE_NUMBER) && !has_number(password))
        || (complexity.contains(PasswordComplexity::REQUIRE_SPACE) && !password.chars().any(is_space))
        || (complexity.contains(PasswordComplexity::REQUIRE_SYMBOL) && !has_symbol(password));

    if unmet {
        PasswordCheck::TooSimple
    } else {
        PasswordCheck::Ok
    }
}
