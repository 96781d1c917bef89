//! String-level facts built from the codepoint predicates.
//!
//! Each function walks the input once and stops at the first codepoint that
//! settles the answer.

use crate::codepoint::{
    is_ascii, is_denied_space, is_letter, is_lower, is_number, is_symbol, is_upper,
};

/// Returns `true` if the input contains at least one number.
pub fn has_number(s: &str) -> bool {
    s.chars().any(is_number)
}

/// Returns `true` if the input contains at least one letter.
pub fn has_letter(s: &str) -> bool {
    s.chars().any(is_letter)
}

/// Returns `true` if the input contains at least one symbol.
/// If a codepoint is not a space, letter nor a number, it's considered a symbol.
pub fn has_symbol(s: &str) -> bool {
    s.chars().any(is_symbol)
}

pub fn has_uppercase(s: &str) -> bool {
    s.chars().any(is_upper)
}

pub fn has_lowercase(s: &str) -> bool {
    s.chars().any(is_lower)
}

/// Returns `true` if any codepoint lies beyond the ASCII range.
pub fn has_non_ascii(s: &str) -> bool {
    !s.chars().all(is_ascii)
}

/// Returns `true` if the input holds a space, tab, line feed or carriage return.
pub fn has_denied_space(s: &str) -> bool {
    s.chars().any(is_denied_space)
}

/// Returns `true` if the input is non-empty and entirely numeric.
pub fn has_only_numbers(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_number)
}

/// Alias for [`has_only_numbers`].
pub fn has_only_digits(s: &str) -> bool {
    has_only_numbers(s)
}

/// Returns `true` if the input is non-empty and composed only of letters.
pub fn has_only_letters(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_number_unicode() {
        assert!(has_number(" 九 に 三 Ⅷ'"));
        assert!(has_number("this is a number: 9"));
        assert!(!has_number("NO NUMBERS"));
    }

    #[test]
    fn test_has_symbol() {
        assert!(has_symbol("a symbol %"));
        assert!(!has_symbol("NO SYMBOLS 123"));
        assert!(has_symbol("FHFJKDHFSDJKH012308312-0=-0=-00"));
    }

    #[test]
    fn test_has_only_numbers() {
        assert!(has_only_numbers("20"));
        assert!(!has_only_numbers("The Go programming language "));
        assert!(!has_only_numbers("20The Go programming language "));
        assert!(!has_only_numbers(""));
        assert!(has_only_digits("0042"));
    }

    #[test]
    fn test_has_only_letters() {
        assert!(has_only_letters("TheGoprogramminglanguage"));
        assert!(!has_only_letters("The Go programming language"));
        assert!(!has_only_letters("20"));
        assert!(!has_only_letters(""));
    }

    #[test]
    fn test_non_ascii_and_denied_space() {
        assert!(has_non_ascii("TAB\tÇÂÖÉд"));
        assert!(!has_non_ascii("plain ascii ~"));
        assert!(has_denied_space("row\rrow"));
        assert!(!has_denied_space("no-spaces"));
    }
}
