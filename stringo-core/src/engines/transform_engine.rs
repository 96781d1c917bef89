// stringo-core/src/engines/transform_engine.rs
//! The transform pipeline.
//!
//! Two entry points share one set of per-operation semantics:
//!
//! * [`transform`] applies the flags of a [`TransformFlag`] set in a fixed
//!   priority order, regardless of how the set was built.
//! * [`transform_serially`] applies a caller-ordered list of flags, repeats
//!   allowed.
//!
//! Neither can fail. Operations that find nothing to act on degrade to the
//! identity or to the empty string.
//!
//! License: MIT OR APACHE 2.0

use bitflags::bitflags;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::errors::StringoError;
use crate::text::{
    only_digits, only_letters, only_letters_and_numbers, remove_digits, sha256_hash, title_case,
    to_title, truncate_chars,
};

bitflags! {
    /// Text rewriting operations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct TransformFlag: u32 {
        /// No transformation, only the maximum length applies.
        /// In flag mode it turns every other flag off.
        const NONE = 1;
        /// Trims leading and trailing white space.
        const TRIM = 1 << 1;
        /// Makes the string lowercase.
        const LOWERCASE = 1 << 2;
        /// Makes the string uppercase.
        const UPPERCASE = 1 << 3;
        /// Removes all non-numeric codepoints.
        const ONLY_DIGITS = 1 << 4;
        /// Removes all non-letter codepoints.
        const ONLY_LETTERS = 1 << 5;
        /// Leaves only letters and numbers.
        const ONLY_LETTERS_AND_DIGITS = 1 << 6;
        /// Replaces the string with its SHA-256 hex digest.
        const HASH = 1 << 7;
        /// Title case: first letter of each word uppercase, the rest lowercase.
        /// In serial mode this is a plain per-codepoint uppercase mapping.
        const TITLE_CASE = 1 << 8;
        /// Removes number codepoints without touching anything else.
        /// Ineffective when combined with the `ONLY_*` filters in flag mode.
        const REMOVE_DIGITS = 1 << 9;
    }
}

impl TransformFlag {
    /// Parses a single flag name. Accepts both `ONLY_DIGITS` and `only-digits`.
    pub fn parse_flag(name: &str) -> Result<Self, StringoError> {
        let normalized = name.trim().replace('-', "_").to_ascii_uppercase();
        Self::from_name(&normalized)
            .ok_or_else(|| StringoError::UnknownTransformFlag(name.to_string()))
    }
}

/// Handles a string according to the given flags.
///
/// The flags are applied in this order, each only if set:
/// `ONLY_LETTERS_AND_DIGITS`, `ONLY_DIGITS`, `ONLY_LETTERS`, `REMOVE_DIGITS`,
/// `TRIM`, then one of `TITLE_CASE` / `LOWERCASE` / `UPPERCASE` (first set
/// wins), then `HASH`. Truncation to `max_len` codepoints follows
/// (`0` = unlimited) and `TRIM` is applied once more afterwards. If `NONE` is
/// set, only truncation happens. Stacked filters narrow each other: the
/// output of one is the input of the next.
pub fn transform(input: &str, max_len: usize, flags: TransformFlag) -> String {
    if input.is_empty() {
        return String::new();
    }

    if flags.contains(TransformFlag::NONE) {
        return truncate_chars(input, max_len).to_string();
    }

    let mut s = input.to_string();

    if flags.contains(TransformFlag::ONLY_LETTERS_AND_DIGITS) {
        s = only_letters_and_numbers(&s);
    }

    if flags.contains(TransformFlag::ONLY_DIGITS) {
        s = only_digits(&s);
    }

    if flags.contains(TransformFlag::ONLY_LETTERS) {
        s = only_letters(&s);
    }

    if flags.contains(TransformFlag::REMOVE_DIGITS) {
        s = remove_digits(&s);
    }

    // Trimmed before and after truncation, so the cut never lands inside leading space.
    if flags.contains(TransformFlag::TRIM) {
        s = s.trim().to_string();
    }

    if flags.contains(TransformFlag::TITLE_CASE) {
        s = title_case(&s);
    } else if flags.contains(TransformFlag::LOWERCASE) {
        s = s.to_lowercase();
    } else if flags.contains(TransformFlag::UPPERCASE) {
        s = s.to_uppercase();
    }

    if flags.contains(TransformFlag::HASH) {
        s = sha256_hash(&s);
    }

    if s.is_empty() {
        return s;
    }

    let mut out = truncate_chars(&s, max_len);

    if flags.contains(TransformFlag::TRIM) {
        out = out.trim();
    }

    trace!("transform: flags={:?}, max_len={} -> {} bytes", flags, max_len, out.len());
    out.to_string()
}

/// Reformats the given string by applying `steps` in exactly the order given.
///
/// Example: `[ONLY_DIGITS, HASH, UPPERCASE]` first removes non-digits, then
/// hashes and finally uppercases the digest. A step holding several flags
/// applies each of them in declaration order; `NONE` steps do nothing.
/// Truncation to `max_len` codepoints is the last operation and is not
/// followed by a trim.
pub fn transform_serially(input: &str, max_len: usize, steps: &[TransformFlag]) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut s = input.to_string();

    for step in steps {
        for flag in step.iter() {
            s = apply_single(s, flag);
        }
    }

    trace!("transform_serially: {} steps, max_len={}", steps.len(), max_len);
    truncate_chars(&s, max_len).to_string()
}

fn apply_single(s: String, flag: TransformFlag) -> String {
    if flag == TransformFlag::ONLY_LETTERS_AND_DIGITS {
        only_letters_and_numbers(&s)
    } else if flag == TransformFlag::ONLY_DIGITS {
        only_digits(&s)
    } else if flag == TransformFlag::ONLY_LETTERS {
        only_letters(&s)
    } else if flag == TransformFlag::REMOVE_DIGITS {
        remove_digits(&s)
    } else if flag == TransformFlag::TRIM {
        s.trim().to_string()
    } else if flag == TransformFlag::TITLE_CASE {
        to_title(&s)
    } else if flag == TransformFlag::LOWERCASE {
        s.to_lowercase()
    } else if flag == TransformFlag::UPPERCASE {
        s.to_uppercase()
    } else if flag == TransformFlag::HASH {
        sha256_hash(&s)
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GO_TEXT: &str = "The Go programming language is an open source project to make programmers more productive.";
    const ORDINAL_TEXT: &str = "The Go is the 1º programming language is an open source project to make programmers more productive.";
    const BANG_TEXT: &str = "The Go is the 1º! programming language is an open source project to make programmers more productive!";

    #[test]
    fn test_transform_flag_mode() {
        let cases: Vec<(&str, String, usize, TransformFlag, &str)> = vec![
            ("without flags", GO_TEXT.to_string(), 20, TransformFlag::NONE, "The Go programming l"),
            ("with trim", format!("   {}", GO_TEXT), 20, TransformFlag::TRIM, "The Go programming l"),
            ("with lower case", GO_TEXT.to_string(), 20, TransformFlag::LOWERCASE, "the go programming l"),
            ("with upper case", GO_TEXT.to_string(), 20, TransformFlag::UPPERCASE, "THE GO PROGRAMMING L"),
            ("with only digits", ORDINAL_TEXT.to_string(), 20, TransformFlag::ONLY_DIGITS, "1"),
            ("with only letters", ORDINAL_TEXT.to_string(), 20, TransformFlag::ONLY_LETTERS, "TheGoistheºprogrammi"),
            ("with only letters and numbers", ORDINAL_TEXT.to_string(), 20, TransformFlag::ONLY_LETTERS_AND_DIGITS, "TheGoisthe1ºprogramm"),
            ("with only hash", ORDINAL_TEXT.to_string(), 20, TransformFlag::HASH, "e68e17f094e7c05eb7c9"),
            ("with hash and letters", ORDINAL_TEXT.to_string(), 20, TransformFlag::HASH | TransformFlag::ONLY_LETTERS, "a29f4806226150623d9d"),
            ("empty", String::new(), 20, TransformFlag::HASH | TransformFlag::ONLY_LETTERS, ""),
            (
                "spacing",
                " ".to_string(),
                1,
                TransformFlag::ONLY_LETTERS_AND_DIGITS
                    | TransformFlag::ONLY_LETTERS
                    | TransformFlag::ONLY_DIGITS
                    | TransformFlag::TRIM
                    | TransformFlag::LOWERCASE
                    | TransformFlag::UPPERCASE,
                "",
            ),
        ];

        for (summary, input, max_len, flags, expected) in cases {
            assert_eq!(transform(&input, max_len, flags), expected, "case '{}'", summary);
        }
    }

    #[test]
    fn test_spec_example_only_digits() {
        assert_eq!(transform("abc123", 0, TransformFlag::ONLY_DIGITS), "123");
    }

    #[test]
    fn test_none_overrides_everything_else() {
        let flags = TransformFlag::NONE | TransformFlag::UPPERCASE | TransformFlag::HASH;
        assert_eq!(transform("keep me", 0, flags), "keep me");
    }

    #[test]
    fn test_truncation_is_codepoint_based() {
        assert_eq!(transform("çá öáã", 1, TransformFlag::NONE), "ç");
        assert_eq!(transform("日本語", 2, TransformFlag::UPPERCASE), "日本");
    }

    #[test]
    fn test_case_precedence() {
        let all = TransformFlag::TITLE_CASE | TransformFlag::LOWERCASE | TransformFlag::UPPERCASE;
        assert_eq!(transform("name LASTNAME", 0, all), "Name Lastname");
        let lower_upper = TransformFlag::LOWERCASE | TransformFlag::UPPERCASE;
        assert_eq!(transform("MiXeD", 0, lower_upper), "mixed");
    }

    #[test]
    fn test_trim_after_truncation() {
        // Truncation exposes a trailing space which the second trim removes.
        assert_eq!(transform("  ab cd", 3, TransformFlag::TRIM), "ab");
    }

    #[test]
    fn test_letter_filters_use_letter_categories() {
        assert_eq!(transform("Ⓐx", 0, TransformFlag::ONLY_LETTERS), "x");
        assert_eq!(transform("aⅧ", 0, TransformFlag::ONLY_LETTERS_AND_DIGITS), "aⅧ");
        assert_eq!(transform("के", 0, TransformFlag::ONLY_LETTERS), "क");
    }

    #[test]
    fn test_stacked_filters_narrow() {
        let flags = TransformFlag::ONLY_LETTERS_AND_DIGITS | TransformFlag::ONLY_DIGITS | TransformFlag::ONLY_LETTERS;
        assert_eq!(transform("abc 123", 0, flags), "");
        let ineffective = TransformFlag::ONLY_LETTERS | TransformFlag::REMOVE_DIGITS;
        assert_eq!(transform("a1b2", 0, ineffective), "ab");
    }

    #[test]
    fn test_idempotence() {
        let s = "Ünïcödé Mixed 123 !";
        for flag in [
            TransformFlag::UPPERCASE,
            TransformFlag::LOWERCASE,
            TransformFlag::ONLY_DIGITS,
            TransformFlag::ONLY_LETTERS,
            TransformFlag::TITLE_CASE,
        ] {
            let once = transform(s, 0, flag);
            assert_eq!(transform(&once, 0, flag), once, "flag {:?} not idempotent", flag);
        }
    }

    #[test]
    fn test_transform_serially() {
        let cases: Vec<(&str, String, usize, Vec<TransformFlag>, &str)> = vec![
            ("without flags", GO_TEXT.to_string(), 20, vec![TransformFlag::NONE], "The Go programming l"),
            ("with trim and lowercase", format!("   {}", GO_TEXT), 20, vec![TransformFlag::TRIM, TransformFlag::LOWERCASE], "the go programming l"),
            ("with lower case and only letters", GO_TEXT.to_string(), 20, vec![TransformFlag::LOWERCASE, TransformFlag::ONLY_LETTERS], "thegoprogramminglang"),
            ("with hash and then letters", ORDINAL_TEXT.to_string(), 20, vec![TransformFlag::HASH, TransformFlag::ONLY_LETTERS], "eefecebcfdbceccbbbcb"),
            ("without string", String::new(), 20, vec![TransformFlag::NONE], ""),
            ("only letters and numbers", BANG_TEXT.to_string(), 20, vec![TransformFlag::ONLY_LETTERS_AND_DIGITS], "TheGoisthe1ºprogramm"),
            ("only numbers", BANG_TEXT.to_string(), 20, vec![TransformFlag::ONLY_DIGITS], "1"),
            ("upper", BANG_TEXT.to_string(), 20, vec![TransformFlag::UPPERCASE], "THE GO IS THE 1º! PR"),
        ];

        for (summary, input, max_len, steps, expected) in cases {
            assert_eq!(transform_serially(&input, max_len, &steps), expected, "case '{}'", summary);
        }
    }

    #[test]
    fn test_serial_spec_example() {
        let steps = [TransformFlag::TRIM, TransformFlag::LOWERCASE];
        assert_eq!(transform_serially("Test String", 0, &steps), "test string");
    }

    #[test]
    fn test_serial_order_matters_and_repeats_allowed() {
        let digits_then_hash = [TransformFlag::ONLY_DIGITS, TransformFlag::HASH];
        let hash_then_digits = [TransformFlag::HASH, TransformFlag::ONLY_DIGITS];
        assert_ne!(
            transform_serially("uh lalah 123", 0, &digits_then_hash),
            transform_serially("uh lalah 123", 0, &hash_then_digits)
        );
        assert_eq!(
            transform_serially("uh lalah 123", 0, &digits_then_hash),
            sha256_hash("123")
        );
        let twice = [TransformFlag::HASH, TransformFlag::HASH];
        assert_eq!(transform_serially("x", 0, &twice), sha256_hash(&sha256_hash("x")));
    }

    #[test]
    fn test_serial_title_is_plain_uppercase() {
        assert_eq!(transform_serially("name lastname", 0, &[TransformFlag::TITLE_CASE]), "NAME LASTNAME");
    }

    #[test]
    fn test_serial_does_not_trim_after_truncation() {
        let steps = [TransformFlag::TRIM];
        assert_eq!(transform_serially("  ab cd", 3, &steps), "ab ");
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(TransformFlag::parse_flag("only-letters-and-digits").unwrap(), TransformFlag::ONLY_LETTERS_AND_DIGITS);
        assert_eq!(TransformFlag::parse_flag("HASH").unwrap(), TransformFlag::HASH);
        assert!(TransformFlag::parse_flag("reverse").is_err());
    }
}
