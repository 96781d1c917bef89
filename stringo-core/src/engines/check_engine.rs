// stringo-core/src/engines/check_engine.rs
//! The validation engine.
//!
//! [`check_str`] classifies a string against a [`ChkRule`] set and reports the
//! first violated rule as a [`ChkResult`]. "Deny" rules are always evaluated
//! before "Require" rules, so a deny violation wins when both would apply.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use bitflags::bitflags;
use log::trace;
use serde::{Deserialize, Serialize};
use stringo_chars::{
    char_count, has_denied_space, has_letter, has_lowercase, has_non_ascii, has_number,
    has_symbol, has_uppercase, word_count,
};

use crate::errors::StringoError;

bitflags! {
    /// Complexity rules understood by [`check_str`].
    ///
    /// `ALLOW_EMPTY` is a switch rather than a constraint; the remaining flags
    /// form the "deny" family (forbid a property) and the "require" family
    /// (mandate a property). Combining a deny and a require for the same
    /// property yields a rule set nothing can satisfy.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ChkRule: u32 {
        /// Allows the empty string `""`.
        const ALLOW_EMPTY = 1;
        /// Forbids spaces, tabs, new lines and carriage returns.
        const DENY_SPACES = 1 << 1;
        /// Forbids digits/numbers.
        const DENY_NUMBERS = 1 << 2;
        /// Forbids letters.
        const DENY_LETTERS = 1 << 3;
        /// Forbids symbols. Anything that is not a number, letter or space is a symbol.
        const DENY_SYMBOLS = 1 << 4;
        /// Forbids more than one word.
        const DENY_MORE_THAN_ONE_WORD = 1 << 5;
        /// Forbids uppercase letters.
        const DENY_UPPERCASE = 1 << 6;
        /// Forbids lowercase letters.
        const DENY_LOWERCASE = 1 << 7;
        /// Forbids non-ASCII codepoints.
        const DENY_UNICODE = 1 << 8;
        /// Demands at least one number.
        const REQUIRE_NUMBERS = 1 << 9;
        /// Demands at least one letter.
        const REQUIRE_LETTERS = 1 << 10;
        /// Demands at least one symbol.
        const REQUIRE_SYMBOLS = 1 << 11;
        /// Demands at least two words.
        const REQUIRE_MORE_THAN_ONE_WORD = 1 << 12;
        /// Demands at least one uppercase letter.
        const REQUIRE_UPPERCASE = 1 << 13;
        /// Demands at least one lowercase letter.
        const REQUIRE_LOWERCASE = 1 << 14;
    }
}

impl ChkRule {
    /// Every flag of the deny family.
    pub const DENY_FAMILY: ChkRule = ChkRule::DENY_SPACES
        .union(ChkRule::DENY_NUMBERS)
        .union(ChkRule::DENY_LETTERS)
        .union(ChkRule::DENY_SYMBOLS)
        .union(ChkRule::DENY_MORE_THAN_ONE_WORD)
        .union(ChkRule::DENY_UPPERCASE)
        .union(ChkRule::DENY_LOWERCASE)
        .union(ChkRule::DENY_UNICODE);

    /// Every flag of the require family.
    pub const REQUIRE_FAMILY: ChkRule = ChkRule::REQUIRE_NUMBERS
        .union(ChkRule::REQUIRE_LETTERS)
        .union(ChkRule::REQUIRE_SYMBOLS)
        .union(ChkRule::REQUIRE_MORE_THAN_ONE_WORD)
        .union(ChkRule::REQUIRE_UPPERCASE)
        .union(ChkRule::REQUIRE_LOWERCASE);

    /// Parses a single rule name. Accepts both `DENY_SPACES` and `deny-spaces`.
    pub fn parse_rule(name: &str) -> Result<Self, StringoError> {
        let normalized = name.trim().replace('-', "_").to_ascii_uppercase();
        Self::from_name(&normalized).ok_or_else(|| StringoError::UnknownRule(name.to_string()))
    }

    /// Pairs of deny/require flags that target the same property and are both set.
    ///
    /// Such a rule set can never return [`ChkResult::Ok`] for a non-empty input.
    pub fn contradictions(self) -> Vec<(ChkRule, ChkRule)> {
        const PAIRS: [(ChkRule, ChkRule); 4] = [
            (ChkRule::DENY_NUMBERS, ChkRule::REQUIRE_NUMBERS),
            (ChkRule::DENY_LETTERS, ChkRule::REQUIRE_LETTERS),
            (ChkRule::DENY_SYMBOLS, ChkRule::REQUIRE_SYMBOLS),
            (ChkRule::DENY_MORE_THAN_ONE_WORD, ChkRule::REQUIRE_MORE_THAN_ONE_WORD),
        ];
        let mut found: Vec<(ChkRule, ChkRule)> = PAIRS
            .into_iter()
            .filter(|(deny, require)| self.contains(*deny) && self.contains(*require))
            .collect();
        // Case rules clash with each other too: no letters of a case, yet one is required.
        for (deny, require) in [
            (ChkRule::DENY_UPPERCASE, ChkRule::REQUIRE_UPPERCASE),
            (ChkRule::DENY_LOWERCASE, ChkRule::REQUIRE_LOWERCASE),
            (ChkRule::DENY_LETTERS, ChkRule::REQUIRE_UPPERCASE),
            (ChkRule::DENY_LETTERS, ChkRule::REQUIRE_LOWERCASE),
        ] {
            if self.contains(deny) && self.contains(require) {
                found.push((deny, require));
            }
        }
        found
    }
}

/// The outcome of [`check_str`]: success, or the single rule that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChkResult {
    Ok,
    EmptyDenied,
    TooShort,
    TooLong,
    SpaceDenied,
    NumbersDenied,
    LettersDenied,
    SymbolsDenied,
    MoreThanOneWordDenied,
    UpperCaseDenied,
    LowercaseDenied,
    UnicodeDenied,
    NumbersNotFound,
    LettersNotFound,
    SymbolsNotFound,
    MoreThanOneWordNotFound,
    UpperCaseNotFound,
    LowercaseNotFound,
}

impl ChkResult {
    pub fn is_ok(self) -> bool {
        self == ChkResult::Ok
    }

    /// Stable numeric code. `0` is success, failures are negative.
    pub fn code(self) -> i32 {
        match self {
            ChkResult::Ok => 0,
            ChkResult::EmptyDenied => -1,
            ChkResult::TooShort => -2,
            ChkResult::TooLong => -4,
            ChkResult::SpaceDenied => -5,
            ChkResult::NumbersDenied => -6,
            ChkResult::LettersDenied => -7,
            ChkResult::SymbolsDenied => -8,
            ChkResult::MoreThanOneWordDenied => -9,
            ChkResult::UpperCaseDenied => -10,
            ChkResult::LowercaseDenied => -11,
            ChkResult::UnicodeDenied => -12,
            ChkResult::NumbersNotFound => -13,
            ChkResult::LettersNotFound => -14,
            ChkResult::SymbolsNotFound => -15,
            ChkResult::MoreThanOneWordNotFound => -16,
            ChkResult::UpperCaseNotFound => -17,
            ChkResult::LowercaseNotFound => -18,
        }
    }

    /// Kebab-case name, identical to the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            ChkResult::Ok => "ok",
            ChkResult::EmptyDenied => "empty-denied",
            ChkResult::TooShort => "too-short",
            ChkResult::TooLong => "too-long",
            ChkResult::SpaceDenied => "space-denied",
            ChkResult::NumbersDenied => "numbers-denied",
            ChkResult::LettersDenied => "letters-denied",
            ChkResult::SymbolsDenied => "symbols-denied",
            ChkResult::MoreThanOneWordDenied => "more-than-one-word-denied",
            ChkResult::UpperCaseDenied => "upper-case-denied",
            ChkResult::LowercaseDenied => "lowercase-denied",
            ChkResult::UnicodeDenied => "unicode-denied",
            ChkResult::NumbersNotFound => "numbers-not-found",
            ChkResult::LettersNotFound => "letters-not-found",
            ChkResult::SymbolsNotFound => "symbols-not-found",
            ChkResult::MoreThanOneWordNotFound => "more-than-one-word-not-found",
            ChkResult::UpperCaseNotFound => "upper-case-not-found",
            ChkResult::LowercaseNotFound => "lowercase-not-found",
        }
    }
}

impl fmt::Display for ChkResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only facts about an input, computed once per check.
///
/// `contains_uppercase` and `contains_lowercase` are only meaningful when
/// `contains_letter` is true; without letters they are always false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ClassificationFacts {
    pub is_empty: bool,
    pub contains_number: bool,
    pub contains_letter: bool,
    pub contains_symbol: bool,
    pub contains_uppercase: bool,
    pub contains_lowercase: bool,
    pub more_than_one_word: bool,
}

impl ClassificationFacts {
    pub fn of(input: &str) -> Self {
        let contains_letter = has_letter(input);
        Self {
            is_empty: input.is_empty(),
            contains_number: has_number(input),
            contains_letter,
            contains_symbol: has_symbol(input),
            contains_uppercase: contains_letter && has_uppercase(input),
            contains_lowercase: contains_letter && has_lowercase(input),
            more_than_one_word: word_count(input) > 1,
        }
    }
}

/// Validates a string according to the given complexity rules.
///
/// Length is counted in codepoints. `min_len == 0` means there is no minimum
/// and `max_len == 0` means there is no maximum. An empty input bypasses every
/// other rule: it is accepted if and only if [`ChkRule::ALLOW_EMPTY`] is set.
pub fn check_str(input: &str, min_len: usize, max_len: usize, rules: ChkRule) -> ChkResult {
    let result = evaluate(input, min_len, max_len, rules);
    trace!(
        "check_str: {} codepoints, rules={:?} -> {}",
        char_count(input),
        rules,
        result
    );
    result
}

fn evaluate(input: &str, min_len: usize, max_len: usize, rules: ChkRule) -> ChkResult {
    if input.is_empty() {
        return if rules.contains(ChkRule::ALLOW_EMPTY) {
            ChkResult::Ok
        } else {
            ChkResult::EmptyDenied
        };
    }

    let len = char_count(input);

    if len < min_len {
        return ChkResult::TooShort;
    }

    if max_len > 0 && len > max_len {
        return ChkResult::TooLong;
    }

    if rules.contains(ChkRule::DENY_SPACES) && has_denied_space(input) {
        return ChkResult::SpaceDenied;
    }

    let contains_number = has_number(input);
    let contains_letter = has_letter(input);
    let contains_symbol = has_symbol(input);
    let more_than_one_word = word_count(input) > 1;

    if rules.contains(ChkRule::DENY_NUMBERS) && contains_number {
        return ChkResult::NumbersDenied;
    }

    if rules.contains(ChkRule::DENY_LETTERS) && contains_letter {
        return ChkResult::LettersDenied;
    }

    if rules.contains(ChkRule::DENY_SYMBOLS) && contains_symbol {
        return ChkResult::SymbolsDenied;
    }

    if rules.contains(ChkRule::DENY_MORE_THAN_ONE_WORD) && more_than_one_word {
        return ChkResult::MoreThanOneWordDenied;
    }

    let contains_uppercase = contains_letter && has_uppercase(input);
    let contains_lowercase = contains_letter && has_lowercase(input);

    if rules.contains(ChkRule::DENY_UPPERCASE) && contains_uppercase {
        return ChkResult::UpperCaseDenied;
    }

    if rules.contains(ChkRule::DENY_LOWERCASE) && contains_lowercase {
        return ChkResult::LowercaseDenied;
    }

    if rules.contains(ChkRule::DENY_UNICODE) && has_non_ascii(input) {
        return ChkResult::UnicodeDenied;
    }

    // Require rules, in fixed order, only after every deny rule passed.
    let requirements = [
        (ChkRule::REQUIRE_NUMBERS, contains_number, ChkResult::NumbersNotFound),
        (ChkRule::REQUIRE_LETTERS, contains_letter, ChkResult::LettersNotFound),
        (ChkRule::REQUIRE_SYMBOLS, contains_symbol, ChkResult::SymbolsNotFound),
        (ChkRule::REQUIRE_MORE_THAN_ONE_WORD, more_than_one_word, ChkResult::MoreThanOneWordNotFound),
        (ChkRule::REQUIRE_UPPERCASE, contains_uppercase, ChkResult::UpperCaseNotFound),
        (ChkRule::REQUIRE_LOWERCASE, contains_lowercase, ChkResult::LowercaseNotFound),
    ];

    for (rule, present, failure) in requirements {
        if rules.contains(rule) && !present {
            return failure;
        }
    }

    ChkResult::Ok
}
