//! Per-codepoint classification.
//!
//! Every predicate here looks at exactly one Unicode scalar value. The string
//! level helpers in [`crate::scan`] are thin folds over these.

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::MAX_ASCII;

/// ASCII punctuation accepted by [`is_punctuation_symbol`].
const PUNCTUATION_SYMBOLS: &str = "!\"#$%&'()*+\u{b4}-./:;<=>?@[\\]^_`{|}~";

/// Returns `true` for codepoints in any Unicode number category (Nd, Nl, No).
#[inline]
pub fn is_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::DecimalNumber | GeneralCategory::LetterNumber | GeneralCategory::OtherNumber
    )
}

/// Returns `true` for codepoints in a Unicode letter category (Lu, Ll, Lt, Lm, Lo).
///
/// Marks and enclosed letters such as `Ⓐ` are not letters.
#[inline]
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Returns `true` for codepoints in a Unicode symbol category (Sm, Sc, Sk, So).
#[inline]
pub fn is_unicode_symbol(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

/// Returns `true` for Unicode white space (space, tab, line breaks, NBSP, ...).
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// A symbol is a codepoint in a Unicode symbol category, or anything that is
/// neither a letter, a number nor a space.
///
/// The residual part makes punctuation, marks, controls and unassigned
/// codepoints count as symbols too.
#[inline]
pub fn is_symbol(c: char) -> bool {
    is_unicode_symbol(c) || (!is_letter(c) && !is_number(c) && !is_space(c))
}

/// Uppercase letters (Lu) only. Titlecase digraphs and `Ⅷ` do not count.
#[inline]
pub fn is_upper(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::UppercaseLetter)
}

/// Lowercase letters (Ll) only.
#[inline]
pub fn is_lower(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::LowercaseLetter)
}

#[inline]
pub fn is_ascii(c: char) -> bool {
    c <= MAX_ASCII
}

/// The four separators rejected by a "deny spaces" rule.
#[inline]
pub fn is_denied_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Returns `true` if `c` is one of the fixed ASCII punctuation symbols.
pub fn is_punctuation_symbol(c: char) -> bool {
    PUNCTUATION_SYMBOLS.contains(c)
}
