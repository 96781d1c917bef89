// stringo-core/src/text.rs
//! Text utilities shared by the engines and the helper modules.
//!
//! Everything here is codepoint-aware: lengths and truncation points are
//! counted in Unicode scalar values, never in bytes, so a multi-byte character
//! is never split.
//!
//! License: MIT OR APACHE 2.0

use log::warn;
use sha2::{Digest, Sha256};
use stringo_chars::{is_letter, is_number};

/// Upper bound on rewrite passes performed by [`replace_all`].
pub const MAX_REPLACE_PASSES: usize = 64;

/// [`replace_all`] output may grow to this many bytes, or 64 times the input, whichever is larger.
pub const MAX_REPLACE_OUTPUT_BYTES: usize = 4096;

/// Generates the lowercase hex SHA-256 digest of the given string's UTF-8 bytes.
pub fn sha256_hash(s: &str) -> String {
    hex::encode(Sha256::digest(s.as_bytes()))
}

/// Returns the prefix of `s` holding at most `max_len` codepoints.
/// `max_len == 0` means unlimited.
pub fn truncate_chars(s: &str, max_len: usize) -> &str {
    if max_len == 0 {
        return s;
    }
    match s.char_indices().nth(max_len) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Limits the length of a string to `max_len` codepoints, optionally trimming
/// the result afterwards.
pub fn truncate(s: &str, max_len: usize, trim: bool) -> String {
    let truncated = truncate_chars(s, max_len);
    if trim {
        truncated.trim().to_string()
    } else {
        truncated.to_string()
    }
}

/// Returns the codepoint count after trimming surrounding white space.
pub fn trim_len(s: &str) -> usize {
    s.trim().chars().count()
}

/// Returns the given string written backwards, codepoint by codepoint.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Keeps replacing until there are no more occurrences to replace.
///
/// At every position the pairs are tried in order and the first `from` that
/// matches wins. Pairs with an empty `from` are ignored. Rewrites that never
/// settle (e.g. `"a" -> "aa"`) stop after [`MAX_REPLACE_PASSES`] passes or
/// once the output outgrows its size limit, returning the last bounded result.
pub fn replace_all(original: &str, pairs: &[(&str, &str)]) -> String {
    let pairs: Vec<(&str, &str)> = pairs.iter().copied().filter(|(from, _)| !from.is_empty()).collect();
    let mut current = original.to_string();
    if current.is_empty() || pairs.is_empty() {
        return current;
    }

    let size_limit = original.len().saturating_mul(64).max(MAX_REPLACE_OUTPUT_BYTES);
    for _ in 0..MAX_REPLACE_PASSES {
        let next = replace_once(&current, &pairs);
        if next == current {
            return current;
        }
        if next.len() > size_limit {
            warn!("replace_all output exceeded {} bytes; stopping early.", size_limit);
            return current;
        }
        current = next;
    }

    warn!(
        "replace_all stopped after {} passes without reaching a fixed point.",
        MAX_REPLACE_PASSES
    );
    current
}

fn replace_once(s: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(c) = rest.chars().next() {
        if let Some((from, to)) = pairs.iter().find(|(from, _)| rest.starts_with(from)) {
            out.push_str(to);
            rest = &rest[from.len()..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}

/// Removes every codepoint that is not a number.
pub fn only_digits(s: &str) -> String {
    s.chars().filter(|c| is_number(*c)).collect()
}

/// Removes every codepoint that is not a letter.
pub fn only_letters(s: &str) -> String {
    s.chars().filter(|c| is_letter(*c)).collect()
}

/// Leaves only letters and numbers.
pub fn only_letters_and_numbers(s: &str) -> String {
    s.chars().filter(|c| is_letter(*c) || is_number(*c)).collect()
}

/// Removes numbers without touching any other codepoint class.
pub fn remove_digits(s: &str) -> String {
    s.chars().filter(|c| !is_number(*c)).collect()
}

/// Uppercases the first letter of every word and lowercases the rest.
///
/// A word is a run of letters and numbers; an apostrophe inside a word does
/// not start a new one (`o'neil` becomes `O'neil`).
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if is_letter(c) || is_number(c) {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                push_titlecase(&mut out, c);
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = in_word && c == '\'';
        }
    }
    out
}

/// Pushes the titlecase form of `c`. Only the Latin digraphs and `ß` differ
/// from the uppercase mapping.
fn push_titlecase(out: &mut String, c: char) {
    match c {
        '\u{1C4}'..='\u{1C6}' => out.push('\u{1C5}'),
        '\u{1C7}'..='\u{1C9}' => out.push('\u{1C8}'),
        '\u{1CA}'..='\u{1CC}' => out.push('\u{1CB}'),
        '\u{1F1}'..='\u{1F3}' => out.push('\u{1F2}'),
        'ß' => out.push_str("Ss"),
        _ => out.extend(c.to_uppercase()),
    }
}

/// Maps every codepoint to its uppercase form, with no word awareness.
pub fn to_title(s: &str) -> String {
    s.to_uppercase()
}
