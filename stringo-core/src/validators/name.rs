// stringo-core/src/validators/name.rs
//! Person-name helpers: validation, first/last extraction and initials.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use serde::{Deserialize, Serialize};
use stringo_chars::{char_count, is_letter};

use crate::engines::transform_engine::{transform, TransformFlag};

/// Outcome of [`chk_person_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonNameCheck {
    Ok,
    /// Something other than letters, spaces, `'` or `-` was found.
    Polluted,
    /// Fewer than two words.
    TooFewWords,
    /// Empty name where an empty one is not accepted.
    TooShort,
    /// No word of three codepoints together with another word of two.
    TooSimple,
}

impl PersonNameCheck {
    pub fn is_ok(self) -> bool {
        self == PersonNameCheck::Ok
    }

    pub fn name(self) -> &'static str {
        match self {
            PersonNameCheck::Ok => "ok",
            PersonNameCheck::Polluted => "polluted",
            PersonNameCheck::TooFewWords => "too-few-words",
            PersonNameCheck::TooShort => "too-short",
            PersonNameCheck::TooSimple => "too-simple",
        }
    }
}

impl fmt::Display for PersonNameCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn is_name_char(c: char) -> bool {
    is_letter(c) || c == ' ' || c == '\'' || c == '-'
}

/// Checks that `name` looks like a complete person name: at least two words,
/// one of them with three or more codepoints and another with two or more.
pub fn chk_person_name(name: &str, accept_empty: bool) -> PersonNameCheck {
    let name = name.trim();

    if name.is_empty() {
        return if accept_empty {
            PersonNameCheck::Ok
        } else {
            PersonNameCheck::TooShort
        };
    }

    if !name.chars().all(is_name_char) {
        return PersonNameCheck::Polluted;
    }

    let words: Vec<&str> = name.split_whitespace().collect();
    if words.len() < 2 {
        return PersonNameCheck::TooFewWords;
    }

    let mut found2 = false;
    let mut found3 = false;
    for word in words {
        let len = word.chars().count();
        if !found3 && len >= 3 {
            found3 = true;
        } else if !found2 && len >= 2 {
            found2 = true;
        }
    }

    if found2 && found3 {
        PersonNameCheck::Ok
    } else {
        PersonNameCheck::TooSimple
    }
}

/// Tabs become spaces, then the flags are applied (unless `NONE`) with the
/// whole name as the length limit, then surrounding space is trimmed.
fn prepare(name: &str, flags: TransformFlag) -> String {
    let name = name.replace('\t', " ");
    let name = if flags == TransformFlag::NONE {
        name
    } else {
        let len = char_count(&name);
        transform(&name, len, flags)
    };
    name.trim().to_string()
}

/// Returns the first and last words of `name`, optionally transformed.
///
/// `name_first_and_last("friedrich wilhelm nietzsche", TransformFlag::TITLE_CASE)`
/// returns `"Friedrich Nietzsche"`.
pub fn name_first_and_last(name: &str, flags: TransformFlag) -> String {
    let name = prepare(name, flags);
    if name.is_empty() {
        return name;
    }

    let words: Vec<&str> = name.split(' ').collect();
    match words.as_slice() {
        [only] => only.to_string(),
        [first, .., last] => format!("{} {}", first, last),
        [] => String::new(),
    }
}

/// Returns the first word of `name`, optionally transformed.
pub fn name_first(name: &str, flags: TransformFlag) -> String {
    let name = prepare(name, flags);
    name.split(' ').next().unwrap_or_default().to_string()
}

/// Returns the first codepoint of every white-space separated word, joined
/// by single spaces, after applying `flags`.
pub fn initials(name: &str, flags: TransformFlag) -> String {
    let name = prepare(name, flags);
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chk_person_name() {
        let cases = [
            ("T S", false, PersonNameCheck::TooSimple),
            ("AB CD", false, PersonNameCheck::TooSimple),
            ("ça vá", false, PersonNameCheck::TooSimple),
            ("W0RDS W1TH NUMB3RS", false, PersonNameCheck::Polluted),
            ("", true, PersonNameCheck::Ok),
            ("     ", true, PersonNameCheck::Ok),
            (" ", false, PersonNameCheck::TooShort),
            (" 5454 ", true, PersonNameCheck::Polluted),
            ("ONEWORD", false, PersonNameCheck::TooFewWords),
            ("AB CDE", false, PersonNameCheck::Ok),
            ("ÑÔÑÀSÇÏÏ ÇÃO ÀË", false, PersonNameCheck::Ok),
            ("WORDS-WITH SYMBOLS'", false, PersonNameCheck::Ok),
            ("WORDS WITH SYMBOLS`", false, PersonNameCheck::Polluted),
            ("a", false, PersonNameCheck::TooFewWords),
            ("5454", false, PersonNameCheck::Polluted),
        ];
        for (name, accept_empty, expected) in cases {
            assert_eq!(chk_person_name(name, accept_empty), expected, "name {:?}", name);
        }
    }

    #[test]
    fn test_name_first_and_last() {
        let cases = [
            ("x Y", TransformFlag::NONE, "x Y"),
            ("çá öáã àÿ", TransformFlag::UPPERCASE, "ÇÁ ÀŸ"),
            ("W0RDS W1TH NUMB3RS", TransformFlag::REMOVE_DIGITS, "WRDS NUMBRS"),
            (" FIRST NAME - MIDDLENAME \tLAST\t ", TransformFlag::NONE, "FIRST LAST"),
            ("name LASTNAME", TransformFlag::TITLE_CASE, "Name Lastname"),
            ("friedrich wilhelm nietzsche", TransformFlag::TITLE_CASE, "Friedrich Nietzsche"),
            ("single", TransformFlag::NONE, "single"),
            ("   ", TransformFlag::NONE, ""),
        ];
        for (name, flags, expected) in cases {
            assert_eq!(name_first_and_last(name, flags), expected, "name {:?}", name);
        }
    }

    #[test]
    fn test_name_first() {
        assert_eq!(name_first("friedrich wilhelm nietzsche", TransformFlag::TITLE_CASE), "Friedrich");
        assert_eq!(name_first("\tx Y", TransformFlag::NONE), "x");
        assert_eq!(name_first("", TransformFlag::UPPERCASE), "");
    }

    #[test]
    fn test_initials() {
        let cases = [
            ("miguel pragier", TransformFlag::NONE, "m p"),
            ("ivan alexandrovitch kleshtakov", TransformFlag::NONE, "i a k"),
            ("Ívän Âlexandrovitch Çzelyatchenko", TransformFlag::NONE, "Í Â Ç"),
            ("ívän âlexandrovitch çzelyatchenko", TransformFlag::TITLE_CASE, "Í Â Ç"),
            ("", TransformFlag::NONE, ""),
            (".", TransformFlag::NONE, "."),
            ("  \t\t \n", TransformFlag::NONE, ""),
            ("richard\t\tstallmann", TransformFlag::NONE, "r s"),
            ("dom pedro 1", TransformFlag::NONE, "d p 1"),
            ("dom pedro I", TransformFlag::UPPERCASE, "D P I"),
            ("x y z", TransformFlag::NONE, "x y z"),
            ("asingleword", TransformFlag::NONE, "a"),
            ("name,with,comma,separators", TransformFlag::NONE, "n"),
        ];
        for (name, flags, expected) in cases {
            assert_eq!(initials(name, flags), expected, "name {:?}", name);
        }
    }
}
