// stringo-chars/src/lib.rs
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod codepoint;
pub mod scan;
pub mod words;

pub use codepoint::{
    is_ascii, is_denied_space, is_letter, is_lower, is_number, is_punctuation_symbol, is_space,
    is_symbol, is_unicode_symbol, is_upper,
};
pub use scan::{
    has_denied_space, has_letter, has_lowercase, has_non_ascii, has_number, has_only_digits,
    has_only_letters, has_only_numbers, has_symbol, has_uppercase,
};
pub use words::{char_count, word_count};

/// Highest codepoint still considered ASCII.
pub const MAX_ASCII: char = '\u{7f}';
