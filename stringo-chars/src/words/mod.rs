//! Word and length accounting.

/// Number of non-empty fields after splitting on Unicode white space.
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Length in codepoints (Unicode scalar values), not bytes.
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}
