// stringo-core/src/validators/email.rs
//! E-mail predicates.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_ANCHORED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Invalid regex pattern")
});

static EMAIL_FINDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9_-]+)")
        .expect("Invalid regex pattern")
});

/// Returns `true` if the whole of `email` is a syntactically valid address.
/// Empty input is never valid.
pub fn validate_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_ANCHORED.is_match(email)
}

/// Returns `true` if something shaped like an e-mail address occurs anywhere in `s`.
pub fn str_contains_email(s: &str) -> bool {
    EMAIL_FINDER.is_match(s)
}

/// Returns every e-mail-shaped substring found in `s`, in order.
pub fn find_emails(s: &str) -> Vec<&str> {
    EMAIL_FINDER.find_iter(s).map(|m| m.as_str()).collect()
}
