// stringo-core/src/datetime.rs
//! Date formatting with a readable layout language.
//!
//! Layouts are written with the tokens below (case-insensitive) and are
//! translated into `chrono` strftime directives. Longer tokens win, so `mmmm`
//! is a month name and never four numeric months. Every other character is
//! copied literally.
//!
//! | token  | meaning                         | example   |
//! |--------|---------------------------------|-----------|
//! | `yyyy` | four-digit year                 | `2018`    |
//! | `yy`   | two-digit year                  | `18`      |
//! | `mmmm` | full month name                 | `October` |
//! | `mmm`  | abbreviated month name          | `Oct`     |
//! | `mm`   | zero-padded month               | `09`      |
//! | `m`    | month                           | `9`       |
//! | `dd`   | zero-padded day                 | `01`      |
//! | `d`    | day                             | `1`       |
//! | `hh24` | zero-padded 24-hour clock       | `13`      |
//! | `hh`   | zero-padded 12-hour clock + AM/PM | `01 PM` |
//! | `h`    | 12-hour clock + AM/PM           | `1 PM`    |
//! | `nn`   | zero-padded minutes             | `04`      |
//! | `n`    | minutes                         | `4`       |
//! | `ss`   | zero-padded seconds             | `05`      |
//! | `s`    | seconds                         | `5`       |
//! | `ww`   | full weekday name               | `Monday`  |
//! | `w`    | abbreviated weekday name        | `Mon`     |
//!
//! License: MIT OR APACHE 2.0

use chrono::format::ParseErrorKind;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;

use crate::errors::StringoError;

// Ordered so that every token precedes its own prefixes.
const LAYOUT_TOKENS: &[(&str, &str)] = &[
    ("yyyy", "%Y"),
    ("yy", "%y"),
    ("mmmm", "%B"),
    ("mmm", "%b"),
    ("mm", "%m"),
    ("m", "%-m"),
    ("dd", "%d"),
    ("d", "%-d"),
    ("hh24", "%H"),
    ("hh", "%I %p"),
    ("h", "%-I %p"),
    ("nn", "%M"),
    ("n", "%-M"),
    ("ss", "%S"),
    ("s", "%-S"),
    ("ww", "%A"),
    ("w", "%a"),
];

/// Translates a layout into a strftime format string.
pub fn layout_to_strftime(layout: &str) -> String {
    let lower = layout.to_lowercase();
    let mut out = String::with_capacity(lower.len() * 2);
    let mut rest = lower.as_str();

    while let Some(c) = rest.chars().next() {
        if let Some((token, directive)) = LAYOUT_TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
            out.push_str(directive);
            rest = &rest[token.len()..];
            continue;
        }
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Formats `dt` with the given layout. An empty layout yields an empty string.
pub fn date_time_as_string(dt: &NaiveDateTime, layout: &str) -> String {
    if layout.is_empty() {
        return String::new();
    }
    dt.format(&layout_to_strftime(layout)).to_string()
}

/// Parses `input` with `layout`. Date-only layouts resolve to midnight.
///
/// The date-only attempt runs only when the full parse lacked time fields, and
/// its error is the one reported.
pub fn parse_date_time(input: &str, layout: &str) -> Result<NaiveDateTime, StringoError> {
    let format = layout_to_strftime(layout);
    let parse_error = |source: chrono::ParseError| StringoError::DateParse {
        input: input.to_string(),
        layout: layout.to_string(),
        source,
    };
    match NaiveDateTime::parse_from_str(input, &format) {
        Ok(dt) => Ok(dt),
        Err(full_err) if full_err.kind() == ParseErrorKind::NotEnough => {
            debug!("'{}' is not a full date-time for '{}', trying date only: {}", input, format, full_err);
            NaiveDate::parse_from_str(input, &format)
                .map(|date| date.and_time(NaiveTime::MIN))
                .map_err(parse_error)
        }
        Err(full_err) => Err(parse_error(full_err)),
    }
}

/// Reads `input` written in `current_layout` and rewrites it in `new_layout`.
pub fn date_reformat(input: &str, current_layout: &str, new_layout: &str) -> Result<String, StringoError> {
    let dt = parse_date_time(input, current_layout)?;
    Ok(date_time_as_string(&dt, new_layout))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 10, 31)
            .and_then(|d| d.and_hms_opt(1, 2, 2))
            .unwrap()
    }

    #[test]
    fn test_date_time_as_string() {
        let dt = sample();
        assert_eq!(date_time_as_string(&dt, "yyyymmdd"), "20181031");
        assert_eq!(date_time_as_string(&dt, "yyyy-mm-dd"), "2018-10-31");
        assert_eq!(date_time_as_string(&dt, "dd/mm/YYYY"), "31/10/2018");
        assert_eq!(date_time_as_string(&dt, "hh24:nn:ss"), "01:02:02");
        assert_eq!(date_time_as_string(&dt, "d/m/yy h:n"), "31/10/18 1 AM:2");
        assert_eq!(date_time_as_string(&dt, "ww, mmmm d"), "Wednesday, October 31");
        assert_eq!(date_time_as_string(&dt, "w mmm"), "Wed Oct");
        assert_eq!(date_time_as_string(&dt, ""), "");
    }

    #[test]
    fn test_layout_translation() {
        assert_eq!(layout_to_strftime("yyyy-mm-dd hh24:nn"), "%Y-%m-%d %H:%M");
        assert_eq!(layout_to_strftime("100%"), "100%%");
        assert_eq!(layout_to_strftime("MMMM"), "%B");
    }

    #[test]
    fn test_date_reformat() {
        assert_eq!(date_reformat("2018-10-31", "yyyy-mm-dd", "dd/mm/yyyy").unwrap(), "31/10/2018");
        assert_eq!(
            date_reformat("31/10/2018 13:45", "dd/mm/yyyy hh24:nn", "yyyymmdd hh24nn").unwrap(),
            "20181031 1345"
        );
    }

    #[test]
    fn test_date_only_failure_keeps_its_own_error() {
        let err = parse_date_time("2018-02-30", "yyyy-mm-dd").unwrap_err();
        match err {
            StringoError::DateParse { source, .. } => assert_eq!(source.kind(), ParseErrorKind::OutOfRange),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            parse_date_time("2018-02-28", "yyyy-mm-dd").unwrap(),
            NaiveDate::from_ymd_opt(2018, 2, 28).unwrap().and_time(NaiveTime::MIN)
        );
    }

    #[test]
    fn test_date_reformat_rejects_garbage() {
        let err = date_reformat("not a date", "yyyy-mm-dd", "dd/mm/yyyy").unwrap_err();
        assert!(matches!(err, StringoError::DateParse { .. }));
        assert!(date_reformat("2018-13-45", "yyyy-mm-dd", "dd/mm/yyyy").is_err());
    }
}
