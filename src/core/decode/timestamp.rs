//! Permissive timestamp parsing
//!
//! The export format does not commit to a single timestamp dialect: producer
//! versions have emitted ISO-8601-like, RFC-2822-like, and locale-style
//! forms, with and without explicit offsets. The decoder therefore resolves
//! every timestamp attribute through a [`TimestampParser`] capability, whose
//! default implementation tries a set of explicit formats first and falls
//! back to the `dateparser` crate's broad net.

use chrono::offset::LocalResult;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Timestamp-resolution capability injected into the decoder
///
/// Returns `None` when the text matches no known format; the decoder turns
/// that into a batch-fatal error carrying the attribute name and raw value.
/// Alternate (e.g. stricter) strategies can be substituted without touching
/// decode control flow.
pub trait TimestampParser: Send + Sync {
    /// Resolve `text` to an absolute point in time
    ///
    /// An explicit offset in the text is honored; text without one is given
    /// a best-effort local interpretation.
    fn parse(&self, text: &str) -> Option<DateTime<FixedOffset>>;
}

/// Multi-format timestamp parser
///
/// Accepts, at minimum, RFC 3339, RFC 2822, the exporter's native
/// `2021-01-02 15:04:05 -0700` form, and common locale date/time forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveTimestampParser;

/// Formats that carry an explicit UTC offset
const OFFSET_FORMATS: &[&str] = &[
    // The exporter's native form
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%d %H:%M:%S%z",
];

/// Formats without an offset, interpreted in local time
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%b %e, %Y %l:%M:%S%P",
    "%b %e, %Y %l:%M%P",
    "%B %e, %Y %l:%M:%S%P",
    "%B %e, %Y %l:%M%P",
];

/// Date-only formats, interpreted as local midnight
const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%b %e, %Y", "%B %e, %Y"];

impl TimestampParser for PermissiveTimestampParser {
    fn parse(&self, text: &str) -> Option<DateTime<FixedOffset>> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(dt);
        }

        if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
            return Some(dt);
        }

        for format in OFFSET_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(text, format) {
                return Some(dt);
            }
        }

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
                return resolve_local(naive);
            }
        }

        for format in NAIVE_DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(text, format) {
                return resolve_local(date.and_hms_opt(0, 0, 0)?);
            }
        }

        // Broad net for anything the explicit formats miss
        dateparser::parse_with_timezone(text, &Local)
            .ok()
            .map(|dt| dt.fixed_offset())
    }
}

/// Interpret a naive timestamp in the local timezone
fn resolve_local(naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.fixed_offset()),
        // DST gap repetitions pick the earlier mapping
        LocalResult::Ambiguous(dt, _) => Some(dt.fixed_offset()),
        LocalResult::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use test_case::test_case;

    fn parse(text: &str) -> Option<DateTime<FixedOffset>> {
        PermissiveTimestampParser.parse(text)
    }

    #[test_case("2021-01-02T15:04:05-07:00"; "rfc3339 with offset")]
    #[test_case("2021-01-02T15:04:05Z"; "rfc3339 utc")]
    #[test_case("Sat, 02 Jan 2021 15:04:05 -0700"; "rfc2822")]
    #[test_case("2021-01-02 15:04:05 -0700"; "exporter native")]
    #[test_case("2021-01-02 15:04:05"; "naive datetime")]
    #[test_case("2021-01-02T15:04:05"; "naive iso datetime")]
    #[test_case("2021-01-02 15:04"; "naive datetime no seconds")]
    #[test_case("Jan 2, 2021 3:04pm"; "locale short month")]
    #[test_case("Jan 2, 2021 3:04:05pm"; "locale with seconds")]
    #[test_case("January 2, 2021 3:04pm"; "locale long month")]
    #[test_case("2021-01-02"; "date only")]
    #[test_case("01/02/2021 15:04:05"; "us slash datetime")]
    fn accepts(text: &str) {
        assert!(parse(text).is_some(), "expected {text:?} to parse");
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "whitespace")]
    #[test_case("not a date"; "prose")]
    #[test_case("2021-13-40 99:99:99"; "out of range fields")]
    fn rejects(text: &str) {
        assert!(parse(text).is_none(), "expected {text:?} to be rejected");
    }

    #[test]
    fn explicit_offset_is_honored() {
        let dt = parse("2021-01-02T15:04:05-07:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -7 * 3600);
        assert_eq!(
            dt.with_timezone(&Utc).to_rfc3339(),
            "2021-01-02T22:04:05+00:00"
        );
    }

    #[test]
    fn exporter_native_form_matches_rfc3339_instant() {
        let native = parse("2021-01-02 15:04:05 -0700").unwrap();
        let iso = parse("2021-01-02T15:04:05-07:00").unwrap();
        assert_eq!(native, iso);
    }

    #[test]
    fn dialects_resolve_to_distinguishable_instants() {
        let a = parse("2021-01-02T15:04:05-07:00").unwrap();
        let b = parse("Jan 2, 2021 3:04pm").unwrap();
        let c = parse("2021-01-02 15:04:05").unwrap();

        // b and c share the local interpretation but differ by five seconds
        assert_ne!(b, c);
        // a's offset is explicit and survives parsing
        assert_eq!(a.offset().local_minus_utc(), -7 * 3600);
    }

    #[test]
    fn date_only_is_local_midnight() {
        let dt = parse("2021-01-02").unwrap();
        assert_eq!(dt.time(), chrono::NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }
}
