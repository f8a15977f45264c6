//! Keyword tables for year, source and resolution detection.
//!
//! The source table is an ordered list: when several keywords could match the
//! same token, the one listed first wins, not the longest one.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Source keywords in priority order, as `(name, pattern)` pairs.
const SOURCE_KEYWORDS: &[(&str, &str)] = &[
    ("BluRay", r"BluRay"),
    ("WEB-DL", r"WEB[-. ]?DL"),
    ("WEBRip", r"WEB[-. ]?Rip"),
    ("HDRip", r"HDRip"),
    ("DVDRip", r"DVDRip"),
    ("HDCAM", r"HDCAM"),
    ("HDTS", r"HDTS"),
    ("CAMRip", r"CAMRip"),
    ("SCREENER", r"SCREENER"),
    ("HMAX", r"HMAX"),
    ("AMZN", r"AMZN"),
    // Substring match: also fires inside words such as "CONFINED".
    ("NF", r"NF"),
    ("HULU", r"HULU"),
    ("BDRip", r"BDRip"),
];

/// A single entry of the source keyword table.
#[derive(Debug)]
pub struct SourcePattern {
    /// Canonical name of the keyword.
    pub name: &'static str,
    regex: Regex,
}

impl SourcePattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: case_insensitive(pattern),
        }
    }

    /// Find this keyword at a token.
    ///
    /// `rest` is the raw input starting at the token and `token_len` the
    /// token's byte length. The match must begin inside the token but may run
    /// past it, so `WEB-DL` is found starting at the `WEB` token.
    pub fn find_at<'a>(&self, rest: &'a str, token_len: usize) -> Option<&'a str> {
        self.regex
            .find(rest)
            .filter(|m| m.start() < token_len)
            .map(|m| m.as_str())
    }
}

/// The ordered source keyword table.
pub static SOURCE_PATTERNS: LazyLock<Vec<SourcePattern>> = LazyLock::new(|| {
    SOURCE_KEYWORDS
        .iter()
        .map(|(name, pattern)| SourcePattern::new(name, pattern))
        .collect()
});

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| case_insensitive(r"^(?:19[0-9]{2}|20[0-9]{2}|210[0-9])$"));

static RESOLUTION: LazyLock<Regex> =
    LazyLock::new(|| case_insensitive(r"480p|720p|1080p|2160p|4K|8K"));

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("keyword patterns are valid regexes")
}

/// Whether a whole token is a year in the range 1900-2109.
pub fn is_year(token: &str) -> bool {
    YEAR.is_match(token)
}

/// Find the first source keyword at a token, in table order.
///
/// Returns the matched text verbatim (e.g. `WEB-DL`, `bluray`).
pub fn find_source(rest: &str, token_len: usize) -> Option<&str> {
    SOURCE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find_at(rest, token_len))
}

/// Find a resolution tag inside a token, returning the matched text verbatim.
pub fn find_resolution(token: &str) -> Option<&str> {
    RESOLUTION.find(token).map(|m| m.as_str())
}
