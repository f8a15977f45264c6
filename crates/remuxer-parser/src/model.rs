//! Data model for extracted name metadata and the canonical file name.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DOT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("dot run pattern is valid"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Metadata pulled out of a file name by a single left-to-right scan.
///
/// `year` is the first token that looks like a year. Tokens before it make up
/// the title; tokens after it are searched for source and resolution, first
/// match wins for each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractedMetadata {
    /// Title tokens in input order. May be empty.
    pub title: Vec<String>,
    /// Four digit year.
    pub year: Option<String>,
    /// Release source text as it appeared (e.g. `WEB-DL`).
    pub source: Option<String>,
    /// Resolution text as it appeared (e.g. `1080p`).
    pub resolution: Option<String>,
}

impl ExtractedMetadata {
    /// The title tokens joined with single spaces.
    pub fn title_text(&self) -> String {
        collapse_whitespace(&self.title.join(" "))
    }
}

/// A standardized file name: `{title} ({year}) {source} {resolution}.{ext}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalName {
    pub title: String,
    pub year: String,
    pub source: String,
    pub resolution: String,
    pub extension: String,
}

impl CanonicalName {
    /// Compose the final file name.
    ///
    /// Runs of `.` collapse to one, `_` becomes a space and the ends are trimmed.
    pub fn file_name(&self) -> String {
        let composed = format!(
            "{} ({}) {} {}.{}",
            self.title, self.year, self.source, self.resolution, self.extension
        );
        DOT_RUN
            .replace_all(&composed, ".")
            .replace('_', " ")
            .trim()
            .to_string()
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

/// Strip the separators a source keyword may carry (`WEB-DL` -> `WEBDL`).
pub fn normalize_source(source: &str) -> String {
    source.replace(['-', '.'], "")
}

/// Collapse runs of whitespace to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
