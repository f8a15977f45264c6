//! # remuxer-parser
//!
//! Turns scene-style movie file names into a canonical
//! `Title (Year) Source Resolution.mp4` name.
//!
//! The name is split into tokens on `.`, `-`, `_`, space, parentheses and
//! square brackets. The first token that is a year (1900-2109) splits the name:
//! tokens before it form the title, tokens after it are searched for a release
//! source (`BluRay`, `WEB-DL`, ...) and a resolution (`1080p`, `4K`, ...).
//!
//! ## Quick Start
//!
//! ```
//! use remuxer_parser::standardize;
//!
//! assert_eq!(
//!     standardize("The.Matrix.1999.1080p.BluRay.x264.mkv").as_deref(),
//!     Some("The Matrix (1999) BluRay 1080p.mp4")
//! );
//!
//! // No year, no standardized name.
//! assert_eq!(standardize("movie.mkv"), None);
//! ```
//!
//! ## Configurable Standardizing
//!
//! ```
//! use remuxer_parser::Standardizer;
//! use remuxer_parser::config::StandardizerConfig;
//!
//! let config = StandardizerConfig::builder()
//!     .allowed_extensions(["mkv", "ts"])
//!     .build();
//!
//! let standardizer = Standardizer::new(config);
//! assert_eq!(
//!     standardizer.standardize("Heat.1995.ts").as_deref(),
//!     Some("Heat (1995) WEB 1080p.mp4")
//! );
//! ```

pub mod config;
pub mod lexer;
pub mod model;
pub mod patterns;

mod parser;

pub use config::StandardizerConfig;
pub use model::{CanonicalName, ExtractedMetadata};
pub use parser::extract;

use std::path::Path;

/// Standardize a file name using the default settings.
///
/// Returns `None` when the extension is not one of mp4, mkv, avi or mov, or
/// when the name has no year token.
pub fn standardize(filename: &str) -> Option<String> {
    Standardizer::default().standardize(filename)
}

/// Split a file name into stem and extension at the last `.`.
///
/// Names without a dot, or with nothing before it (`.mkv`), have no extension.
pub fn split_extension(filename: &str) -> Option<(&str, &str)> {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => Some((stem, ext)),
        _ => None,
    }
}

/// A configurable file name standardizer.
#[derive(Debug, Clone, Default)]
pub struct Standardizer {
    config: StandardizerConfig,
}

impl Standardizer {
    /// Create a new standardizer with the given configuration.
    pub fn new(config: StandardizerConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &StandardizerConfig {
        &self.config
    }

    /// Build the canonical name for a file name.
    ///
    /// Any leading directories are ignored. Returns `None` if the extension is
    /// not accepted or no year token is found.
    pub fn canonical_name(&self, filename: &str) -> Option<CanonicalName> {
        let base = Path::new(filename)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(filename);

        let (stem, extension) = split_extension(base)?;
        if !self.config.accepts_extension(extension) {
            return None;
        }

        let meta = extract(stem);
        let year = meta.year.clone()?;

        let source = meta
            .source
            .as_deref()
            .map(model::normalize_source)
            .unwrap_or_else(|| self.config.default_source.clone());
        let resolution = meta
            .resolution
            .clone()
            .unwrap_or_else(|| self.config.default_resolution.clone());

        Some(CanonicalName {
            title: meta.title_text(),
            year,
            source,
            resolution,
            extension: self.config.output_extension.clone(),
        })
    }

    /// Standardize a file name into `Title (Year) Source Resolution.mp4`.
    pub fn standardize(&self, filename: &str) -> Option<String> {
        self.canonical_name(filename).map(|name| name.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardize_movie() {
        assert_eq!(
            standardize("The.Matrix.1999.1080p.BluRay.x264.mkv").as_deref(),
            Some("The Matrix (1999) BluRay 1080p.mp4")
        );
    }

    #[test]
    fn test_standardize_without_year() {
        assert_eq!(standardize("movie.mkv"), None);
    }

    #[test]
    fn test_standardize_defaults_resolution() {
        assert_eq!(
            standardize("Show.Name.2024.WEB-DL.mkv").as_deref(),
            Some("Show Name (2024) WEBDL 1080p.mp4")
        );
    }

    #[test]
    fn test_standardize_defaults_source() {
        assert_eq!(
            standardize("Arrival.2016.2160p.mp4").as_deref(),
            Some("Arrival (2016) WEB 2160p.mp4")
        );
    }

    #[test]
    fn test_rejects_unknown_extension() {
        assert_eq!(standardize("The.Matrix.1999.1080p.BluRay.txt"), None);
        assert_eq!(standardize("The.Matrix.1999"), None);
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert_eq!(
            standardize("Alien.1979.AVI").as_deref(),
            Some("Alien (1979) WEB 1080p.mp4")
        );
    }

    #[test]
    fn test_year_first_gives_empty_title() {
        assert_eq!(
            standardize("1917.2019.1080p.mkv").as_deref(),
            Some("(1917) WEB 1080p.mp4")
        );
    }

    #[test]
    fn test_ignores_leading_directories() {
        assert_eq!(
            standardize("/data/in/Heat.1995.720p.mkv").as_deref(),
            Some("Heat (1995) WEB 720p.mp4")
        );
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("a.b.mkv"), Some(("a.b", "mkv")));
        assert_eq!(split_extension(".mkv"), None);
        assert_eq!(split_extension("movie"), None);
        assert_eq!(split_extension("movie."), Some(("movie", "")));
    }

    #[test]
    fn test_hidden_file_rejected() {
        assert_eq!(standardize(".mkv"), None);
    }

    #[test]
    fn test_custom_defaults() {
        let standardizer = Standardizer::new(
            StandardizerConfig::builder()
                .default_source("BluRay")
                .default_resolution("720p")
                .build(),
        );
        assert_eq!(
            standardizer.standardize("Heat.1995.mkv").as_deref(),
            Some("Heat (1995) BluRay 720p.mp4")
        );
    }
}
