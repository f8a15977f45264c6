//! Standardizer configuration.

/// Extensions accepted by default (compared case-insensitively).
pub const DEFAULT_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov"];

/// Source used when no source keyword follows the year.
pub const DEFAULT_SOURCE: &str = "WEB";

/// Resolution used when no resolution tag follows the year.
pub const DEFAULT_RESOLUTION: &str = "1080p";

/// Extension of every standardized name.
pub const OUTPUT_EXTENSION: &str = "mp4";

/// Configuration for the [`Standardizer`](crate::Standardizer).
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use remuxer_parser::config::StandardizerConfig;
///
/// let config = StandardizerConfig::builder()
///     .default_resolution("720p")
///     .build();
/// assert_eq!(config.default_resolution, "720p");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardizerConfig {
    /// Input extensions, lowercase, without the dot.
    /// Default: mp4, mkv, avi, mov
    pub allowed_extensions: Vec<String>,

    /// Default: WEB
    pub default_source: String,

    /// Default: 1080p
    pub default_resolution: String,

    /// Extension written on the standardized name.
    /// Default: mp4
    pub output_extension: String,
}

impl Default for StandardizerConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            default_source: DEFAULT_SOURCE.to_string(),
            default_resolution: DEFAULT_RESOLUTION.to_string(),
            output_extension: OUTPUT_EXTENSION.to_string(),
        }
    }
}

impl StandardizerConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> StandardizerConfigBuilder {
        StandardizerConfigBuilder::default()
    }

    /// Whether `extension` (without the dot) is accepted.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        let extension = extension.to_lowercase();
        self.allowed_extensions.iter().any(|e| *e == extension)
    }
}

/// Builder for `StandardizerConfig`.
#[derive(Debug, Clone, Default)]
pub struct StandardizerConfigBuilder {
    allowed_extensions: Option<Vec<String>>,
    default_source: Option<String>,
    default_resolution: Option<String>,
    output_extension: Option<String>,
}

impl StandardizerConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the accepted input extensions.
    pub fn allowed_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_extensions = Some(
            extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
        );
        self
    }

    /// Set the source used when none is found.
    pub fn default_source(mut self, source: impl Into<String>) -> Self {
        self.default_source = Some(source.into());
        self
    }

    /// Set the resolution used when none is found.
    pub fn default_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.default_resolution = Some(resolution.into());
        self
    }

    /// Set the extension written on standardized names.
    pub fn output_extension(mut self, extension: impl Into<String>) -> Self {
        self.output_extension = Some(extension.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> StandardizerConfig {
        let defaults = StandardizerConfig::default();
        StandardizerConfig {
            allowed_extensions: self
                .allowed_extensions
                .unwrap_or(defaults.allowed_extensions),
            default_source: self.default_source.unwrap_or(defaults.default_source),
            default_resolution: self
                .default_resolution
                .unwrap_or(defaults.default_resolution),
            output_extension: self.output_extension.unwrap_or(defaults.output_extension),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StandardizerConfig::default();
        assert_eq!(config.allowed_extensions, vec!["mp4", "mkv", "avi", "mov"]);
        assert_eq!(config.default_source, "WEB");
        assert_eq!(config.default_resolution, "1080p");
        assert_eq!(config.output_extension, "mp4");
    }

    #[test]
    fn test_accepts_extension_case_insensitive() {
        let config = StandardizerConfig::new();
        assert!(config.accepts_extension("MKV"));
        assert!(config.accepts_extension("Mov"));
        assert!(!config.accepts_extension("txt"));
        assert!(!config.accepts_extension(""));
    }

    #[test]
    fn test_builder_partial() {
        let config = StandardizerConfig::builder()
            .allowed_extensions([".TS", "m2ts"])
            .build();

        assert!(config.accepts_extension("ts"));
        assert!(config.accepts_extension("m2ts"));
        assert!(!config.accepts_extension("mkv"));
        assert_eq!(config.default_source, "WEB"); // default
    }

    #[test]
    fn test_builder_pattern() {
        let config = StandardizerConfig::builder()
            .default_source("BluRay")
            .default_resolution("2160p")
            .output_extension("mkv")
            .build();

        assert_eq!(config.default_source, "BluRay");
        assert_eq!(config.default_resolution, "2160p");
        assert_eq!(config.output_extension, "mkv");
    }
}
