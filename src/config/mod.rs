mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming the override output directory.
pub const OUTPUT_DIR_ENV: &str = "REMUX_OUTPUT_DIR";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./remuxer.toml",
        "~/.config/remuxer/config.toml",
        "/etc/remuxer/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Pick the override output directory.
///
/// A non-empty `REMUX_OUTPUT_DIR` value wins over `output.dir` from the
/// config file. The value is only returned, never checked; the resolver
/// decides whether it is usable.
pub fn override_output_dir(env_value: Option<OsString>, config: &Config) -> Option<PathBuf> {
    env_value
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| config.output.dir.clone())
}

/// Read `REMUX_OUTPUT_DIR` once and combine it with the config file.
pub fn override_output_dir_from_env(config: &Config) -> Option<PathBuf> {
    override_output_dir(std::env::var_os(OUTPUT_DIR_ENV), config)
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.audio.channels == 0 {
        anyhow::bail!("audio.channels must be at least 1");
    }

    if config.audio.bitrate.trim().is_empty() {
        anyhow::bail!("audio.bitrate cannot be empty");
    }

    if let Some(dir) = &config.output.dir {
        if !dir.is_dir() {
            tracing::warn!("Configured output directory does not exist: {:?}", dir);
        }
    }

    for path in [&config.tools.ffmpeg_path, &config.tools.ffprobe_path]
        .into_iter()
        .flatten()
    {
        if !path.exists() {
            tracing::warn!("Configured tool path does not exist: {:?}", path);
        }
    }

    Ok(())
}
