use remuxer_av::AacSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub audio: AudioConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub verify: VerifyConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Output directory used when no `--output-dir` is given and
    /// `REMUX_OUTPUT_DIR` is unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Replace an existing file at the output path.
    #[serde(default)]
    pub overwrite: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AudioConfig {
    /// AAC bitrate passed to ffmpeg (e.g. "320k").
    #[serde(default = "default_bitrate")]
    pub bitrate: String,

    /// AAC channel count; audio is downmixed to this many channels.
    #[serde(default = "default_channels")]
    pub channels: u8,
}

fn default_bitrate() -> String {
    "320k".to_string()
}

fn default_channels() -> u8 {
    2
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            bitrate: default_bitrate(),
            channels: default_channels(),
        }
    }
}

impl From<&AudioConfig> for AacSettings {
    fn from(config: &AudioConfig) -> Self {
        AacSettings {
            bitrate: config.bitrate.clone(),
            channels: config.channels,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub ffmpeg_path: Option<PathBuf>,

    #[serde(default)]
    pub ffprobe_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyConfig {
    /// Check the output's audio codec after an AAC conversion.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}
