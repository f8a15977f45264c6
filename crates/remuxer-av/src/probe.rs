//! FFprobe-based audio codec verification.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

/// Codec name expected after an AAC conversion.
pub const AAC: &str = "aac";

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_name: Option<String>,
}

/// Report the codec name of the first audio stream of `path`.
///
/// Returns `Ok(None)` when the file has no audio stream.
pub fn first_audio_codec(ffprobe: &Path, path: &Path) -> Result<Option<String>> {
    let output = Command::new(ffprobe)
        .args([
            "-v",
            "error",
            "-select_streams",
            "a:0",
            "-show_entries",
            "stream=codec_name",
            "-of",
            "json",
        ])
        .arg(path)
        .output()
        .map_err(|e| Error::from_spawn("ffprobe", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool_failed("ffprobe", stderr.trim().to_string()));
    }

    let json_str = String::from_utf8(output.stdout)
        .map_err(|e| Error::parse_error("ffprobe", format!("Invalid UTF-8: {}", e)))?;

    parse_first_audio_codec(&json_str)
}

/// Parse ffprobe JSON output into the first stream's codec name.
pub fn parse_first_audio_codec(json: &str) -> Result<Option<String>> {
    let output: FfprobeOutput = serde_json::from_str(json)?;
    Ok(output
        .streams
        .into_iter()
        .next()
        .and_then(|s| s.codec_name)
        .map(|name| name.trim().to_string()))
}

/// Whether a codec name is AAC.
pub fn is_aac(codec: &str) -> bool {
    codec.trim().eq_ignore_ascii_case(AAC)
}
