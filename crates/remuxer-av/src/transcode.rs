//! MP4 remuxing with optional AAC audio conversion.

use crate::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// What happens to the audio streams during the remux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioMode {
    /// Copy video, re-encode every audio stream to AAC stereo.
    #[default]
    ConvertAudio,
    /// Copy every stream unchanged.
    KeepAudio,
}

impl AudioMode {
    /// Pick the mode from a "keep original audio" toggle.
    pub fn from_keep_audio(keep_audio: bool) -> Self {
        if keep_audio {
            AudioMode::KeepAudio
        } else {
            AudioMode::ConvertAudio
        }
    }

    /// Human readable label for status output.
    pub fn label(&self) -> &'static str {
        match self {
            AudioMode::ConvertAudio => "REMUX + AAC CONVERSION",
            AudioMode::KeepAudio => "REMUX (keeping original audio)",
        }
    }
}

/// AAC encoder settings for [`AudioMode::ConvertAudio`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AacSettings {
    /// ffmpeg bitrate string.
    pub bitrate: String,
    /// Output channel count (downmix).
    pub channels: u8,
}

impl Default for AacSettings {
    fn default() -> Self {
        Self {
            bitrate: "320k".to_string(),
            channels: 2,
        }
    }
}

/// A single ffmpeg remux invocation.
///
/// ```no_run
/// use remuxer_av::transcode::{AudioMode, Transcode};
/// use std::path::Path;
///
/// Transcode::new("ffmpeg", AudioMode::ConvertAudio)
///     .run(Path::new("movie.mkv"), Path::new("movie.mp4"))?;
/// # Ok::<(), remuxer_av::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Transcode {
    ffmpeg: PathBuf,
    mode: AudioMode,
    aac: AacSettings,
}

impl Transcode {
    /// Create a remux using the given ffmpeg executable.
    pub fn new(ffmpeg: impl Into<PathBuf>, mode: AudioMode) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            mode,
            aac: AacSettings::default(),
        }
    }

    /// Override the AAC settings.
    pub fn aac(mut self, settings: AacSettings) -> Self {
        self.aac = settings;
        self
    }

    /// The audio mode.
    pub fn mode(&self) -> AudioMode {
        self.mode
    }

    /// Build the ffmpeg argument list.
    ///
    /// `-y` is always passed; the caller decides about overwriting before
    /// ffmpeg runs.
    pub fn args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-hide_banner", "-y", "-i"]
            .iter()
            .map(OsString::from)
            .collect();
        args.push(input.as_os_str().to_owned());

        match self.mode {
            AudioMode::ConvertAudio => {
                args.extend(
                    ["-map", "0:v", "-map", "0:a", "-c:v", "copy", "-c:a", "aac", "-b:a"]
                        .iter()
                        .map(OsString::from),
                );
                args.push(OsString::from(&self.aac.bitrate));
                args.push(OsString::from("-ac"));
                args.push(OsString::from(self.aac.channels.to_string()));
            }
            AudioMode::KeepAudio => {
                args.extend(["-map", "0", "-c", "copy"].iter().map(OsString::from));
            }
        }

        args.extend(["-movflags", "+faststart"].iter().map(OsString::from));
        args.push(output.as_os_str().to_owned());
        args
    }

    /// Run ffmpeg to completion.
    ///
    /// ffmpeg's progress output is passed through to the terminal.
    ///
    /// # Errors
    ///
    /// - [`Error::ToolNotFound`] if the executable cannot be spawned.
    /// - [`Error::ToolExited`] with the exit code if ffmpeg fails.
    pub fn run(&self, input: &Path, output: &Path) -> Result<()> {
        let tool = self.tool_name();

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Remuxing {:?} -> {:?} ({})",
            input,
            output,
            self.mode.label()
        );

        let status = Command::new(&self.ffmpeg)
            .args(self.args(input, output))
            .stdin(Stdio::null())
            .status()
            .map_err(|e| Error::from_spawn(&tool, e))?;

        if !status.success() {
            return Err(Error::ToolExited {
                tool,
                code: status.code(),
            });
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Remux complete: {:?}", output);

        Ok(())
    }

    fn tool_name(&self) -> String {
        self.ffmpeg
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.ffmpeg.to_string_lossy().to_string())
    }
}
