//! Remux orchestration.
//!
//! [`plan`] decides where the output goes and what it is called;
//! [`Remuxer::run`] stages the ffmpeg run, moves the result into place and
//! checks the audio codec.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{resolve_output_dir, OutputDirectory};
use remuxer_av::{AacSettings, AudioMode, Transcode, Workspace};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension of every output file.
const OUTPUT_EXTENSION: &str = "mp4";

/// Everything decided before ffmpeg runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemuxPlan {
    pub input: PathBuf,
    pub output: PathBuf,
    pub output_dir: OutputDirectory,
    pub file_name: String,
    /// `false` when the name could not be standardized and only the
    /// extension was replaced.
    pub standardized: bool,
    pub mode: AudioMode,
}

/// Output name used when a name cannot be standardized: the input's base
/// name with its extension replaced by `.mp4`.
pub fn fallback_file_name(input: &Path) -> OsString {
    let mut name = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    name
}

/// Plan a remux of `input`.
///
/// # Errors
///
/// Returns [`Error::InputNotFound`] if `input` is not an existing regular
/// file. A name that cannot be standardized is not an error.
pub fn plan(
    input: &Path,
    explicit_dir: Option<&Path>,
    override_dir: Option<&Path>,
    mode: AudioMode,
) -> Result<RemuxPlan> {
    if !input.is_file() {
        return Err(Error::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let standardized_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(remuxer_parser::standardize);

    let (file_name, standardized) = match standardized_name {
        Some(name) => {
            tracing::debug!("Standardized {:?} -> {:?}", input, name);
            (OsString::from(name), true)
        }
        None => {
            let fallback = fallback_file_name(input);
            tracing::warn!(
                "Could not standardize {:?}; using {:?}",
                input.file_name().unwrap_or(input.as_os_str()),
                fallback
            );
            (fallback, false)
        }
    };

    let output_dir = resolve_output_dir(input, explicit_dir, override_dir);
    let output = output_dir.path.join(&file_name);

    Ok(RemuxPlan {
        input: input.to_path_buf(),
        output,
        output_dir,
        file_name: file_name.to_string_lossy().into_owned(),
        standardized,
        mode,
    })
}

/// Outcome of the post-remux audio codec check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCheck {
    /// Not checked: keep-audio mode or verification disabled.
    Skipped,
    /// The first audio stream is AAC.
    Aac,
    /// The first audio stream has another codec.
    Mismatch(String),
    /// The codec could not be determined.
    Unverified(String),
}

impl AudioCheck {
    /// Whether this outcome deserves a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, AudioCheck::Mismatch(_) | AudioCheck::Unverified(_))
    }
}

/// Result of a successful remux.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemuxReport {
    pub output: PathBuf,
    pub audio: AudioCheck,
}

/// Runs planned remuxes.
#[derive(Debug, Clone)]
pub struct Remuxer {
    ffmpeg: PathBuf,
    ffprobe: Option<PathBuf>,
    aac: AacSettings,
    overwrite: bool,
    verify: bool,
}

impl Remuxer {
    /// Create a remuxer using the given ffmpeg executable.
    ///
    /// Overwriting is off and no ffprobe is set, so codec checks report
    /// [`AudioCheck::Unverified`] until one is given.
    pub fn new(ffmpeg: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            ffprobe: None,
            aac: AacSettings::default(),
            overwrite: false,
            verify: true,
        }
    }

    /// Locate the tools and apply settings from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTool`] if ffmpeg cannot be found. A missing
    /// ffprobe only disables the codec check.
    pub fn from_config(config: &Config) -> Result<Self> {
        let ffmpeg = remuxer_av::get_tool_path(
            remuxer_av::tools::FFMPEG,
            config.tools.ffmpeg_path.as_deref(),
        )?;

        let ffprobe = if config.verify.enabled {
            match remuxer_av::get_tool_path(
                remuxer_av::tools::FFPROBE,
                config.tools.ffprobe_path.as_deref(),
            ) {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::warn!("Audio codec check unavailable: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Ok(Self::new(ffmpeg)
            .ffprobe(ffprobe)
            .aac(AacSettings::from(&config.audio))
            .overwrite(config.output.overwrite)
            .verify(config.verify.enabled))
    }

    pub fn ffprobe(mut self, ffprobe: Option<PathBuf>) -> Self {
        self.ffprobe = ffprobe;
        self
    }

    pub fn aac(mut self, settings: AacSettings) -> Self {
        self.aac = settings;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn ffmpeg_path(&self) -> &Path {
        &self.ffmpeg
    }

    /// The transcode this remuxer runs for `plan`.
    pub fn transcode(&self, plan: &RemuxPlan) -> Transcode {
        Transcode::new(&self.ffmpeg, plan.mode).aac(self.aac.clone())
    }

    /// Run a planned remux.
    ///
    /// ffmpeg writes into a staging directory beside the output; the file is
    /// moved to `plan.output` only after ffmpeg succeeds, so a failed run
    /// leaves nothing behind.
    ///
    /// # Errors
    ///
    /// - [`Error::OutputIsInput`] if the output path is the input file.
    /// - [`Error::OutputExists`] if the output exists and overwriting is off.
    /// - [`Error::TranscodeFailed`] if ffmpeg exits with a nonzero status.
    pub fn run(&self, plan: &RemuxPlan) -> Result<RemuxReport> {
        if plan.output.exists() {
            if is_same_file(&plan.input, &plan.output) {
                return Err(Error::OutputIsInput {
                    path: plan.output.clone(),
                });
            }
            if !self.overwrite {
                return Err(Error::OutputExists {
                    path: plan.output.clone(),
                });
            }
            tracing::info!("Replacing existing file {:?}", plan.output);
        }

        let workspace = Workspace::new(&plan.output)?;
        tracing::debug!("Staging output in {:?}", workspace.temp_dir());

        if let Err(e) = self.transcode(plan).run(&plan.input, workspace.staged()) {
            tracing::debug!("Discarding partial output for {:?}", workspace.destination());
            workspace.cleanup();
            return Err(e.into());
        }

        let output = workspace.finalize(self.overwrite)?;
        let audio = self.check_audio(plan.mode, &output);

        Ok(RemuxReport { output, audio })
    }

    fn check_audio(&self, mode: AudioMode, output: &Path) -> AudioCheck {
        if mode == AudioMode::KeepAudio || !self.verify {
            return AudioCheck::Skipped;
        }

        let Some(ffprobe) = &self.ffprobe else {
            return AudioCheck::Unverified("ffprobe not available".to_string());
        };

        match remuxer_av::first_audio_codec(ffprobe, output) {
            Ok(Some(codec)) if remuxer_av::is_aac(&codec) => AudioCheck::Aac,
            Ok(Some(codec)) => AudioCheck::Mismatch(codec),
            Ok(None) => AudioCheck::Unverified("no audio stream found".to_string()),
            Err(e) => AudioCheck::Unverified(e.to_string()),
        }
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
