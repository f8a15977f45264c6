//! Error types for a remux invocation.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors for a single remux.
///
/// Conditions that only warrant a warning (a name that could not be
/// standardized, an unexpected audio codec) are not errors; see
/// [`RemuxPlan::standardized`](crate::remux::RemuxPlan) and
/// [`AudioCheck`](crate::remux::AudioCheck).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transcoding tool cannot be found.
    #[error("{tool} not found; install FFmpeg (e.g. `sudo apt install ffmpeg`) or set tools.{tool}_path")]
    MissingTool { tool: String },

    /// The input path is not an existing regular file.
    #[error("file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The output path already exists and overwriting is off.
    #[error("output file already exists: {} (use --overwrite to replace it)", path.display())]
    OutputExists { path: PathBuf },

    /// The output path is the input file itself.
    #[error("output path is the input file: {}", path.display())]
    OutputIsInput { path: PathBuf },

    /// ffmpeg ran and failed.
    #[error("ffmpeg encountered an error ({})", describe_exit(.code))]
    TranscodeFailed { code: Option<i32> },

    /// Any other failure from the media tools layer.
    #[error(transparent)]
    Av(remuxer_av::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl From<remuxer_av::Error> for Error {
    fn from(err: remuxer_av::Error) -> Self {
        match err {
            remuxer_av::Error::ToolNotFound { tool } => Error::MissingTool { tool },
            remuxer_av::Error::DestinationExists { path } => Error::OutputExists { path },
            remuxer_av::Error::ToolExited { code, .. } => Error::TranscodeFailed { code },
            other => Error::Av(other),
        }
    }
}
