//! # remuxer-av
//!
//! Thin wrappers around the ffmpeg and ffprobe command-line tools.
//!
//! This crate provides functionality for:
//! - Detecting and locating the external tools
//! - Remuxing a video into MP4 with fast-start metadata, either copying all
//!   streams or converting audio to stereo AAC
//! - Checking the codec of the first audio stream of a file
//! - Staging output so failed runs leave nothing at the destination
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use remuxer_av::{AudioMode, Transcode, Workspace};
//!
//! let ffmpeg = remuxer_av::require_tool("ffmpeg")?;
//! let workspace = Workspace::new("/media/out/Movie (1999) BluRay 1080p.mp4")?;
//! Transcode::new(ffmpeg, AudioMode::ConvertAudio)
//!     .run("/media/in/Movie.1999.mkv".as_ref(), workspace.staged())?;
//! workspace.finalize(false)?;
//! # Ok::<(), remuxer_av::Error>(())
//! ```

mod error;
pub mod probe;
pub mod tools;
pub mod transcode;
pub mod workspace;

// Re-exports
pub use error::{Error, Result};
pub use probe::{first_audio_codec, is_aac};
pub use tools::{check_tools, get_tool_path, require_tool, ToolInfo};
pub use transcode::{AacSettings, AudioMode, Transcode};
pub use workspace::Workspace;
