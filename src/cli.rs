use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "remuxer")]
#[command(
    author,
    version,
    about = "Remux a video into MP4 with AAC audio and a standardized movie name"
)]
pub struct Cli {
    /// Video file to remux
    #[arg(required_unless_present_any = ["check_tools", "print_config"])]
    pub input: Option<PathBuf>,

    /// Directory to write the output to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Copy all streams unchanged instead of converting audio to AAC
    #[arg(short, long)]
    pub keep_audio: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Replace the output file if it already exists
    #[arg(short = 'y', long)]
    pub overwrite: bool,

    /// Skip the audio codec check after converting
    #[arg(long)]
    pub no_verify: bool,

    /// Show what would be done without running ffmpeg
    #[arg(long)]
    pub dry_run: bool,

    /// Check that the required external tools are available
    #[arg(long)]
    pub check_tools: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,
}
