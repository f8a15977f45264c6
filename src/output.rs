//! Output directory selection.
//!
//! The destination directory is chosen by strict priority: an explicit
//! directory, then the override directory, then the input file's own
//! directory. The first two only count when they name an existing directory.

use std::path::{Path, PathBuf};

/// Where the output directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDirectoryChoice {
    /// The `--output-dir` argument.
    Explicit,
    /// `REMUX_OUTPUT_DIR` or the config file's `output.dir`.
    Override,
    /// The directory containing the input file.
    InputParent,
}

impl OutputDirectoryChoice {
    pub fn describe(&self) -> &'static str {
        match self {
            OutputDirectoryChoice::Explicit => "specified output directory",
            OutputDirectoryChoice::Override => "override output directory",
            OutputDirectoryChoice::InputParent => "input file directory",
        }
    }
}

/// The resolved output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDirectory {
    pub path: PathBuf,
    pub choice: OutputDirectoryChoice,
}

/// Resolve the output directory, checking candidates against the filesystem.
pub fn resolve_output_dir(
    input: &Path,
    explicit: Option<&Path>,
    override_dir: Option<&Path>,
) -> OutputDirectory {
    resolve_output_dir_with(input, explicit, override_dir, Path::is_dir)
}

/// Resolve the output directory using `is_dir` as the existence check.
///
/// Never fails: the input's parent directory is the last resort and is not
/// checked. A bare file name resolves to `.`.
pub fn resolve_output_dir_with<F>(
    input: &Path,
    explicit: Option<&Path>,
    override_dir: Option<&Path>,
    is_dir: F,
) -> OutputDirectory
where
    F: Fn(&Path) -> bool,
{
    let candidates = [
        (explicit, OutputDirectoryChoice::Explicit),
        (override_dir, OutputDirectoryChoice::Override),
    ];

    for (candidate, choice) in candidates {
        let Some(dir) = candidate else {
            continue;
        };

        if is_dir(dir) {
            tracing::info!("Using {}: {:?}", choice.describe(), dir);
            return OutputDirectory {
                path: dir.to_path_buf(),
                choice,
            };
        }

        tracing::warn!(
            "Ignoring {} {:?}: not an existing directory",
            choice.describe(),
            dir
        );
    }

    let path = match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    tracing::info!(
        "Using {}: {:?}",
        OutputDirectoryChoice::InputParent.describe(),
        path
    );

    OutputDirectory {
        path,
        choice: OutputDirectoryChoice::InputParent,
    }
}
