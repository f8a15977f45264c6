//! Staged output for a single remux.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Suffix of the replaced destination inside the staging directory.
const BACKUP_SUFFIX: &str = ".replaced";

/// Workspace for a remux.
///
/// ffmpeg writes into a hidden temporary directory next to the destination,
/// so a failed or interrupted run never leaves a partial file at the final
/// path. [`finalize`](Workspace::finalize) renames the staged file into place;
/// dropping the workspace without finalizing deletes whatever was written.
///
/// ```no_run
/// use remuxer_av::Workspace;
///
/// let workspace = Workspace::new("/media/out/Movie (1999) BluRay 1080p.mp4")?;
/// // run ffmpeg with workspace.staged() as its output ...
/// workspace.finalize(false)?;
/// # Ok::<(), remuxer_av::Error>(())
/// ```
pub struct Workspace {
    temp_dir: TempDir,
    staged_path: PathBuf,
    destination: PathBuf,
}

impl Workspace {
    /// Create a workspace for writing `destination`.
    pub fn new<P: AsRef<Path>>(destination: P) -> Result<Self> {
        let destination = destination.as_ref();

        let file_name = destination
            .file_name()
            .ok_or_else(|| Error::InvalidInput("Invalid output file path".to_string()))?;
        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let temp_dir = tempfile::Builder::new()
            .prefix(".remuxer-")
            .tempdir_in(dir)
            .map_err(|e| Error::Workspace(format!("Failed to create staging directory: {}", e)))?;

        // Keep the real file name so ffmpeg picks the muxer from the extension.
        let staged_path = temp_dir.path().join(file_name);

        Ok(Self {
            temp_dir,
            staged_path,
            destination: destination.to_path_buf(),
        })
    }

    /// Path ffmpeg should write to.
    pub fn staged(&self) -> &Path {
        &self.staged_path
    }

    /// Final output path.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Get the temp directory path.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Move the staged file to the destination.
    ///
    /// With `overwrite`, an existing destination is moved into the staging
    /// directory, replaced, and restored if the move fails. Nothing beside the
    /// destination is touched.
    pub fn finalize(self, overwrite: bool) -> Result<PathBuf> {
        let dest = self.destination.as_path();

        if !self.staged_path.exists() {
            return Err(Error::Workspace(format!(
                "Staged output does not exist: {:?}",
                self.staged_path
            )));
        }

        if dest.exists() {
            if !overwrite {
                return Err(Error::DestinationExists {
                    path: dest.to_path_buf(),
                });
            }

            // Differs from the staged file's name, which is the destination's.
            let mut backup_name = self
                .staged_path
                .file_name()
                .unwrap_or_default()
                .to_os_string();
            backup_name.push(BACKUP_SUFFIX);
            let backup = self.temp_dir.path().join(backup_name);
            std::fs::rename(dest, &backup).map_err(|e| {
                Error::Workspace(format!("Failed to create backup of existing file: {}", e))
            })?;

            if let Err(e) = std::fs::rename(&self.staged_path, dest) {
                let _ = std::fs::rename(&backup, dest);
                return Err(Error::Workspace(format!(
                    "Failed to move output to destination: {}",
                    e
                )));
            }
        } else {
            std::fs::rename(&self.staged_path, dest).map_err(|e| {
                Error::Workspace(format!("Failed to move output to destination: {}", e))
            })?;
        }

        Ok(dest.to_path_buf())
    }

    /// Discard the staged output.
    pub fn cleanup(self) {
        drop(self.temp_dir);
    }
}
