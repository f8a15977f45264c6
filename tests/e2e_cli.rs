//! CLI end-to-end tests
//!
//! Tests for the remuxer command-line interface. Everything except
//! `test_cli_real_remux` uses `--dry-run` or exits before ffmpeg is needed.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the remuxer binary, isolated from the caller's
/// environment and working directory.
#[allow(deprecated)]
fn remuxer_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("remuxer").unwrap();
    cmd.current_dir(cwd)
        .env_remove("REMUX_OUTPUT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn ffmpeg_available() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[test]
fn test_cli_no_args_shows_usage() {
    let dir = tempdir().unwrap();
    remuxer_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let dir = tempdir().unwrap();
    remuxer_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("remuxer"))
        .stdout(predicate::str::contains("--keep-audio"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[test]
fn test_cli_version_flag() {
    let dir = tempdir().unwrap();
    remuxer_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("remuxer"));
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = tempdir().unwrap();
    remuxer_cmd(dir.path())
        .args(["--dry-run", "does-not-exist.mkv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn test_cli_missing_ffmpeg_fails_before_input_check() {
    let dir = tempdir().unwrap();
    remuxer_cmd(dir.path())
        .env("PATH", "")
        .env("HOME", dir.path())
        .arg("does-not-exist.mkv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ffmpeg not found; install FFmpeg"))
        .stderr(predicate::str::contains("file not found").not());
}

#[test]
fn test_cli_dry_run_standardizes_name() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("The.Matrix.1999.1080p.BluRay.x264.mkv");
    fs::write(&input, b"video").unwrap();

    remuxer_cmd(dir.path())
        .arg("--dry-run")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("REMUX + AAC CONVERSION"))
        .stdout(predicate::str::contains("The Matrix (1999) BluRay 1080p.mp4"))
        .stdout(predicate::str::contains("[DRY RUN]"))
        .stdout(predicate::str::contains("-c:a aac -b:a 320k -ac 2"));

    assert!(!dir.path().join("The Matrix (1999) BluRay 1080p.mp4").exists());
}

#[test]
fn test_cli_dry_run_keep_audio() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Show.Name.2024.WEB-DL.mkv");
    fs::write(&input, b"video").unwrap();

    remuxer_cmd(dir.path())
        .args(["--dry-run", "--keep-audio"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("keeping original audio"))
        .stdout(predicate::str::contains("Show Name (2024) WEBDL 1080p.mp4"))
        .stdout(predicate::str::contains("-map 0 -c copy"));
}

#[test]
fn test_cli_dry_run_fallback_name() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("movie.mkv");
    fs::write(&input, b"video").unwrap();

    remuxer_cmd(dir.path())
        .arg("--dry-run")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("movie.mp4"))
        .stdout(predicate::str::contains("Could not standardize"));
}

#[test]
fn test_cli_output_dir_flag() {
    let dir = tempdir().unwrap();
    let out = tempdir().unwrap();
    let input = dir.path().join("Heat.1995.mkv");
    fs::write(&input, b"video").unwrap();

    let expected = out.path().join("Heat (1995) WEB 1080p.mp4");
    remuxer_cmd(dir.path())
        .arg("--dry-run")
        .arg("-o")
        .arg(out.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn test_cli_override_dir_from_env() {
    let dir = tempdir().unwrap();
    let out = tempdir().unwrap();
    let input = dir.path().join("Heat.1995.mkv");
    fs::write(&input, b"video").unwrap();

    let expected = out.path().join("Heat (1995) WEB 1080p.mp4");
    remuxer_cmd(dir.path())
        .env("REMUX_OUTPUT_DIR", out.path())
        .arg("--dry-run")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn test_cli_print_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("custom.toml");
    fs::write(&config_path, "[audio]\nbitrate = \"256k\"\n").unwrap();

    remuxer_cmd(dir.path())
        .arg("--print-config")
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("bitrate = \"256k\""))
        .stdout(predicate::str::contains("channels = 2"));
}

#[test]
fn test_cli_reads_config_from_current_dir() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("remuxer.toml"), "[audio]\nchannels = 6\n").unwrap();

    remuxer_cmd(dir.path())
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("channels = 6"));
}

#[test]
fn test_cli_invalid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("bad.toml");
    fs::write(&config_path, "[audio\nchannels = ").unwrap();

    remuxer_cmd(dir.path())
        .arg("--print-config")
        .arg("-c")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_cli_check_tools() {
    let dir = tempdir().unwrap();
    remuxer_cmd(dir.path())
        .arg("--check-tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("ffmpeg"))
        .stdout(predicate::str::contains("ffprobe"));
}

#[test]
fn test_cli_real_remux() {
    if !ffmpeg_available() {
        eprintln!("Skipping test: ffmpeg not available");
        return;
    }

    let dir = tempdir().unwrap();
    let input = dir.path().join("Test.Clip.2001.720p.BluRay.mkv");
    let generated = Command::new("ffmpeg")
        .args(["-v", "error", "-y"])
        .args(["-f", "lavfi", "-i", "testsrc=duration=1:size=64x64:rate=5"])
        .args(["-f", "lavfi", "-i", "sine=duration=1"])
        .args(["-c:v", "mpeg4", "-c:a", "ac3", "-shortest"])
        .arg(&input)
        .status()
        .map(|s| s.success())
        .unwrap_or(false);
    if !generated {
        eprintln!("Skipping test: could not generate test clip");
        return;
    }

    let output = dir.path().join("Test Clip (2001) BluRay 720p.mp4");
    remuxer_cmd(dir.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion complete!"));

    assert!(output.is_file());
    assert!(fs::metadata(&output).unwrap().len() > 0);

    // A second run refuses to replace the file
    remuxer_cmd(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    remuxer_cmd(dir.path())
        .args(["--overwrite", "--keep-audio"])
        .arg(&input)
        .assert()
        .success();
}
