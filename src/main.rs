mod cli;

use remuxer::{
    config::{self, Config},
    remux::{self, AudioCheck, Remuxer},
};
use remuxer_av::{AacSettings, AudioMode, Transcode};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "remuxer=debug,remuxer_av=debug".to_string()
        } else {
            "remuxer=info,remuxer_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    let mut config = config::load_config_or_default(cli.config.as_deref())?;
    if cli.overwrite {
        config.output.overwrite = true;
    }
    if cli.no_verify {
        config.verify.enabled = false;
    }

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    if cli.check_tools {
        return check_tools();
    }

    let Some(input) = cli.input.as_deref() else {
        anyhow::bail!("No input file given");
    };

    let mode = AudioMode::from_keep_audio(cli.keep_audio);
    remux_file(input, cli.output_dir.as_deref(), mode, &config, cli.dry_run)
}

fn remux_file(
    input: &Path,
    output_dir: Option<&Path>,
    mode: AudioMode,
    config: &Config,
    dry_run: bool,
) -> Result<()> {
    // Locate ffmpeg before touching any files
    let remuxer = if dry_run {
        None
    } else {
        Some(Remuxer::from_config(config)?)
    };

    let override_dir = config::override_output_dir_from_env(config);
    let plan = remux::plan(input, output_dir, override_dir.as_deref(), mode)?;

    println!("Mode: {}", mode.label());
    println!("Input: {}", plan.input.display());
    println!("Output: {}", plan.output.display());

    let Some(remuxer) = remuxer else {
        let ffmpeg = config
            .tools
            .ffmpeg_path
            .clone()
            .unwrap_or_else(|| remuxer_av::tools::FFMPEG.into());
        let args: Vec<String> = Transcode::new(&ffmpeg, mode)
            .aac(AacSettings::from(&config.audio))
            .args(&plan.input, &plan.output)
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();

        println!(
            "\n[DRY RUN] Would run: {} {}",
            ffmpeg.display(),
            args.join(" ")
        );
        return Ok(());
    };

    tracing::debug!("Using ffmpeg at {:?}", remuxer.ffmpeg_path());
    println!("\nRunning ffmpeg...");
    let report = remuxer.run(&plan)?;

    println!("\nConversion complete!");
    println!("Output: {}", report.output.display());

    match &report.audio {
        AudioCheck::Aac => println!("Audio: AAC"),
        AudioCheck::Mismatch(codec) => {
            tracing::warn!("Output audio codec is {}, expected AAC", codec);
        }
        AudioCheck::Unverified(reason) => {
            tracing::warn!("Could not verify output audio codec: {}", reason);
        }
        AudioCheck::Skipped => {}
    }

    Ok(())
}

fn check_tools() -> Result<()> {
    println!("Checking external tools...\n");

    let tools = remuxer_av::check_tools();
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install FFmpeg to remux files.");
    }

    Ok(())
}
