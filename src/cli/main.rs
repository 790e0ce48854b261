use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

mod config;
use config::Config;

use tracklist_converter::format::render;
use tracklist_converter::{
    output_path, write_tracklists, RenderOptions, Tracklist, TracklistFormat, DEFAULT_INPUT_FILE,
    DEFAULT_OUTPUT_DIR,
};

#[derive(Parser)]
#[command(name = "convert-tracklist")]
#[command(about = "Generates mixtape tracklist files for different formats based on a YAML chart")]
#[command(
    after_help = "The YAML file maps timestamps to tracks: \"00:00\": { artist: ..., title: ..., label: ... }"
)]
#[command(version)]
struct Args {
    /// Path of the input file to convert from
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    file: PathBuf,

    /// Path of the output directory in which tracklists will be written
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Do not write label info
    #[arg(short = 'L', long)]
    no_labels: bool,

    /// Only write the given formats (repeatable)
    #[arg(short = 'F', long = "format", value_enum)]
    formats: Vec<TracklistFormat>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        config.log_level()?
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let formats = select_formats(&args.formats, &config)?;
    let options = RenderOptions {
        include_labels: !(args.no_labels || config.output.no_labels),
    };

    info!("Input tracklist file: {}", args.file.display());
    for format in &formats {
        info!(
            "Output tracklist file: {}",
            output_path(&args.output_dir, &config.output.file_stem, *format).display()
        );
    }

    let tracklist = Tracklist::load(&args.file).with_context(|| {
        format!(
            "Missing or invalid tracklist file. Run in a directory containing {} or pass --file",
            DEFAULT_INPUT_FILE
        )
    })?;
    info!("Tracklist loaded. {} entries found", tracklist.len());

    for track in tracklist.tracks() {
        match track.timestamp() {
            Some(timestamp) => debug!("{} at {}", track.title(), timestamp),
            None => debug!("{} at position {}", track.title(), track.position()),
        }
    }

    let rendered: Vec<(TracklistFormat, String)> = formats
        .iter()
        .map(|format| (*format, render(&tracklist, *format, &options)))
        .collect();

    write_tracklists(&args.output_dir, &config.output.file_stem, &rendered)
        .context("Failed to write tracklists")?;

    info!("Tracklists written!");
    Ok(())
}

/// CLI formats win over configured ones; duplicates are dropped, order kept.
fn select_formats(requested: &[TracklistFormat], config: &Config) -> Result<Vec<TracklistFormat>> {
    let source = if requested.is_empty() {
        &config.output.formats
    } else {
        requested
    };

    let mut formats = Vec::with_capacity(source.len());
    for format in source {
        if !formats.contains(format) {
            formats.push(*format);
        }
    }

    if formats.is_empty() {
        bail!("No output formats selected");
    }
    Ok(formats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["convert-tracklist"]);
        assert_eq!(args.file, PathBuf::from("./Tracklist.yaml"));
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(!args.no_labels);
        assert!(args.formats.is_empty());
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from([
            "convert-tracklist",
            "-f",
            "mix.yaml",
            "-o",
            "out",
            "-L",
            "-F",
            "telegram",
        ]);
        assert_eq!(args.file, PathBuf::from("mix.yaml"));
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert!(args.no_labels);
        assert_eq!(args.formats, vec![TracklistFormat::Telegram]);
    }

    #[test]
    fn test_select_formats_prefers_cli() {
        let config = Config::default();
        let formats = select_formats(
            &[TracklistFormat::Telegram, TracklistFormat::Telegram],
            &config,
        )
        .unwrap();
        assert_eq!(formats, vec![TracklistFormat::Telegram]);

        let formats = select_formats(&[], &config).unwrap();
        assert_eq!(formats, TracklistFormat::ALL.to_vec());
    }

    #[test]
    fn test_select_formats_rejects_empty() {
        let mut config = Config::default();
        config.output.formats.clear();
        assert!(select_formats(&[], &config).is_err());
    }
}
