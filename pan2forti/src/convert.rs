//! `convert` subcommand: parse, translate, write channels, report.
//!
//! The export is parsed and translated completely in memory before the output
//! directory is touched, so a missing vsys leaves no partial channel files.

use anyhow::{Context, Result};
use colored::Colorize;
use pan2forti::conversion_summary::{render as render_summary, summarize};
use pan2forti::pipeline::translate_config;
use pan2forti::profile::{load_profile, TargetProfile};
use tracing::info;
use xml_tree_core::parse_file;

use crate::cli::{ConvertArgs, OutputFormat};
use crate::path_guard::ensure_channels_spare_input;

/// Execute one translation run.
///
/// # Errors
///
/// Returns error if:
/// - The profile file cannot be read or parsed, or maps two channels to one file
/// - A channel file would overwrite the input export
/// - The export cannot be parsed or has no vsys
/// - The output directory or a channel file cannot be written
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    let profile = match &args.profile {
        Some(path) => load_profile(path)?,
        None => TargetProfile::embedded()?,
    };

    let outputs: Vec<_> = profile
        .files
        .paths(&args.output_dir)
        .into_iter()
        .map(|(_, path)| path)
        .collect();
    ensure_channels_spare_input(&args.input, &outputs)?;

    let root = parse_file(&args.input)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;
    let translation = translate_config(&root, &profile)
        .with_context(|| format!("cannot translate {}", args.input.display()))?;

    translation
        .channels
        .write_dir(&args.output_dir, &profile.files)
        .with_context(|| {
            format!(
                "failed to write channel files under {}",
                args.output_dir.display()
            )
        })?;
    info!(dir = %args.output_dir.display(), "channel files written");

    let summary = summarize(&translation);
    match args.format {
        OutputFormat::Text => println!("{}", render_summary(summary).cyan()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}
