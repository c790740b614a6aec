use anyhow::{Context, Result};
use clap::Parser;
use pan2forti::inspect::{count_entities, render as render_counts};
use tracing_subscriber::EnvFilter;
use xml_tree_core::parse_file;

mod cli;
mod convert;
mod path_guard;

use cli::{Cli, Command, InspectArgs, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Convert(args) => convert::run_convert(args),
        Command::Inspect(args) => run_inspect(args),
    }
}

/// Diagnostics go to stderr so channel text and summaries on stdout stay clean.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let root = parse_file(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;
    let counts = count_entities(&root)
        .with_context(|| format!("cannot inspect {}", args.file.display()))?;

    match args.format {
        OutputFormat::Text => println!("{}", render_counts(&counts)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&counts)?),
    }
    Ok(())
}
