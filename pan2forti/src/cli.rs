use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "pan2forti")]
#[command(about = "Translate Palo Alto XML exports into FortiGate CLI configuration")]
pub struct Cli {
    /// Log skipped and defaulted entities to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Translate one export into the six FortiOS channel files.
    Convert(ConvertArgs),
    /// Count the entities the translator would read from one export.
    Inspect(InspectArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// PAN-OS XML export to translate.
    pub input: PathBuf,
    /// Directory receiving the channel files (created if missing).
    #[arg(short, long, default_value = "Output")]
    pub output_dir: PathBuf,
    /// Target profile TOML overriding vdom, inspection profiles, or file names.
    #[arg(long)]
    pub profile: Option<PathBuf>,
    /// Summary format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// PAN-OS XML export to inspect.
    pub file: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
