use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "tikgen")]
#[command(about = "Generate RouterOS configuration scripts from topology files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Generate the full script for one topology file.
    Generate(GenerateArgs),
    /// Print a one-line summary of what a topology would generate.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Topology file (`.json` or `.toml`).
    pub topology: PathBuf,
    /// Write the plain-text script here in addition to the preview.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Limit the preview and output to these sections. Defaults to the
    /// topology's own show_config list when present.
    #[arg(long)]
    pub section: Vec<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Print only the summary line.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Topology file (`.json` or `.toml`).
    pub topology: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
