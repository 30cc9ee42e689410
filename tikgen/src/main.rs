use anyhow::{Context, Result};
use clap::Parser;
use ros_script_core::{format_json, write_file, COMMENT_BLOCK};
use tikgen::compose;
use tikgen::model::{load_topology, TopologyState};
use tikgen::report::render_colored;
use tikgen::summary::{render, summarize};

mod cli;

use cli::{Cli, Command, GenerateArgs, InspectArgs, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Inspect(args) => run_inspect(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let state = load_topology(&args.topology)
        .with_context(|| format!("failed to load {}", args.topology.display()))?;

    let mut config = compose::full(&state);
    if let Some(filters) = section_filters(&args, &state) {
        config.retain_sections(|section| {
            section == COMMENT_BLOCK || filters.iter().any(|filter| filter == section)
        });
    }
    let summary = summarize(&state, &config);

    if let Some(path) = &args.output {
        write_file(&config, path)
            .with_context(|| format!("failed to write script {}", path.display()))?;
    }

    if args.quiet {
        println!("{}", render(summary));
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => {
            println!("{}", render_colored(&config));
            println!("{}", render(summary));
        }
        OutputFormat::Json => println!("{}", format_json(&config)?),
    }

    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let state = load_topology(&args.topology)
        .with_context(|| format!("failed to load {}", args.topology.display()))?;
    let config = compose::full(&state);
    let summary = summarize(&state, &config);

    match args.format {
        OutputFormat::Text => println!("{}", render(summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

/// Explicit `--section` flags win; otherwise the topology's `show_config`
/// list applies; with neither the whole script passes through.
fn section_filters(args: &GenerateArgs, state: &TopologyState) -> Option<Vec<String>> {
    if !args.section.is_empty() {
        return Some(args.section.clone());
    }
    state
        .show_config
        .as_ref()
        .filter(|show| !show.sections.is_empty())
        .map(|show| show.sections.clone())
}
