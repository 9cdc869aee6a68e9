// src/bin/ripple.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use ripple_core::cli::{handlers, Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}

fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Run {
            source,
            steps,
            damping,
            trace,
            csv,
        } => handlers::handle_run(source, *steps, *damping, *trace, csv.as_deref()),
        Commands::Rank {
            source,
            top,
            weighted,
        } => handlers::handle_rank(source, *top, *weighted),
        Commands::Scenario {
            source,
            from,
            to,
            weight,
            steps,
            damping,
            csv,
        } => handlers::handle_scenario(
            source,
            from,
            to,
            *weight,
            *steps,
            *damping,
            csv.as_deref(),
        ),
        Commands::Export {
            source,
            nodes,
            edges,
        } => handlers::handle_export(source, nodes.as_deref(), edges.as_deref()),
        Commands::Presets { name } => handlers::handle_presets(name.as_deref()),
    }
}
