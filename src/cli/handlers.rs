// src/cli/handlers.rs
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use colored::Colorize;

use crate::cli::args::MapSource;
use crate::engine::{self, SimParams};
use crate::export;
use crate::graph::{self, BuiltMap};
use crate::map::{io, presets, spec::MapSpec};
use crate::reporting;
use crate::scenario::{self, EdgeOverride};

/// Handles `ripple run`.
///
/// # Errors
/// Returns error if the map cannot be loaded, built, or simulated.
pub fn handle_run(
    source: &MapSource,
    steps: Option<u8>,
    damping: Option<f64>,
    trace: bool,
    csv: Option<&Path>,
) -> Result<()> {
    let built = load_and_build(source)?;
    let params = override_params(built.params, steps, damping);

    if trace {
        let trajectory = engine::propagate_trace(&built.graph, &built.initial, params)?;
        reporting::print_trace(&built.graph, &trajectory);
        if let Some(path) = csv {
            let last = trajectory
                .last()
                .ok_or_else(|| anyhow!("empty trajectory"))?;
            write_csv(path, &export::nodes_csv(&built.graph, last))?;
        }
        return Ok(());
    }

    let finals = engine::propagate(&built.graph, &built.initial, params)?;
    if built.categories.is_empty() {
        reporting::print_final_values(&built.graph, &finals);
    } else {
        reporting::print_final_values_grouped(&built.graph, &finals, &built.categories);
    }
    if let Some(path) = csv {
        write_csv(path, &export::nodes_csv(&built.graph, &finals))?;
    }
    Ok(())
}

/// Handles `ripple rank`.
///
/// # Errors
/// Returns error if the map cannot be loaded or built.
pub fn handle_rank(source: &MapSource, top: usize, weighted: bool) -> Result<()> {
    let built = load_and_build(source)?;
    reporting::print_ranking(&built.graph, top, weighted);
    Ok(())
}

/// Handles `ripple scenario`.
///
/// # Errors
/// Returns error if the map fails to load or the override is invalid.
#[allow(clippy::too_many_arguments)]
pub fn handle_scenario(
    source: &MapSource,
    from: &str,
    to: &str,
    weight: f64,
    steps: Option<u8>,
    damping: Option<f64>,
    csv: Option<&Path>,
) -> Result<()> {
    let built = load_and_build(source)?;
    let params = override_params(built.params, steps, damping);
    let ov = EdgeOverride {
        source: from.to_string(),
        target: to.to_string(),
        weight,
    };

    let deltas = scenario::compare(&built.graph, &built.initial, params, &ov)?;
    reporting::print_comparison(&deltas);
    if let Some(path) = csv {
        write_csv(path, &export::comparison_csv(&deltas))?;
    }
    Ok(())
}

/// Handles `ripple export`.
///
/// # Errors
/// Returns error if the map fails to load or a table cannot be written.
pub fn handle_export(
    source: &MapSource,
    nodes: Option<&Path>,
    edges: Option<&Path>,
) -> Result<()> {
    if nodes.is_none() && edges.is_none() {
        return Err(anyhow!("nothing to export: pass --nodes and/or --edges"));
    }
    let built = load_and_build(source)?;

    if let Some(path) = nodes {
        let finals = engine::propagate(&built.graph, &built.initial, built.params)?;
        write_csv(path, &export::nodes_csv(&built.graph, &finals))?;
    }
    if let Some(path) = edges {
        write_csv(path, &export::edges_csv(&built.graph))?;
    }
    Ok(())
}

/// Handles `ripple presets`.
///
/// # Errors
/// Returns error for an unknown preset name.
pub fn handle_presets(name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => {
            print!("{}", presets::source(name)?);
        }
        None => {
            println!("{}", "Bundled presets:".bold());
            for name in presets::names() {
                println!("  {name}");
            }
        }
    }
    Ok(())
}

fn load_spec(source: &MapSource) -> Result<MapSpec> {
    match (&source.map, &source.preset) {
        (Some(path), None) => Ok(io::load(path)?),
        (None, Some(name)) => Ok(presets::get(name)?),
        (None, None) => Err(anyhow!("give a map file or --preset NAME")),
        (Some(_), Some(_)) => unreachable!("clap conflicts_with prevents this"),
    }
}

fn load_and_build(source: &MapSource) -> Result<BuiltMap> {
    let spec = load_spec(source)?;
    Ok(graph::build(&spec)?)
}

fn override_params(base: SimParams, steps: Option<u8>, damping: Option<f64>) -> SimParams {
    SimParams {
        steps: steps.map_or(base.steps, usize::from),
        damping: damping.unwrap_or(base.damping),
    }
}

fn write_csv(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    eprintln!("{} {}", "wrote".dimmed(), path.display().to_string().dimmed());
    Ok(())
}
