// src/engine.rs
//! Influence propagation over a concept graph.
//!
//! One step recomputes every activation from the previous step's snapshot:
//!
//! ```text
//! v_next[n] = clamp(v[n] + damping * sum(v[p] * w(p, n) for p in preds(n)), 0, 1)
//! ```
//!
//! Updates are synchronous (never from partially-updated values within a
//! step), so node iteration order cannot affect the result. A node with no
//! predecessors keeps its exact prior value. Running the engine is a pure
//! function of (graph, initial, steps, damping).

use std::collections::HashMap;

use crate::error::{MapError, Result};
use crate::graph::ConceptGraph;

/// Per-concept activation levels, each in [0, 1].
pub type Activations = HashMap<String, f64>;

pub const DEFAULT_DAMPING: f64 = 0.5;
pub const DEFAULT_STEPS: usize = 3;

/// Simulation parameters: fixed step count plus the damping factor that
/// scales incoming influence (the carried-forward prior value is never
/// damped). Damping 1.0 reproduces the undamped update some older maps
/// were built against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    pub steps: usize,
    pub damping: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            damping: DEFAULT_DAMPING,
        }
    }
}

/// Runs `params.steps` propagation steps and returns the final vector.
///
/// With `steps == 0` the initial vector is returned unchanged.
///
/// # Errors
/// Returns `MissingActivation` if `initial` does not cover every concept
/// in the graph.
pub fn propagate(
    graph: &ConceptGraph,
    initial: &Activations,
    params: SimParams,
) -> Result<Activations> {
    ensure_coverage(graph, initial)?;

    let mut values = initial.clone();
    for _ in 0..params.steps {
        values = step_once(graph, &values, params.damping);
    }
    Ok(values)
}

/// Like [`propagate`], but returns the whole trajectory: the initial
/// vector at index 0 followed by one vector per step.
///
/// # Errors
/// Returns `MissingActivation` if `initial` does not cover every concept.
pub fn propagate_trace(
    graph: &ConceptGraph,
    initial: &Activations,
    params: SimParams,
) -> Result<Vec<Activations>> {
    ensure_coverage(graph, initial)?;

    let mut trace = Vec::with_capacity(params.steps + 1);
    trace.push(initial.clone());
    for _ in 0..params.steps {
        let next = match trace.last() {
            Some(prev) => step_once(graph, prev, params.damping),
            None => break,
        };
        trace.push(next);
    }
    Ok(trace)
}

/// One synchronous update of every node from the `prev` snapshot.
fn step_once(graph: &ConceptGraph, prev: &Activations, damping: f64) -> Activations {
    // Accumulate incoming influence per target in a single edge pass.
    let mut incoming: HashMap<&str, f64> = HashMap::new();
    for edge in graph.edges() {
        let source_value = prev.get(&edge.source).copied().unwrap_or(0.0);
        *incoming.entry(edge.target.as_str()).or_insert(0.0) += source_value * edge.weight;
    }

    let mut next = Activations::with_capacity(prev.len());
    for node in graph.nodes() {
        let current = prev.get(node).copied().unwrap_or(0.0);
        let influence = incoming.get(node.as_str()).copied().unwrap_or(0.0);
        next.insert(node.clone(), clamp01(current + damping * influence));
    }
    next
}

fn ensure_coverage(graph: &ConceptGraph, initial: &Activations) -> Result<()> {
    for node in graph.nodes() {
        if !initial.contains_key(node) {
            return Err(MapError::MissingActivation {
                concept: node.clone(),
            });
        }
    }
    Ok(())
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}
