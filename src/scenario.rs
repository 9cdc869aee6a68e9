// src/scenario.rs
//! What-if analysis: rerun a simulation with exactly one influence
//! overridden and diff the outcomes.
//!
//! The original graph and its result are never mutated; the modified run
//! starts from the same initial vector and parameters, so each per-node
//! change isolates the marginal effect of the single edited relationship.

use crate::engine::{self, Activations, SimParams};
use crate::error::Result;
use crate::graph::ConceptGraph;

/// A single-edge weight override.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeOverride {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Per-concept before/after comparison record.
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptDelta {
    pub name: String,
    pub original: f64,
    pub modified: f64,
    pub change: f64,
}

/// Clones the graph and applies the override: an existing (source, target)
/// influence gets the new weight; a missing one is inserted unless the new
/// weight is 0.0, in which case the clone is returned unchanged.
///
/// # Errors
/// Returns `InvalidEdge` under the same rules as `ConceptGraph::add_edge`.
pub fn apply_override(graph: &ConceptGraph, ov: &EdgeOverride) -> Result<ConceptGraph> {
    let mut modified = graph.clone();
    let exists = graph.weight(&ov.source, &ov.target).is_some();
    if exists || ov.weight != 0.0 {
        modified.add_edge(&ov.source, &ov.target, ov.weight)?;
    }
    Ok(modified)
}

/// Runs the engine on the original and the overridden graph from the same
/// initial vector and produces one delta record per concept, in concept
/// insertion order.
///
/// # Errors
/// Propagates `InvalidEdge` from the override and `MissingActivation`
/// from the engine.
pub fn compare(
    graph: &ConceptGraph,
    initial: &Activations,
    params: SimParams,
    ov: &EdgeOverride,
) -> Result<Vec<ConceptDelta>> {
    let modified_graph = apply_override(graph, ov)?;
    let original = engine::propagate(graph, initial, params)?;
    let modified = engine::propagate(&modified_graph, initial, params)?;

    Ok(graph
        .nodes()
        .iter()
        .map(|name| {
            let before = original.get(name).copied().unwrap_or(0.0);
            let after = modified.get(name).copied().unwrap_or(0.0);
            ConceptDelta {
                name: name.clone(),
                original: before,
                modified: after,
                change: after - before,
            }
        })
        .collect())
}
