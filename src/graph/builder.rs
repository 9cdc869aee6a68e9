// src/graph/builder.rs
//! Builds a simulation-ready graph from a raw map spec.
//!
//! Policies carried over from the reference tool:
//! - blank concept entries are skipped, duplicates collapse silently
//! - a free-text weight that parses to nothing is dropped (one bad cell
//!   never blocks the rest of the map)
//! - zero weights mean "no influence" and are never stored
//! - later influence entries for the same (source, target) pair replace
//!   earlier ones
//! - every concept starts at 0.5 unless the spec says otherwise

use std::collections::BTreeMap;

use crate::engine::{Activations, SimParams};
use crate::error::{MapError, Result};
use crate::graph::model::ConceptGraph;
use crate::map::spec::MapSpec;

/// A built map: the graph, the initial vector covering every concept,
/// the simulation parameters to run it with, and any display categories.
#[derive(Debug, Clone)]
pub struct BuiltMap {
    pub graph: ConceptGraph,
    pub initial: Activations,
    pub params: SimParams,
    pub categories: BTreeMap<String, Vec<String>>,
}

pub const DEFAULT_ACTIVATION: f64 = 0.5;

/// Validates and assembles a spec into a [`BuiltMap`].
///
/// # Errors
/// Returns `TooFewConcepts` when fewer than 2 usable concepts remain,
/// `InvalidEdge` for self-loops / out-of-range weights / unknown
/// endpoints, and `UnknownConcept` / `InvalidActivation` for bad initial
/// entries.
pub fn build(spec: &MapSpec) -> Result<BuiltMap> {
    let graph = build_graph(spec)?;
    let initial = build_initial(spec, &graph)?;
    let categories = check_categories(spec, &graph)?;
    let params = SimParams {
        steps: spec.steps,
        damping: spec.damping,
    };
    Ok(BuiltMap {
        graph,
        initial,
        params,
        categories,
    })
}

fn build_graph(spec: &MapSpec) -> Result<ConceptGraph> {
    let mut graph = ConceptGraph::new();

    for raw in &spec.concepts {
        let name = raw.trim();
        if name.is_empty() {
            continue;
        }
        graph.add_node(name)?;
    }

    if graph.node_count() < 2 {
        return Err(MapError::TooFewConcepts {
            found: graph.node_count(),
        });
    }

    for inf in &spec.influences {
        let Some(weight) = inf.weight.resolve() else {
            continue;
        };
        if weight == 0.0 {
            continue;
        }
        graph.add_edge(inf.source.trim(), inf.target.trim(), weight)?;
    }

    Ok(graph)
}

fn check_categories(
    spec: &MapSpec,
    graph: &ConceptGraph,
) -> Result<BTreeMap<String, Vec<String>>> {
    for members in spec.categories.values() {
        for concept in members {
            if !graph.contains(concept.trim()) {
                return Err(MapError::UnknownConcept {
                    concept: concept.trim().to_string(),
                });
            }
        }
    }
    Ok(spec.categories.clone())
}

fn build_initial(spec: &MapSpec, graph: &ConceptGraph) -> Result<Activations> {
    let mut initial: Activations = graph
        .nodes()
        .iter()
        .map(|n| (n.clone(), DEFAULT_ACTIVATION))
        .collect();

    for (concept, &value) in &spec.initial {
        let name = concept.trim();
        if !graph.contains(name) {
            return Err(MapError::UnknownConcept {
                concept: name.to_string(),
            });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(MapError::InvalidActivation {
                concept: name.to_string(),
                value,
            });
        }
        initial.insert(name.to_string(), value);
    }

    Ok(initial)
}
