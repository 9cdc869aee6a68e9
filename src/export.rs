// src/export.rs
//! CSV tables for final values, edge lists, and scenario comparisons.
//! One header row, one row per entity, RFC 4180 quoting.

use crate::engine::Activations;
use crate::graph::ConceptGraph;
use crate::scenario::ConceptDelta;

/// `Concept,Final Value` rows in concept insertion order. Concepts absent
/// from `values` are emitted as empty cells rather than dropped.
#[must_use]
pub fn nodes_csv(graph: &ConceptGraph, values: &Activations) -> String {
    let mut out = String::from("Concept,Final Value\n");
    for node in graph.nodes() {
        out.push_str(&field(node));
        out.push(',');
        if let Some(v) = values.get(node) {
            out.push_str(&format_value(*v));
        }
        out.push('\n');
    }
    out
}

/// `Source,Target,Weight` rows in edge insertion order.
#[must_use]
pub fn edges_csv(graph: &ConceptGraph) -> String {
    let mut out = String::from("Source,Target,Weight\n");
    for edge in graph.edges() {
        out.push_str(&field(&edge.source));
        out.push(',');
        out.push_str(&field(&edge.target));
        out.push(',');
        out.push_str(&format_value(edge.weight));
        out.push('\n');
    }
    out
}

/// `Concept,Original,Modified,Change` rows, one per comparison record.
#[must_use]
pub fn comparison_csv(deltas: &[ConceptDelta]) -> String {
    let mut out = String::from("Concept,Original,Modified,Change\n");
    for d in deltas {
        out.push_str(&field(&d.name));
        out.push(',');
        out.push_str(&format_value(d.original));
        out.push(',');
        out.push_str(&format_value(d.modified));
        out.push(',');
        out.push_str(&format_value(d.change));
        out.push('\n');
    }
    out
}

fn format_value(v: f64) -> String {
    // Plain Display keeps exact short decimals (0.5, 0.9375) readable.
    format!("{v}")
}

fn field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
