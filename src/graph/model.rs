// src/graph/model.rs
//! The concept graph structure and query interface.

use std::collections::HashMap;

use crate::error::{EdgeFault, MapError, Result};

/// A directed, weighted influence between two concepts.
#[derive(Debug, Clone, PartialEq)]
pub struct Influence {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// A fuzzy cognitive map: named concepts plus directed weighted influences.
///
/// Concepts keep their insertion order; it is observable through every
/// query (ranking tie-breaks, report row order). At most one influence
/// exists per ordered (source, target) pair; redefining one replaces the
/// weight in place, so the edge keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct ConceptGraph {
    nodes: Vec<String>,
    edges: Vec<Influence>,
    edge_index: HashMap<(String, String), usize>,
}

impl ConceptGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a concept. Adding an existing name is a no-op.
    ///
    /// # Errors
    /// Returns `EmptyConceptName` for an empty name.
    pub fn add_node(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(MapError::EmptyConceptName);
        }
        if !self.contains(name) {
            self.nodes.push(name.to_string());
        }
        Ok(())
    }

    /// Adds or redefines a directed influence (last-write-wins).
    ///
    /// # Errors
    /// Returns `InvalidEdge` for a self-loop, a weight outside [-1, 1]
    /// (NaN included), or an endpoint that is not a registered concept.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: f64) -> Result<()> {
        let fault = if source == target {
            Some(EdgeFault::SelfLoop)
        } else if !(-1.0..=1.0).contains(&weight) {
            Some(EdgeFault::WeightOutOfRange)
        } else if !self.contains(source) || !self.contains(target) {
            Some(EdgeFault::UnknownEndpoint)
        } else {
            None
        };

        if let Some(fault) = fault {
            return Err(MapError::InvalidEdge {
                source_node: source.to_string(),
                target_node: target.to_string(),
                fault,
            });
        }

        let key = (source.to_string(), target.to_string());
        if let Some(&pos) = self.edge_index.get(&key) {
            if let Some(edge) = self.edges.get_mut(pos) {
                edge.weight = weight;
            }
        } else {
            self.edge_index.insert(key, self.edges.len());
            self.edges.push(Influence {
                source: source.to_string(),
                target: target.to_string(),
                weight,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.iter().any(|n| n == name)
    }

    /// Concept names in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Influences in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Influence] {
        &self.edges
    }

    /// The weight of the (source, target) influence, if one exists.
    #[must_use]
    pub fn weight(&self, source: &str, target: &str) -> Option<f64> {
        self.edge_index
            .get(&(source.to_string(), target.to_string()))
            .and_then(|&pos| self.edges.get(pos))
            .map(|e| e.weight)
    }

    /// Concepts with an influence directed into `node`, paired with the
    /// influence weight, in edge insertion order.
    #[must_use]
    pub fn predecessors(&self, node: &str) -> Vec<(&str, f64)> {
        self.edges
            .iter()
            .filter(|e| e.target == node)
            .map(|e| (e.source.as_str(), e.weight))
            .collect()
    }

    #[must_use]
    pub fn out_degree(&self, node: &str) -> usize {
        self.edges.iter().filter(|e| e.source == node).count()
    }

    #[must_use]
    pub fn in_degree(&self, node: &str) -> usize {
        self.edges.iter().filter(|e| e.target == node).count()
    }

    /// Sum of outgoing influence weights (signed, not absolute).
    #[must_use]
    pub fn out_strength(&self, node: &str) -> f64 {
        self.edges
            .iter()
            .filter(|e| e.source == node)
            .map(|e| e.weight)
            .sum()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_nodes() -> ConceptGraph {
        let mut g = ConceptGraph::new();
        g.add_node("a").unwrap();
        g.add_node("b").unwrap();
        g
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut g = two_nodes();
        g.add_node("a").unwrap();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.nodes(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn empty_name_rejected() {
        let mut g = ConceptGraph::new();
        assert!(matches!(g.add_node(""), Err(MapError::EmptyConceptName)));
    }

    #[test]
    fn self_loop_rejected() {
        let mut g = two_nodes();
        let err = g.add_edge("a", "a", 0.5).unwrap_err();
        assert!(matches!(
            err,
            MapError::InvalidEdge {
                fault: EdgeFault::SelfLoop,
                ..
            }
        ));
    }

    #[test]
    fn weight_range_enforced() {
        let mut g = two_nodes();
        assert!(g.add_edge("a", "b", 1.0).is_ok());
        assert!(g.add_edge("a", "b", -1.0).is_ok());
        for bad in [1.01, -1.01, f64::NAN] {
            let err = g.add_edge("a", "b", bad).unwrap_err();
            assert!(
                matches!(
                    err,
                    MapError::InvalidEdge {
                        fault: EdgeFault::WeightOutOfRange,
                        ..
                    }
                ),
                "weight {bad} should be out of range"
            );
        }
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let mut g = two_nodes();
        let err = g.add_edge("a", "ghost", 0.5).unwrap_err();
        assert!(matches!(
            err,
            MapError::InvalidEdge {
                fault: EdgeFault::UnknownEndpoint,
                ..
            }
        ));
    }

    #[test]
    fn duplicate_edge_last_write_wins() {
        let mut g = two_nodes();
        g.add_edge("a", "b", 0.3).unwrap();
        g.add_edge("a", "b", -0.7).unwrap();
        assert_eq!(g.edge_count(), 1, "redefinition must not add an edge");
        assert_eq!(g.weight("a", "b"), Some(-0.7));
    }

    #[test]
    fn predecessors_in_insertion_order() {
        let mut g = ConceptGraph::new();
        for n in ["a", "b", "c", "d"] {
            g.add_node(n).unwrap();
        }
        g.add_edge("c", "a", 0.2).unwrap();
        g.add_edge("b", "a", 0.4).unwrap();
        g.add_edge("d", "a", -0.1).unwrap();
        let preds = g.predecessors("a");
        assert_eq!(preds, vec![("c", 0.2), ("b", 0.4), ("d", -0.1)]);
    }

    #[test]
    fn degrees_and_strength() {
        let mut g = ConceptGraph::new();
        for n in ["a", "b", "c"] {
            g.add_node(n).unwrap();
        }
        g.add_edge("a", "b", 0.5).unwrap();
        g.add_edge("a", "c", -0.25).unwrap();
        g.add_edge("b", "c", 1.0).unwrap();
        assert_eq!(g.out_degree("a"), 2);
        assert_eq!(g.in_degree("c"), 2);
        assert_eq!(g.in_degree("a"), 0);
        assert!((g.out_strength("a") - 0.25).abs() < 1e-12);
        assert!((g.out_strength("c")).abs() < 1e-12);
    }
}
