// src/analytics.rs
//! Leverage-point queries over a concept graph.
//!
//! All queries are read-only. Ties are broken by concept insertion order,
//! and a graph with no edges reports "no data" (`None` / empty) rather
//! than failing.

use crate::graph::ConceptGraph;

/// One row of a leverage ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedConcept {
    pub name: String,
    pub degree: usize,
    pub strength: f64,
}

/// The concept with the most outgoing influences, or `None` when the
/// graph has no edges at all.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn most_influential(graph: &ConceptGraph) -> Option<&str> {
    if graph.edge_count() == 0 {
        return None;
    }
    max_by_score(graph, |g, n| g.out_degree(n) as f64)
}

/// The concept with the highest signed out-strength (sum of outgoing
/// weights), used by scenario mode. `None` when the graph has no edges.
#[must_use]
pub fn most_influential_weighted(graph: &ConceptGraph) -> Option<&str> {
    if graph.edge_count() == 0 {
        return None;
    }
    max_by_score(graph, ConceptGraph::out_strength)
}

/// Top `n` concepts by outgoing degree, descending, insertion-order
/// tie-break.
#[must_use]
pub fn top_outbound(graph: &ConceptGraph, n: usize) -> Vec<RankedConcept> {
    top_by_degree(graph, n, |g, name| g.out_degree(name))
}

/// Top `n` concepts by incoming degree, descending, insertion-order
/// tie-break.
#[must_use]
pub fn top_inbound(graph: &ConceptGraph, n: usize) -> Vec<RankedConcept> {
    top_by_degree(graph, n, |g, name| g.in_degree(name))
}

fn max_by_score<F>(graph: &ConceptGraph, score: F) -> Option<&str>
where
    F: Fn(&ConceptGraph, &str) -> f64,
{
    let mut best: Option<(&str, f64)> = None;
    for node in graph.nodes() {
        let s = score(graph, node);
        // Strict comparison keeps the earliest-inserted node on ties.
        match best {
            Some((_, current)) if s <= current => {}
            _ => best = Some((node, s)),
        }
    }
    best.map(|(name, _)| name)
}

fn top_by_degree<F>(graph: &ConceptGraph, n: usize, degree: F) -> Vec<RankedConcept>
where
    F: Fn(&ConceptGraph, &str) -> usize,
{
    let mut ranked: Vec<RankedConcept> = graph
        .nodes()
        .iter()
        .map(|name| RankedConcept {
            name: name.clone(),
            degree: degree(graph, name),
            strength: graph.out_strength(name),
        })
        .collect();
    // Stable sort: equal degrees keep insertion order.
    ranked.sort_by(|a, b| b.degree.cmp(&a.degree));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(nodes: &[&str], edges: &[(&str, &str, f64)]) -> ConceptGraph {
        let mut g = ConceptGraph::new();
        for n in nodes {
            g.add_node(n).unwrap();
        }
        for (s, t, w) in edges {
            g.add_edge(s, t, *w).unwrap();
        }
        g
    }

    #[test]
    fn edgeless_graph_has_no_data() {
        let g = graph(&["a", "b"], &[]);
        assert_eq!(most_influential(&g), None);
        assert_eq!(most_influential_weighted(&g), None);
        assert!(top_outbound(&ConceptGraph::new(), 5).is_empty());
    }

    #[test]
    fn out_degree_winner() {
        let g = graph(
            &["a", "b", "c"],
            &[("a", "b", 0.1), ("a", "c", 0.1), ("b", "c", 0.9)],
        );
        assert_eq!(most_influential(&g), Some("a"));
    }

    #[test]
    fn tie_breaks_by_insertion_order() {
        // b and a each have one outgoing edge; a was inserted first.
        let g = graph(&["a", "b", "c"], &[("b", "c", 1.0), ("a", "c", 0.5)]);
        assert_eq!(most_influential(&g), Some("a"));
    }

    #[test]
    fn weighted_winner_uses_signed_strength() {
        // a has two edges but they cancel; b's single strong edge wins.
        let g = graph(
            &["a", "b", "c"],
            &[("a", "b", 0.5), ("a", "c", -0.5), ("b", "c", 0.75)],
        );
        assert_eq!(most_influential_weighted(&g), Some("b"));
    }

    #[test]
    fn top_lists_sort_and_truncate() {
        let g = graph(
            &["a", "b", "c", "d"],
            &[
                ("a", "b", 0.2),
                ("c", "a", 0.3),
                ("c", "b", 0.3),
                ("c", "d", 0.3),
                ("d", "b", -0.4),
            ],
        );
        let out = top_outbound(&g, 2);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "c");
        assert_eq!(out[0].degree, 3);
        assert_eq!(out[1].name, "a", "a ties d at 1 but was inserted first");

        let inbound = top_inbound(&g, 3);
        assert_eq!(inbound[0].name, "b");
        assert_eq!(inbound[0].degree, 3);
    }
}
