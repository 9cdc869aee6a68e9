// src/reporting.rs
//! Console output for simulation results, rankings, and scenario diffs.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::analytics::{self, RankedConcept};
use crate::engine::Activations;
use crate::graph::ConceptGraph;
use crate::scenario::ConceptDelta;

/// Prints the final activation table with a simple bar per concept.
pub fn print_final_values(graph: &ConceptGraph, values: &Activations) {
    println!("{}", "Final concept values".bold());
    let width = name_width(graph);
    for node in graph.nodes() {
        print_value_row(node, values, width);
    }
}

/// Like [`print_final_values`], but grouped under category headings.
/// Concepts not claimed by any category land in an "other" group at the
/// end. Grouping never changes the values, only the layout.
pub fn print_final_values_grouped(
    graph: &ConceptGraph,
    values: &Activations,
    categories: &BTreeMap<String, Vec<String>>,
) {
    println!("{}", "Final concept values".bold());
    let width = name_width(graph);

    let mut claimed: Vec<&str> = Vec::new();
    for (category, members) in categories {
        println!("  {}", category.underline());
        for node in graph.nodes() {
            if members.iter().any(|m| m.trim() == node.as_str()) {
                print_value_row(node, values, width);
                claimed.push(node);
            }
        }
    }

    let leftovers: Vec<&String> = graph
        .nodes()
        .iter()
        .filter(|n| !claimed.contains(&n.as_str()))
        .collect();
    if !leftovers.is_empty() {
        println!("  {}", "other".underline());
        for node in leftovers {
            print_value_row(node, values, width);
        }
    }
}

fn print_value_row(node: &str, values: &Activations, width: usize) {
    let v = values.get(node).copied().unwrap_or(0.0);
    println!("  {node:<width$}  {:>6.4}  {}", v, bar(v).cyan());
}

/// Prints the whole trajectory, one column per step.
pub fn print_trace(graph: &ConceptGraph, trace: &[Activations]) {
    println!("{}", "Activation trajectory".bold());
    let width = name_width(graph);

    let mut header = format!("  {:<width$}", "concept");
    for step in 0..trace.len() {
        header.push_str(&format!("  {:>7}", format!("step {step}")));
    }
    println!("{}", header.dimmed());

    for node in graph.nodes() {
        let mut row = format!("  {node:<width$}");
        for snapshot in trace {
            let v = snapshot.get(node).copied().unwrap_or(0.0);
            row.push_str(&format!("  {v:>7.4}"));
        }
        println!("{row}");
    }
}

/// Prints the leverage-point report: the most influential concept plus the
/// top inbound/outbound lists.
pub fn print_ranking(graph: &ConceptGraph, top: usize, weighted: bool) {
    let winner = if weighted {
        analytics::most_influential_weighted(graph)
    } else {
        analytics::most_influential(graph)
    };

    match winner {
        Some(name) => {
            let label = if weighted {
                "Most influential concept (by out-strength)"
            } else {
                "Most influential concept (by out-degree)"
            };
            println!("{label}: {}", name.green().bold());
        }
        None => {
            println!("{}", "No influences defined yet - nothing to rank.".yellow());
            return;
        }
    }

    println!();
    print_degree_list("Top outbound (drivers)", &analytics::top_outbound(graph, top));
    println!();
    print_degree_list("Top inbound (outcomes)", &analytics::top_inbound(graph, top));
}

fn print_degree_list(title: &str, ranked: &[RankedConcept]) {
    println!("{}", title.bold());
    for (i, r) in ranked.iter().enumerate() {
        println!(
            "  {:>2}. {}  {} {}  {} {:+.2}",
            i + 1,
            r.name,
            "degree".dimmed(),
            r.degree,
            "strength".dimmed(),
            r.strength
        );
    }
}

/// Prints the what-if comparison table with a colored change column.
pub fn print_comparison(deltas: &[ConceptDelta]) {
    println!("{}", "Scenario comparison".bold());
    let width = deltas.iter().map(|d| d.name.len()).max().unwrap_or(7).max(7);
    println!(
        "{}",
        format!("  {:<width$}  {:>8}  {:>8}  {:>8}", "concept", "original", "modified", "change")
            .dimmed()
    );
    for d in deltas {
        let change = format!("{:+.4}", d.change);
        let change = if d.change > 1e-9 {
            change.green()
        } else if d.change < -1e-9 {
            change.red()
        } else {
            change.dimmed()
        };
        println!(
            "  {:<width$}  {:>8.4}  {:>8.4}  {:>8}",
            d.name, d.original, d.modified, change
        );
    }
}

fn name_width(graph: &ConceptGraph) -> usize {
    graph.nodes().iter().map(String::len).max().unwrap_or(7).max(7)
}

fn bar(v: f64) -> String {
    let filled = (v.clamp(0.0, 1.0) * 20.0).round() as usize;
    "#".repeat(filled)
}
