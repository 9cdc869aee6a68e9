// tests/unit_map.rs
//! Map file loading and the build policies around messy input.

use std::fs;

use anyhow::Result;
use ripple_core::engine;
use ripple_core::error::MapError;
use ripple_core::graph;
use ripple_core::map::{io, presets};
use tempfile::tempdir;

#[test]
fn toml_map_loads_and_simulates() -> Result<()> {
    let temp = tempdir()?;
    let path = temp.path().join("study.toml");
    fs::write(
        &path,
        r#"
        concepts = ["Sleep Quality", "Focus", "Stress"]
        steps = 2

        [[influences]]
        source = "Sleep Quality"
        target = "Focus"
        weight = 0.5

        [[influences]]
        source = "Stress"
        target = "Sleep Quality"
        weight = "-0.5"

        [initial]
        "Stress" = 0.8
        "#,
    )?;

    let spec = io::load(&path)?;
    let built = graph::build(&spec)?;
    assert_eq!(built.graph.node_count(), 3);
    assert_eq!(built.graph.edge_count(), 2);
    assert_eq!(built.initial["Focus"], 0.5, "unlisted concepts default to 0.5");
    assert_eq!(built.initial["Stress"], 0.8);

    let finals = engine::propagate(&built.graph, &built.initial, built.params)?;
    assert_eq!(finals.len(), 3);
    for (name, v) in &finals {
        assert!((0.0..=1.0).contains(v), "{name} out of range: {v}");
    }
    Ok(())
}

#[test]
fn json_map_loads_by_extension() -> Result<()> {
    let temp = tempdir()?;
    let path = temp.path().join("map.json");
    fs::write(
        &path,
        r#"{
            "concepts": ["a", "b"],
            "influences": [
                {"source": "a", "target": "b", "weight": 0.75}
            ]
        }"#,
    )?;
    let spec = io::load(&path)?;
    let built = graph::build(&spec)?;
    assert_eq!(built.graph.weight("a", "b"), Some(0.75));
    assert_eq!(built.params.steps, 3, "steps default applies to JSON too");
    Ok(())
}

#[test]
fn bad_cells_are_skipped_without_aborting_the_build() -> Result<()> {
    let temp = tempdir()?;
    let path = temp.path().join("messy.toml");
    fs::write(
        &path,
        r#"
        concepts = ["a", "b", "c"]

        [[influences]]
        source = "a"
        target = "b"
        weight = "definitely"

        [[influences]]
        source = "b"
        target = "c"
        weight = "strong-positive"

        [[influences]]
        source = "a"
        target = "c"
        weight = 0.0
        "#,
    )?;
    let built = graph::build(&io::load(&path)?)?;
    assert_eq!(
        built.graph.edge_count(),
        1,
        "junk text and zero weights drop, the level entry survives"
    );
    assert_eq!(built.graph.weight("b", "c"), Some(1.0));
    Ok(())
}

#[test]
fn duplicate_influence_entries_last_write_win() -> Result<()> {
    let temp = tempdir()?;
    let path = temp.path().join("dup.toml");
    fs::write(
        &path,
        r#"
        concepts = ["a", "b"]

        [[influences]]
        source = "a"
        target = "b"
        weight = 0.25

        [[influences]]
        source = "a"
        target = "b"
        weight = -0.75
        "#,
    )?;
    let built = graph::build(&io::load(&path)?)?;
    assert_eq!(built.graph.edge_count(), 1);
    assert_eq!(built.graph.weight("a", "b"), Some(-0.75));
    Ok(())
}

#[test]
fn missing_file_and_bad_syntax_are_typed() -> Result<()> {
    let temp = tempdir()?;
    let missing = temp.path().join("nope.toml");
    assert!(matches!(io::load(&missing), Err(MapError::Io { .. })));

    let garbled = temp.path().join("garbled.toml");
    fs::write(&garbled, "concepts = [unclosed")?;
    assert!(matches!(io::load(&garbled), Err(MapError::Parse { .. })));
    Ok(())
}

#[test]
fn categories_are_loaded_and_validated() -> Result<()> {
    let temp = tempdir()?;
    let path = temp.path().join("grouped.toml");
    fs::write(
        &path,
        r#"
        concepts = ["a", "b", "c"]

        [categories]
        drivers = ["a", "b"]
        "#,
    )?;
    let built = graph::build(&io::load(&path)?)?;
    assert_eq!(built.categories["drivers"], vec!["a", "b"]);

    let bad = temp.path().join("bad.toml");
    fs::write(
        &bad,
        r#"
        concepts = ["a", "b"]

        [categories]
        drivers = ["missing"]
        "#,
    )?;
    assert!(matches!(
        graph::build(&io::load(&bad)?),
        Err(MapError::UnknownConcept { .. })
    ));
    Ok(())
}

#[test]
fn presets_simulate_deterministically() -> Result<()> {
    for name in presets::names() {
        let built = graph::build(&presets::get(name)?)?;
        let a = engine::propagate(&built.graph, &built.initial, built.params)?;
        let b = engine::propagate(&built.graph, &built.initial, built.params)?;
        assert_eq!(a, b, "preset {name} must be deterministic");
    }
    Ok(())
}
