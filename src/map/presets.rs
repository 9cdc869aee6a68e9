// src/map/presets.rs
//! Bundled example maps from the adaptive-leadership course material the
//! tool was originally built for. Useful as starting points and for demos.

use std::path::PathBuf;

use crate::error::{MapError, Result};
use crate::map::spec::MapSpec;

const ADAPTIVE_LEADERSHIP: &str = r#"
name = "adaptive-leadership"
concepts = [
    "Psychological Safety",
    "Team Trust",
    "Open Communication",
    "Change Fatigue",
    "Mentorship",
    "Sleep Quality",
    "Decision Quality",
]
steps = 3
damping = 0.5

[[influences]]
source = "Psychological Safety"
target = "Open Communication"
weight = 0.75

[[influences]]
source = "Open Communication"
target = "Team Trust"
weight = 0.5

[[influences]]
source = "Team Trust"
target = "Psychological Safety"
weight = 0.5

[[influences]]
source = "Mentorship"
target = "Psychological Safety"
weight = 0.25

[[influences]]
source = "Change Fatigue"
target = "Sleep Quality"
weight = -0.5

[[influences]]
source = "Sleep Quality"
target = "Decision Quality"
weight = 0.75

[[influences]]
source = "Change Fatigue"
target = "Open Communication"
weight = -0.25

[[influences]]
source = "Team Trust"
target = "Decision Quality"
weight = 0.5

[initial]
"Change Fatigue" = 0.8
"Mentorship" = 0.3

[categories]
relational = ["Psychological Safety", "Team Trust", "Open Communication", "Mentorship"]
pressures = ["Change Fatigue", "Sleep Quality"]
outcomes = ["Decision Quality"]
"#;

const TEAM_BURNOUT: &str = r#"
name = "team-burnout"
concepts = [
    "Workload",
    "Autonomy",
    "Burnout",
    "Engagement",
    "Output Quality",
]
steps = 5
damping = 0.5

[[influences]]
source = "Workload"
target = "Burnout"
weight = "strong-positive"

[[influences]]
source = "Autonomy"
target = "Burnout"
weight = "moderate-negative"

[[influences]]
source = "Burnout"
target = "Engagement"
weight = "strong-negative"

[[influences]]
source = "Engagement"
target = "Output Quality"
weight = "moderate-positive"

[[influences]]
source = "Burnout"
target = "Output Quality"
weight = "weak-negative"

[initial]
"Workload" = 0.9
"Autonomy" = 0.4
"Burnout" = 0.2
"#;

const PRESETS: &[(&str, &str)] = &[
    ("adaptive-leadership", ADAPTIVE_LEADERSHIP),
    ("team-burnout", TEAM_BURNOUT),
];

/// Names of all bundled presets.
#[must_use]
pub fn names() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _)| *name).collect()
}

/// Looks up a bundled preset by name.
///
/// # Errors
/// Returns `UnknownPreset` for an unrecognized name.
pub fn get(name: &str) -> Result<MapSpec> {
    let (_, content) = PRESETS
        .iter()
        .find(|(n, _)| *n == name)
        .ok_or_else(|| MapError::UnknownPreset {
            name: name.to_string(),
        })?;
    toml::from_str(content).map_err(|e| MapError::Parse {
        path: PathBuf::from(format!("<preset:{name}>")),
        message: e.to_string(),
    })
}

/// The raw TOML text of a preset, for `ripple presets NAME`.
///
/// # Errors
/// Returns `UnknownPreset` for an unrecognized name.
pub fn source(name: &str) -> Result<&'static str> {
    PRESETS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, content)| content.trim_start())
        .ok_or_else(|| MapError::UnknownPreset {
            name: name.to_string(),
        })
}
