// src/map/spec.rs
//! Serde types for declarative map files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::{DEFAULT_DAMPING, DEFAULT_STEPS};
use crate::map::levels::InfluenceLevel;

/// A map as written by the user: concepts, influence entries, optional
/// initial activations, and optional simulation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSpec {
    #[serde(default)]
    pub name: Option<String>,
    pub concepts: Vec<String>,
    #[serde(default)]
    pub influences: Vec<InfluenceSpec>,
    /// Explicit starting activations; every concept not listed here
    /// starts at 0.5.
    #[serde(default)]
    pub initial: BTreeMap<String, f64>,
    /// Optional display grouping: category name -> member concepts.
    /// Purely presentational; membership is validated at build time.
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<String>>,
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(default = "default_damping")]
    pub damping: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluenceSpec {
    pub source: String,
    pub target: String,
    pub weight: WeightEntry,
}

/// A weight as entered by the user: a plain number, or free text that may
/// hold a number or a discrete level label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeightEntry {
    Numeric(f64),
    Text(String),
}

impl WeightEntry {
    /// Resolves the entry to a weight. Free text that is neither a number
    /// nor a level label yields `None`; the builder skips such entries
    /// instead of failing, so one bad cell never blocks the whole map.
    #[must_use]
    pub fn resolve(&self) -> Option<f64> {
        match self {
            Self::Numeric(w) => Some(*w),
            Self::Text(s) => {
                let trimmed = s.trim();
                if let Ok(w) = trimmed.parse::<f64>() {
                    return Some(w);
                }
                InfluenceLevel::parse(trimmed).map(InfluenceLevel::weight)
            }
        }
    }
}

fn default_steps() -> usize {
    DEFAULT_STEPS
}

fn default_damping() -> f64 {
    DEFAULT_DAMPING
}
