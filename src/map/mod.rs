// src/map/mod.rs
//! Declarative map input: file formats, weight-entry modes, and bundled
//! preset scenarios.

pub mod io;
pub mod levels;
pub mod presets;
pub mod spec;

pub use levels::InfluenceLevel;
pub use spec::{InfluenceSpec, MapSpec, WeightEntry};
