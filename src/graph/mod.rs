// src/graph/mod.rs
//! The concept graph: nodes, weighted influences, and construction from
//! declarative map specs.

pub mod builder;
pub mod model;

pub use builder::{build, BuiltMap};
pub use model::{ConceptGraph, Influence};
