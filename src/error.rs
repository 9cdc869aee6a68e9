// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("invalid edge {source_node} -> {target_node}: {fault}")]
    InvalidEdge {
        source_node: String,
        target_node: String,
        fault: EdgeFault,
    },

    #[error("no initial activation supplied for concept '{concept}'")]
    MissingActivation { concept: String },

    #[error("a map needs at least 2 concepts, found {found}")]
    TooFewConcepts { found: usize },

    #[error("concept names must be non-empty")]
    EmptyConceptName,

    #[error("initial activation for '{concept}' is {value}, expected a value in [0, 1]")]
    InvalidActivation { concept: String, value: f64 },

    #[error("initial activation given for unknown concept '{concept}'")]
    UnknownConcept { concept: String },

    #[error("no bundled preset named '{name}'")]
    UnknownPreset { name: String },

    #[error("I/O error: {source} (path: {path:?})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("could not parse map file {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Why `add_edge` rejected an influence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeFault {
    SelfLoop,
    WeightOutOfRange,
    UnknownEndpoint,
}

impl std::fmt::Display for EdgeFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelfLoop => write!(f, "self-loops are not allowed"),
            Self::WeightOutOfRange => write!(f, "weight must lie in [-1, 1]"),
            Self::UnknownEndpoint => write!(f, "both endpoints must be registered concepts"),
        }
    }
}

pub type Result<T> = std::result::Result<T, MapError>;

// Allow `?` on std::io::Error by converting to MapError::Io with unknown path.
impl From<std::io::Error> for MapError {
    fn from(source: std::io::Error) -> Self {
        MapError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
