pub mod analytics;
pub mod cli;
pub mod engine;
pub mod error;
pub mod export;
pub mod graph;
pub mod map;
pub mod reporting;
pub mod scenario;
