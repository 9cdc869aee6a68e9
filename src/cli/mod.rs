// src/cli/mod.rs
//! CLI argument types and command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands};
