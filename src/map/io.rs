// src/map/io.rs
//! Loading map specs from disk. TOML is the native format; JSON is
//! accepted for maps exported from other tools.

use std::fs;
use std::path::Path;

use crate::error::{MapError, Result};
use crate::map::spec::MapSpec;

/// Loads a map spec, choosing the format by file extension (`.json` is
/// JSON, anything else is treated as TOML).
///
/// # Errors
/// Returns `Io` if the file cannot be read and `Parse` if it does not
/// deserialize into a map spec.
pub fn load(path: &Path) -> Result<MapSpec> {
    let content = fs::read_to_string(path).map_err(|source| MapError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|e| parse_error(path, &e.to_string()))
    } else {
        toml::from_str(&content).map_err(|e| parse_error(path, &e.to_string()))
    }
}

fn parse_error(path: &Path, message: &str) -> MapError {
    MapError::Parse {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}
