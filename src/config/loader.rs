//! Loader helpers for RON and JSON data files.

use ron::Options;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Error type for data file loading failures.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for LoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|e| LoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse a RON document, attributing errors to `file`.
pub fn parse_ron<T: DeserializeOwned>(file: &str, contents: &str) -> Result<T, LoadError> {
    ron_options().from_str(contents).map_err(|e| LoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Parse a JSON document, attributing errors to `file`.
pub fn parse_json<T: DeserializeOwned>(file: &str, contents: &str) -> Result<T, LoadError> {
    serde_json::from_str(contents).map_err(|e| LoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })
}

pub fn load_ron_file<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let contents = read_file(path)?;
    parse_ron(&path.display().to_string(), &contents)
}

pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let contents = read_file(path)?;
    parse_json(&path.display().to_string(), &contents)
}
