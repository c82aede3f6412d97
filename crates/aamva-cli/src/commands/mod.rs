//! CLI command implementations

pub mod applicant;
pub mod proof;
pub mod status;

use anyhow::{Context, Result};
use std::fs;

/// Read a JSON document from `path`
pub fn read_json(path: &str) -> Result<serde_json::Value> {
    let content = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path))
}
