//! Loading request descriptions and option maps from disk.
//!
//! Both JSON and YAML files are accepted; the format is picked from the
//! file extension, with JSON as the fallback for anything unrecognized.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::request::RequestDescriptor;

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Read a request description from a JSON or YAML file
pub fn load_request(path: &Path) -> Result<RequestDescriptor> {
    tracing::debug!("loading request from {}", path.display());
    let contents = fs::read_to_string(path)?;
    let request = if is_yaml(path) {
        serde_yaml::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };
    Ok(request)
}

/// Read a target option map from a JSON or YAML file.
///
/// The values are sanitized against the target's schema later, so any
/// well-formed document is accepted here.
pub fn load_options(path: &Path) -> Result<Value> {
    tracing::debug!("loading options from {}", path.display());
    let contents = fs::read_to_string(path)?;
    let options = if is_yaml(path) {
        serde_yaml::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };
    Ok(options)
}
