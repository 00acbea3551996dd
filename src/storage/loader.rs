use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::analysis::AnalysisResult;
use crate::error::{Error, Result};

/// Reads comment records from a JSON file. A top-level object becomes a one-item list.
pub fn load(path: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let data: Value = serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match data {
        Value::Array(items) => items,
        other => vec![other],
    })
}

/// Writes `results` as 2-space indented UTF-8 JSON, creating parent directories.
pub fn save_results(results: &AnalysisResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut json = serde_json::to_string_pretty(results)?;
    json.push('\n');

    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
