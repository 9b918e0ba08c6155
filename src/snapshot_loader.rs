//! Reading snapshots from disk or stdin.
//!
//! A source holds either one snapshot object or an array of them (a session
//! history, oldest first). Format follows the file extension; `-` reads JSON
//! from stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Result, UccError};
use crate::types::Snapshot;

pub const SNAPSHOT_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(SnapshotFormat::Json),
            "yaml" | "yml" => Ok(SnapshotFormat::Yaml),
            "" => Err(UccError::snapshot(format!(
                "Unsupported snapshot extension 'no extension' for {}. Supported: {}.",
                path.display(),
                SNAPSHOT_EXTENSIONS.join(", ")
            ))),
            other => Err(UccError::snapshot(format!(
                "Unsupported snapshot extension '{}' for {}. Supported: {}.",
                other,
                path.display(),
                SNAPSHOT_EXTENSIONS.join(", ")
            ))),
        }
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Parse a document holding one snapshot or an array of snapshots.
pub fn parse_snapshots(content: &str, format: SnapshotFormat) -> Result<Vec<Snapshot>> {
    let document: Value = match format {
        SnapshotFormat::Json => serde_json::from_str(content)?,
        SnapshotFormat::Yaml => serde_yaml::from_str(content)?,
    };

    let items = match document {
        Value::Array(items) => items,
        Value::Object(_) => vec![document],
        other => {
            return Err(UccError::snapshot(format!(
                "expected a snapshot object or an array of snapshots, found {}",
                value_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            if !item.is_object() {
                return Err(UccError::snapshot(format!(
                    "snapshot {} is not an object (found {})",
                    i + 1,
                    value_kind(&item)
                )));
            }
            Ok(serde_json::from_value(item)?)
        })
        .collect()
}

/// Load every snapshot in one source file (or stdin for `-`).
pub fn load_snapshots(path: &Path) -> Result<Vec<Snapshot>> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return parse_snapshots(&content, SnapshotFormat::Json);
    }
    if !path.exists() {
        return Err(UccError::snapshot(format!(
            "Snapshot file not found: {}",
            path.display()
        )));
    }
    let format = SnapshotFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_snapshots(&content, format)
}

/// Load several sources, concatenated in argument order.
pub fn load_sources(paths: &[PathBuf]) -> Result<Vec<Snapshot>> {
    let mut snapshots = Vec::new();
    for path in paths {
        snapshots.extend(load_snapshots(path)?);
    }
    Ok(snapshots)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
