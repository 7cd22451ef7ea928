//! Writer für Pfad-JSON-Exporte.

use anyhow::Result;

use super::PathFile;
use crate::core::PathModel;

/// Serialisiert einen Pfad als JSON-Export-Record.
pub fn write_path_json(path: &PathModel) -> Result<String> {
    let file = PathFile::from_model(path);
    Ok(serde_json::to_string_pretty(&file)?)
}
