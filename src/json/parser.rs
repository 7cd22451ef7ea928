//! Parser für Pfad-JSON-Exporte.

use anyhow::{Context, Result};

use super::PathFile;
use crate::core::PathModel;

/// Parst ein JSON-Export-Record in ein Pfad-Modell.
pub fn parse_path_json(content: &str) -> Result<PathModel> {
    let file: PathFile =
        serde_json::from_str(content).context("Pfad-JSON konnte nicht geparst werden")?;
    log::info!(
        "Pfad geladen: {} Wegpunkte, {} Tags",
        file.points.len(),
        file.tags.len()
    );
    Ok(file.into_model())
}
