//! Reading and writing competition documents and result batches.

use std::path::Path;

use anyhow::{Context, Result};

use peoria_core::{CalculationResult, CompetitionDocument, export_to_json, import_from_json};

pub fn load_document(path: &Path) -> Result<CompetitionDocument> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let doc = import_from_json(&json).with_context(|| format!("failed to load {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        players = doc.players.len(),
        "Loaded competition document"
    );
    Ok(doc)
}

pub fn save_document(path: &Path, doc: &CompetitionDocument) -> Result<()> {
    let json = export_to_json(doc)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Saved competition document");
    Ok(())
}

/// Load a previous result batch.
///
/// A missing or unreadable batch only costs the rank-change arrows, so it
/// yields `None` instead of an error.
pub fn load_results(path: &Path) -> Option<Vec<CalculationResult>> {
    let json = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&json) {
        Ok(results) => Some(results),
        Err(e) => {
            tracing::warn!("Ignoring previous results in {}: {e}", path.display());
            None
        },
    }
}

pub fn save_results(path: &Path, results: &[CalculationResult]) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = results.len(), "Saved result batch");
    Ok(())
}
