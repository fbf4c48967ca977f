//! The exchanged `{ config, players }` document and its structural check.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{CompetitionConfig, HOLE_COUNT};
use crate::player::Player;

/// Everything needed to reproduce a competition's rankings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitionDocument {
    pub config: CompetitionConfig,
    pub players: Vec<Player>,
}

/// A decoded document that does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    Missing(&'static str),
    WrongType {
        path: &'static str,
        expected: &'static str,
    },
    WrongLength {
        path: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "missing field: {path}"),
            Self::WrongType { path, expected } => write!(f, "{path} must be {expected}"),
            Self::WrongLength {
                path,
                expected,
                actual,
            } => write!(f, "{path} must have {expected} entries, got {actual}"),
        }
    }
}

impl std::error::Error for SchemaError {}

#[derive(Debug)]
pub enum DocumentError {
    Parse(String),
    Schema(SchemaError),
    Decode(String),
    Encode(String),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "invalid JSON: {e}"),
            Self::Schema(e) => write!(f, "invalid document: {e}"),
            Self::Decode(e) => write!(f, "decode error: {e}"),
            Self::Encode(e) => write!(f, "encode error: {e}"),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Schema(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SchemaError> for DocumentError {
    fn from(e: SchemaError) -> Self {
        Self::Schema(e)
    }
}

fn field<'a>(obj: &'a Value, key: &str, path: &'static str) -> Result<&'a Value, SchemaError> {
    obj.get(key).ok_or(SchemaError::Missing(path))
}

fn expect(ok: bool, path: &'static str, expected: &'static str) -> Result<(), SchemaError> {
    if ok {
        Ok(())
    } else {
        Err(SchemaError::WrongType { path, expected })
    }
}

/// Structural check of a decoded document, run before typed decoding.
///
/// Only shapes are checked here; value preconditions live in
/// [`CompetitionConfig::validate`].
pub fn check_schema(doc: &Value) -> Result<(), SchemaError> {
    expect(doc.is_object(), "$", "an object")?;

    let config = field(doc, "config", "config")?;
    expect(config.is_object(), "config", "an object")?;

    let par = field(config, "par", "config.par")?
        .as_array()
        .ok_or(SchemaError::WrongType {
            path: "config.par",
            expected: "an array",
        })?;
    if par.len() != HOLE_COUNT {
        return Err(SchemaError::WrongLength {
            path: "config.par",
            expected: HOLE_COUNT,
            actual: par.len(),
        });
    }

    let hidden = field(config, "hiddenHoles", "config.hiddenHoles")?;
    expect(hidden.is_array(), "config.hiddenHoles", "an array")?;

    let weight = field(config, "hiddenWeight", "config.hiddenWeight")?;
    expect(weight.is_number(), "config.hiddenWeight", "a number")?;

    let multiplier = field(config, "multiplier", "config.multiplier")?;
    expect(multiplier.is_number(), "config.multiplier", "a number")?;

    let limits = field(config, "limits", "config.limits")?;
    expect(limits.is_object(), "config.limits", "an object")?;
    let cut = field(limits, "doubleParCut", "config.limits.doubleParCut")?;
    expect(cut.is_boolean(), "config.limits.doubleParCut", "a boolean")?;
    let max_hdcp = field(limits, "maxHdcp", "config.limits.maxHdcp")?;
    expect(max_hdcp.is_number(), "config.limits.maxHdcp", "a number")?;

    let players = field(doc, "players", "players")?;
    expect(players.is_array(), "players", "an array")?;

    Ok(())
}

/// Parse, shape-check and decode a document.
pub fn import_from_json(json: &str) -> Result<CompetitionDocument, DocumentError> {
    let value: Value = serde_json::from_str(json).map_err(|e| DocumentError::Parse(e.to_string()))?;
    check_schema(&value)?;
    serde_json::from_value(value).map_err(|e| DocumentError::Decode(e.to_string()))
}

/// Pretty-printed JSON for saving or sharing.
pub fn export_to_json(doc: &CompetitionDocument) -> Result<String, DocumentError> {
    serde_json::to_string_pretty(doc).map_err(|e| DocumentError::Encode(e.to_string()))
}
