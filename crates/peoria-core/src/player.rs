use serde::{Deserialize, Deserializer, Serialize};

use crate::config::HOLE_COUNT;

/// Stable player identifier, unchanged across recalculations.
pub type PlayerId = String;

/// A competitor and their score card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Gross strokes per hole. 0 means "not entered yet".
    #[serde(default, deserialize_with = "lenient_scores")]
    pub scores: Vec<u32>,
    /// Only used to break ties; older players rank higher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl Player {
    /// A blank score card with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: format!("player-{}", uuid::Uuid::new_v4()),
            name: name.into(),
            scores: vec![0; HOLE_COUNT],
            age: None,
        }
    }

    /// All 18 holes entered with a positive score.
    pub fn is_complete(&self) -> bool {
        self.scores.len() == HOLE_COUNT && self.scores.iter().all(|&s| s > 0)
    }

    /// Number of holes with a score entered.
    pub fn entered_holes(&self) -> usize {
        self.scores.iter().filter(|&&s| s > 0).count()
    }

    /// Age as used by the tie-break: missing counts as 0.
    pub fn tie_break_age(&self) -> u32 {
        self.age.unwrap_or(0)
    }
}

/// Decode a score card without rejecting the document it sits in.
///
/// Anything that is not a positive whole number (negative, fractional, null,
/// a string) reads as 0, so the player is kept but never complete. A
/// non-array card reads as empty.
fn lenient_scores<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(entries) = value else {
        return Ok(Vec::new());
    };
    Ok(entries.iter().map(hole_score).collect())
}

fn hole_score(entry: &serde_json::Value) -> u32 {
    if let Some(n) = entry.as_u64() {
        return u32::try_from(n).unwrap_or(u32::MAX);
    }
    match entry.as_f64() {
        Some(f) if f >= 1.0 && f.fract() == 0.0 => f.min(f64::from(u32::MAX)) as u32,
        _ => 0,
    }
}
