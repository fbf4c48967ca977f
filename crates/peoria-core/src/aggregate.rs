//! Score totals: gross, OUT/IN halves, and the hidden-hole sum.
//!
//! Totals are summed into `u64` so no hole score can overflow them.

use crate::config::{HALF_COUNT, HoleIndex};

/// Sum of every hole score.
pub fn gross(scores: &[u32]) -> u64 {
    scores.iter().copied().map(u64::from).sum()
}

/// Front nine (holes 1-9).
pub fn out_total(scores: &[u32]) -> u64 {
    gross(&scores[..scores.len().min(HALF_COUNT)])
}

/// Back nine (holes 10-18).
pub fn in_total(scores: &[u32]) -> u64 {
    scores
        .iter()
        .skip(HALF_COUNT)
        .take(HALF_COUNT)
        .copied()
        .map(u64::from)
        .sum()
}

pub fn course_par(par: &[u32]) -> u64 {
    gross(par)
}

/// A hole score, capped at double par when the cut is enabled.
pub fn apply_double_par_cut(score: u32, par: u32, enabled: bool) -> u32 {
    if enabled {
        score.min(par.saturating_mul(2))
    } else {
        score
    }
}

/// Sum of the (optionally capped) scores on the hidden holes.
///
/// Indices outside `0..scores.len()` are skipped. A hole with no par entry
/// is counted uncapped.
pub fn hidden_total(
    scores: &[u32],
    hidden_holes: &[HoleIndex],
    par: &[u32],
    double_par_cut: bool,
) -> u64 {
    hidden_holes
        .iter()
        .filter_map(|&hole| {
            let Some(&score) = scores.get(hole) else {
                tracing::trace!(hole, "Ignoring out-of-range hidden hole");
                return None;
            };
            let counted = match par.get(hole) {
                Some(&p) => apply_double_par_cut(score, p, double_par_cut),
                None => score,
            };
            Some(u64::from(counted))
        })
        .sum()
}

/// Par summed over the hidden holes, skipping out-of-range indices.
pub fn hidden_holes_par(hidden_holes: &[HoleIndex], par: &[u32]) -> u64 {
    hidden_holes
        .iter()
        .filter_map(|&hole| par.get(hole).copied())
        .map(u64::from)
        .sum()
}
