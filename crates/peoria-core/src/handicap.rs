use crate::config::RoundingMode;

/// Bring `value` to one decimal place using `mode`.
///
/// `Round` rounds halves up, toward positive infinity, so −0.25 becomes −0.2.
pub fn apply_rounding(value: f64, mode: RoundingMode) -> f64 {
    let tenths = value * 10.0;
    let rounded = match mode {
        RoundingMode::Round => (tenths + 0.5).floor(),
        RoundingMode::Floor => tenths.floor(),
        RoundingMode::Ceil => tenths.ceil(),
    };
    rounded / 10.0
}

/// Unrounded handicap: `(hidden_total × weight − course_par) × multiplier`.
pub fn raw_hdcp(hidden_total: u64, hidden_weight: f64, course_par: u64, multiplier: f64) -> f64 {
    (hidden_total as f64 * hidden_weight - course_par as f64) * multiplier
}

/// New Peoria handicap.
///
/// Rounded once, then capped at `max_hdcp`. Negative handicaps are kept.
pub fn calculate_hdcp(
    hidden_total: u64,
    hidden_weight: f64,
    course_par: u64,
    multiplier: f64,
    max_hdcp: f64,
    mode: RoundingMode,
) -> f64 {
    let raw = raw_hdcp(hidden_total, hidden_weight, course_par, multiplier);
    apply_rounding(raw, mode).min(max_hdcp)
}
