use crate::config::HOLE_COUNT;

/// A competition configuration that the engine refuses to compute with.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `par` does not hold exactly one entry per hole.
    WrongParLength(usize),
    /// A hole has a par of zero (0-based hole index).
    ZeroPar(usize),
    /// `hiddenWeight` or `multiplier` is NaN or infinite.
    NonFinite { field: &'static str, value: f64 },
    /// `limits.maxHdcp` is NaN.
    NanMaxHdcp,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongParLength(len) => {
                write!(f, "par must list {HOLE_COUNT} holes, got {len}")
            },
            Self::ZeroPar(hole) => write!(f, "hole {} has a par of 0", hole + 1),
            Self::NonFinite { field, value } => write!(f, "{field} must be finite, got {value}"),
            Self::NanMaxHdcp => write!(f, "limits.maxHdcp must be a number"),
        }
    }
}

impl std::error::Error for ConfigError {}
