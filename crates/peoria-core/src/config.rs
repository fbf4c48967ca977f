use serde::{Deserialize, Serialize};

use crate::aggregate;
use crate::error::ConfigError;

/// Holes in a round.
pub const HOLE_COUNT: usize = 18;

/// Holes per half (OUT = 0..9, IN = 9..18).
pub const HALF_COUNT: usize = 9;

/// 0-based hole index.
pub type HoleIndex = usize;

/// Par layout used when a competition does not specify its own (total 72).
pub const DEFAULT_PAR: [u32; HOLE_COUNT] = [4, 4, 3, 5, 4, 4, 3, 5, 4, 4, 4, 3, 5, 4, 4, 3, 5, 4];

/// Default hidden holes: 12 holes, 0-based.
pub const DEFAULT_HIDDEN_HOLES: [HoleIndex; 12] = [0, 2, 4, 6, 8, 9, 10, 11, 13, 15, 16, 17];

/// The customary new Peoria layout as printed on score cards (1-based).
pub const STANDARD_NEW_PEORIA_HOLES: [u8; 12] = [1, 3, 5, 7, 9, 11, 10, 12, 14, 16, 17, 18];

/// Handicap ceiling that is treated as "no limit".
pub const UNLIMITED_HDCP: f64 = 999.0;

/// A selectable handicap ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HdcpLimitOption {
    pub value: f64,
    pub label: &'static str,
}

/// Ceilings offered to competition organisers.
pub const HDCP_LIMIT_OPTIONS: [HdcpLimitOption; 4] = [
    HdcpLimitOption {
        value: UNLIMITED_HDCP,
        label: "unlimited",
    },
    HdcpLimitOption {
        value: 36.0,
        label: "36 (men's standard)",
    },
    HdcpLimitOption {
        value: 40.0,
        label: "40 (women's standard)",
    },
    HdcpLimitOption {
        value: 72.0,
        label: "72 (double cut)",
    },
];

/// How the raw handicap is brought to one decimal place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    #[default]
    Round,
    Floor,
    Ceil,
}

/// Score caps applied during the handicap calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    /// Cap each hidden-hole score at twice the hole's par.
    pub double_par_cut: bool,
    /// Inclusive upper bound on the final handicap. There is no lower bound.
    pub max_hdcp: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            double_par_cut: true,
            max_hdcp: UNLIMITED_HDCP,
        }
    }
}

/// Competition settings, immutable for the duration of a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionConfig {
    /// Par per hole, index 0..18.
    pub par: Vec<u32>,
    /// Holes whose scores determine the handicap. Out-of-range entries are ignored.
    pub hidden_holes: Vec<HoleIndex>,
    pub hidden_weight: f64,
    /// Scales the raw handicap delta. Any real number, including 0.
    pub multiplier: f64,
    pub limits: Limits,
    #[serde(default)]
    pub rounding_mode: RoundingMode,
}

impl Default for CompetitionConfig {
    fn default() -> Self {
        Self {
            par: DEFAULT_PAR.to_vec(),
            hidden_holes: DEFAULT_HIDDEN_HOLES.to_vec(),
            hidden_weight: 1.5,
            multiplier: 0.8,
            limits: Limits::default(),
            rounding_mode: RoundingMode::Round,
        }
    }
}

/// Display information for one hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleInfo {
    /// 1-based hole number.
    pub number: u8,
    pub par: u32,
    pub is_hidden: bool,
}

impl CompetitionConfig {
    /// Check the preconditions the engine relies on.
    ///
    /// Hidden-hole indices are not checked: out-of-range entries are skipped
    /// during aggregation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.par.len() != HOLE_COUNT {
            return Err(ConfigError::WrongParLength(self.par.len()));
        }
        if let Some(hole) = self.par.iter().position(|&p| p == 0) {
            return Err(ConfigError::ZeroPar(hole));
        }
        if !self.hidden_weight.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "hiddenWeight",
                value: self.hidden_weight,
            });
        }
        if !self.multiplier.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "multiplier",
                value: self.multiplier,
            });
        }
        if self.limits.max_hdcp.is_nan() {
            return Err(ConfigError::NanMaxHdcp);
        }
        Ok(())
    }

    pub fn course_par(&self) -> u64 {
        aggregate::course_par(&self.par)
    }

    /// Par over holes 1-9.
    pub fn out_par(&self) -> u64 {
        aggregate::out_total(&self.par)
    }

    /// Par over holes 10-18.
    pub fn in_par(&self) -> u64 {
        aggregate::in_total(&self.par)
    }

    /// Par summed over the hidden holes.
    pub fn hidden_par(&self) -> u64 {
        aggregate::hidden_holes_par(&self.hidden_holes, &self.par)
    }

    pub fn is_hidden(&self, hole: HoleIndex) -> bool {
        self.hidden_holes.contains(&hole)
    }

    /// Per-hole number, par and hidden flag, in hole order.
    pub fn hole_layout(&self) -> Vec<HoleInfo> {
        self.par
            .iter()
            .enumerate()
            .map(|(i, &par)| HoleInfo {
                number: (i + 1) as u8,
                par,
                is_hidden: self.is_hidden(i),
            })
            .collect()
    }

    /// Organiser-facing name of the handicap ceiling, when it is one of the
    /// presets.
    pub fn hdcp_limit_label(&self) -> Option<&'static str> {
        if self.is_hdcp_unlimited() {
            return Some(HDCP_LIMIT_OPTIONS[0].label);
        }
        HDCP_LIMIT_OPTIONS
            .iter()
            .find(|option| option.value == self.limits.max_hdcp)
            .map(|option| option.label)
    }

    /// Whether the handicap ceiling is the "no limit" sentinel (or above it).
    pub fn is_hdcp_unlimited(&self) -> bool {
        self.limits.max_hdcp >= UNLIMITED_HDCP
    }
}
