//! Prize positions derived from a ranked batch.

use serde::{Deserialize, Serialize};

use crate::ranking::CalculationResult;

/// Rank of the second-to-last result ("booby prize").
///
/// Works on rank values: when the last two places are tied, the booby rank is
/// the shared rank. `None` for fewer than two results.
pub fn booby_rank(results: &[CalculationResult]) -> Option<u32> {
    if results.len() < 2 {
        return None;
    }
    let mut ranks: Vec<u32> = results.iter().map(|r| r.rank).collect();
    ranks.sort_by(|a, b| b.cmp(a));
    ranks.get(1).copied()
}

/// Highest rank value in the batch.
pub fn last_rank(results: &[CalculationResult]) -> Option<u32> {
    results.iter().map(|r| r.rank).max()
}

/// Prize highlighted next to a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Award {
    Winner,
    RunnerUp,
    Third,
    Booby,
    Last,
}

impl Award {
    /// Short marker for tables.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Winner => "1st",
            Self::RunnerUp => "2nd",
            Self::Third => "3rd",
            Self::Booby => "BB",
            Self::Last => "last",
        }
    }
}

/// Podium places win over booby, booby wins over last.
pub fn award_for(rank: u32, booby: Option<u32>, last: Option<u32>) -> Option<Award> {
    match rank {
        1 => Some(Award::Winner),
        2 => Some(Award::RunnerUp),
        3 => Some(Award::Third),
        r if Some(r) == booby => Some(Award::Booby),
        r if Some(r) == last => Some(Award::Last),
        _ => None,
    }
}

/// Booby and last rank of one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standings {
    pub booby_rank: Option<u32>,
    pub last_rank: Option<u32>,
}

impl Standings {
    pub fn from_results(results: &[CalculationResult]) -> Self {
        Self {
            booby_rank: booby_rank(results),
            last_rank: last_rank(results),
        }
    }

    pub fn award(&self, rank: u32) -> Option<Award> {
        award_for(rank, self.booby_rank, self.last_rank)
    }
}
