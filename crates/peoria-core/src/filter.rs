//! Which players take part in a ranking pass.

use serde::{Deserialize, Serialize};

use crate::player::Player;

/// A player is ranked only once all 18 holes carry a positive score.
pub fn is_eligible(player: &Player) -> bool {
    player.is_complete()
}

/// Players that will be ranked, in input order.
pub fn eligible_players(players: &[Player]) -> impl Iterator<Item = &Player> {
    players.iter().filter(|p| is_eligible(p))
}

/// Counts the presentation layer uses to flag unfinished cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSummary {
    pub total: usize,
    pub eligible: usize,
}

impl CompletionSummary {
    pub fn of(players: &[Player]) -> Self {
        Self {
            total: players.len(),
            eligible: eligible_players(players).count(),
        }
    }

    pub fn incomplete(&self) -> usize {
        self.total - self.eligible
    }

    pub fn all_complete(&self) -> bool {
        self.total == self.eligible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{make_player, uniform_scores};

    #[test]
    fn excludes_short_and_zero_cards() {
        let mut with_zero = uniform_scores(5);
        with_zero[5] = 0;
        let players = vec![
            make_player("Valid", uniform_scores(5)),
            make_player("Short", vec![4, 5, 3]),
            make_player("HasZero", with_zero),
        ];

        let names: Vec<&str> = eligible_players(&players)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Valid"]);
    }

    #[test]
    fn summary_counts_incomplete_players() {
        let players = vec![
            make_player("A", uniform_scores(4)),
            make_player("B", vec![]),
            make_player("C", uniform_scores(5)),
        ];
        let summary = CompletionSummary::of(&players);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.eligible, 2);
        assert_eq!(summary.incomplete(), 1);
        assert!(!summary.all_complete());
    }

    #[test]
    fn empty_field_is_complete() {
        let summary = CompletionSummary::of(&[]);
        assert!(summary.all_complete());
        assert_eq!(summary.incomplete(), 0);
    }
}
