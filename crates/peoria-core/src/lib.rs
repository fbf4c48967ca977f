//! peoria-core: new Peoria handicap and ranking engine.
//!
//! Pure functions over value types: players and a competition config go in,
//! ranked results come out. No IO.
//!
//! ```rust
//! use peoria_core::{CompetitionConfig, Player, booby_rank, calculate_all_results};
//!
//! let mut player = Player::new("Sato");
//! player.scores = vec![5; 18];
//!
//! let config = CompetitionConfig::default();
//! let results = calculate_all_results(&[player], &config, None).unwrap();
//! assert_eq!(results[0].rank, 1);
//! assert!((results[0].hdcp - 14.4).abs() < 1e-9);
//! assert_eq!(booby_rank(&results), None);
//! ```

pub mod aggregate;
pub mod config;
pub mod document;
pub mod error;
pub mod filter;
pub mod handicap;
pub mod hidden_holes;
pub mod player;
pub mod ranking;
pub mod standings;

pub use config::{CompetitionConfig, HoleIndex, Limits, RoundingMode};
pub use document::{CompetitionDocument, DocumentError, SchemaError, check_schema};
pub use document::{export_to_json, import_from_json};
pub use error::ConfigError;
pub use filter::CompletionSummary;
pub use hidden_holes::{
    generate_hidden_holes_seeded, generate_hidden_holes_with, generate_random_hidden_holes,
    standard_hidden_holes,
};
pub use player::{Player, PlayerId};
pub use ranking::{
    CalculationResult, PlayerResult, RankChange, RankingRules, calculate_all_results,
    calculate_all_results_with, calculate_player_result,
};
pub use standings::{Award, Standings, booby_rank, last_rank};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::config::HOLE_COUNT;
    use crate::player::Player;

    /// A full card with the same score on every hole.
    pub fn uniform_scores(score: u32) -> Vec<u32> {
        vec![score; HOLE_COUNT]
    }

    /// A player whose id and name are both `id`.
    pub fn make_player(id: &str, scores: Vec<u32>) -> Player {
        Player {
            id: id.to_string(),
            name: id.to_string(),
            scores,
            age: None,
        }
    }

    pub fn make_aged_player(id: &str, scores: Vec<u32>, age: u32) -> Player {
        Player {
            age: Some(age),
            ..make_player(id, scores)
        }
    }
}
