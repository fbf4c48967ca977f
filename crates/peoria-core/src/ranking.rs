use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::aggregate;
use crate::config::CompetitionConfig;
use crate::error::ConfigError;
use crate::filter::eligible_players;
use crate::handicap::calculate_hdcp;
use crate::player::{Player, PlayerId};

/// Scores derived for one player, before ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResult {
    pub player_id: PlayerId,
    pub player_name: String,
    pub gross: u64,
    /// Hidden-hole sum after the double-par cut.
    pub hidden_total: u64,
    pub hdcp: f64,
    /// `gross - hdcp`.
    pub net: f64,
}

/// A ranked result, as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub player_id: PlayerId,
    pub player_name: String,
    pub gross: u64,
    pub hidden_total: u64,
    pub hdcp: f64,
    pub net: f64,
    /// 1-based. Tied players share a rank and the next rank skips (1, 1, 3).
    pub rank: u32,
    /// Rank of the same player in the previous batch, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_rank: Option<u32>,
}

/// Movement since the previous calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankChange {
    Up,
    Down,
    Same,
}

impl CalculationResult {
    fn ranked(result: PlayerResult, rank: u32, previous_rank: Option<u32>) -> Self {
        Self {
            player_id: result.player_id,
            player_name: result.player_name,
            gross: result.gross,
            hidden_total: result.hidden_total,
            hdcp: result.hdcp,
            net: result.net,
            rank,
            previous_rank,
        }
    }

    /// `None` when the player was not ranked last time.
    pub fn rank_change(&self) -> Option<RankChange> {
        let previous = self.previous_rank?;
        Some(match self.rank.cmp(&previous) {
            Ordering::Less => RankChange::Up,
            Ordering::Greater => RankChange::Down,
            Ordering::Equal => RankChange::Same,
        })
    }
}

/// A result paired with the tie-break inputs that are not part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    pub result: PlayerResult,
    /// Player age, 0 when unknown.
    pub age: u32,
}

/// Sort order for the ranking pass.
pub type OrderFn = fn(&RankEntry, &RankEntry) -> Ordering;

/// Whether a result shares its predecessor's rank.
pub type SharesRankFn = fn(&RankEntry, &RankEntry) -> bool;

/// The two ranking policies, kept separate so either can be replaced.
#[derive(Debug, Clone, Copy)]
pub struct RankingRules {
    pub order: OrderFn,
    pub shares_rank: SharesRankFn,
}

impl RankingRules {
    /// Age orders players but does not split a shared rank.
    pub const STANDARD: Self = Self {
        order: compare_standard,
        shares_rank: same_rank_without_age,
    };

    /// Age both orders players and gives them distinct ranks.
    pub const AGE_SEPARATES_RANKS: Self = Self {
        order: compare_standard,
        shares_rank: same_rank_with_age,
    };
}

impl Default for RankingRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Net ascending, then handicap ascending, then age descending, then gross ascending.
pub fn compare_standard(a: &RankEntry, b: &RankEntry) -> Ordering {
    cmp_f64(a.result.net, b.result.net)
        .then_with(|| cmp_f64(a.result.hdcp, b.result.hdcp))
        .then_with(|| b.age.cmp(&a.age))
        .then_with(|| a.result.gross.cmp(&b.result.gross))
}

/// Equal net, handicap and gross. Age is ignored.
pub fn same_rank_without_age(a: &RankEntry, b: &RankEntry) -> bool {
    a.result.net == b.result.net
        && a.result.hdcp == b.result.hdcp
        && a.result.gross == b.result.gross
}

/// Equal net, handicap, gross and age.
pub fn same_rank_with_age(a: &RankEntry, b: &RankEntry) -> bool {
    same_rank_without_age(a, b) && a.age == b.age
}

fn compute_result(player: &Player, config: &CompetitionConfig) -> PlayerResult {
    let gross = aggregate::gross(&player.scores);
    let hidden_total = aggregate::hidden_total(
        &player.scores,
        &config.hidden_holes,
        &config.par,
        config.limits.double_par_cut,
    );
    let hdcp = calculate_hdcp(
        hidden_total,
        config.hidden_weight,
        config.course_par(),
        config.multiplier,
        config.limits.max_hdcp,
        config.rounding_mode,
    );

    PlayerResult {
        player_id: player.id.clone(),
        player_name: player.name.clone(),
        gross,
        hidden_total,
        hdcp,
        net: gross as f64 - hdcp,
    }
}

/// Gross, hidden total, handicap and net for a single player.
///
/// The player's card is not checked for completeness; the config is.
pub fn calculate_player_result(
    player: &Player,
    config: &CompetitionConfig,
) -> Result<PlayerResult, ConfigError> {
    config.validate()?;
    Ok(compute_result(player, config))
}

/// Rank every complete player under the standard rules.
///
/// Incomplete cards are skipped. `previous` only supplies `previous_rank`.
pub fn calculate_all_results(
    players: &[Player],
    config: &CompetitionConfig,
    previous: Option<&[CalculationResult]>,
) -> Result<Vec<CalculationResult>, ConfigError> {
    calculate_all_results_with(players, config, previous, &RankingRules::STANDARD)
}

/// Rank every complete player under `rules`.
pub fn calculate_all_results_with(
    players: &[Player],
    config: &CompetitionConfig,
    previous: Option<&[CalculationResult]>,
    rules: &RankingRules,
) -> Result<Vec<CalculationResult>, ConfigError> {
    config.validate()?;

    let mut entries: Vec<RankEntry> = eligible_players(players)
        .map(|p| RankEntry {
            result: compute_result(p, config),
            age: p.tie_break_age(),
        })
        .collect();
    // Stable, so fully equal entries keep input order.
    entries.sort_by(rules.order);

    let mut previous_ranks: HashMap<&str, u32> = HashMap::new();
    for r in previous.unwrap_or_default() {
        previous_ranks.entry(r.player_id.as_str()).or_insert(r.rank);
    }

    let mut ranks = Vec::with_capacity(entries.len());
    let mut current_rank = 1;
    for (index, entry) in entries.iter().enumerate() {
        if index > 0 && !(rules.shares_rank)(&entries[index - 1], entry) {
            current_rank = index as u32 + 1;
        }
        ranks.push(current_rank);
    }

    tracing::debug!(
        ranked = entries.len(),
        excluded = players.len() - entries.len(),
        "Calculated rankings"
    );

    let results = entries
        .into_iter()
        .zip(ranks)
        .map(|(entry, rank)| {
            let previous_rank = previous_ranks.get(entry.result.player_id.as_str()).copied();
            CalculationResult::ranked(entry.result, rank, previous_rank)
        })
        .collect();
    Ok(results)
}
