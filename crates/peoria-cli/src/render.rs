use std::fmt::Write as _;

use serde::Serialize;

use peoria_core::aggregate::{in_total, out_total};
use peoria_core::config::HOLE_COUNT;
use peoria_core::{
    CalculationResult, CompetitionConfig, CompletionSummary, HoleIndex, Player, RankChange,
    Standings,
};

use crate::config::OutputConfig;

/// Everything printed by `peoria rank --format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankReport<'a> {
    pub results: &'a [CalculationResult],
    pub standings: Standings,
    pub completion: CompletionSummary,
}

fn arrow(change: Option<RankChange>) -> &'static str {
    match change {
        Some(RankChange::Up) => "↑",
        Some(RankChange::Down) => "↓",
        Some(RankChange::Same) | None => "",
    }
}

/// Fixed-width leaderboard.
pub fn render_table(
    results: &[CalculationResult],
    completion: CompletionSummary,
    options: &OutputConfig,
) -> String {
    let standings = Standings::from_results(results);
    let mut out = String::new();

    let _ = write!(out, "{:>4} ", "Rank");
    if options.show_badges {
        let _ = write!(out, "{:<4} ", "");
    }
    let _ = write!(out, "{:<1} {:<20} {:>5}", "", "Name", "Gross");
    if options.show_hidden_total {
        let _ = write!(out, " {:>6}", "Hidden");
    }
    let _ = writeln!(out, " {:>6} {:>6}", "HDCP", "Net");

    for r in results {
        let _ = write!(out, "{:>4} ", r.rank);
        if options.show_badges {
            let badge = standings.award(r.rank).map(|a| a.badge()).unwrap_or("");
            let _ = write!(out, "{badge:<4} ");
        }
        let _ = write!(
            out,
            "{:<1} {:<20} {:>5}",
            arrow(r.rank_change()),
            r.player_name,
            r.gross
        );
        if options.show_hidden_total {
            let _ = write!(out, " {:>6}", r.hidden_total);
        }
        let _ = writeln!(out, " {:>6.1} {:>6.1}", r.hdcp, r.net);
    }

    let _ = writeln!(
        out,
        "{} of {} players complete",
        completion.eligible, completion.total
    );
    out
}

pub fn render_json(
    results: &[CalculationResult],
    completion: CompletionSummary,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&RankReport {
        results,
        standings: Standings::from_results(results),
        completion,
    })
}

/// Hole numbers as printed on a score card (1-based).
pub fn render_hidden_holes(holes: &[HoleIndex]) -> String {
    let numbers: Vec<String> = holes.iter().map(|h| (h + 1).to_string()).collect();
    format!("Hidden holes: {}", numbers.join(", "))
}

/// Hole-by-hole course card, hidden holes starred, with par subtotals.
pub fn render_course(config: &CompetitionConfig) -> String {
    let layout = config.hole_layout();
    let mut out = String::new();

    let _ = write!(out, "{:<6}", "Hole");
    for hole in &layout {
        let _ = write!(out, "{:>3}", hole.number);
    }
    let _ = write!(out, "\n{:<6}", "Par");
    for hole in &layout {
        let _ = write!(out, "{:>3}", hole.par);
    }
    let _ = write!(out, "\n{:<6}", "Hidden");
    for hole in &layout {
        let _ = write!(out, "{:>3}", if hole.is_hidden { "*" } else { "" });
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Par OUT {} IN {} total {}, hidden holes par {}",
        config.out_par(),
        config.in_par(),
        config.course_par(),
        config.hidden_par()
    );
    let limit = match config.hdcp_limit_label() {
        Some(label) => label.to_string(),
        None => format!("{:.1}", config.limits.max_hdcp),
    };
    let _ = writeln!(out, "HDCP limit: {limit}");
    out
}

/// One line per player: holes entered and OUT/IN subtotals so far.
pub fn render_progress(players: &[Player]) -> String {
    let mut out = String::new();
    for player in players {
        let _ = writeln!(
            out,
            "{:<20} {:>2}/{HOLE_COUNT} holes  OUT {:>3}  IN {:>3}",
            player.name,
            player.entered_holes(),
            out_total(&player.scores),
            in_total(&player.scores)
        );
    }
    out
}
