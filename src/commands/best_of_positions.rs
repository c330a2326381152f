//! Best-of-position leaderboards.

use super::common::CommandContext;
use crate::cli::types::{LeagueId, PlayerId, Scope};
use crate::engine::scoring::{best_of_positions, PositionScore};
use crate::engine::build_aggregates;
use crate::Result;
use std::collections::HashSet;

/// Compute and print the four position leaderboards.
pub fn handle_best_of_positions(
    league_id: Option<LeagueId>,
    scope: Scope,
    exclude: Vec<PlayerId>,
    as_json: bool,
) -> Result<()> {
    let ctx = CommandContext::new(league_id)?;
    let (weeks, players) = ctx.load_snapshot(&scope)?;

    let exclude: HashSet<PlayerId> = exclude.into_iter().collect();
    let aggregates = build_aggregates(&weeks, &players, &exclude);
    let boards = best_of_positions(&aggregates, weeks.len());

    if as_json {
        println!("{}", serde_json::to_string_pretty(&boards)?);
        return Ok(());
    }

    print_board("Attackers", &boards.attackers);
    print_board("Midfielders", &boards.midfielders);
    print_board("Defenders", &boards.defenders);
    print_board("Goalkeepers", &boards.goalkeepers);
    Ok(())
}

fn print_board(title: &str, board: &[PositionScore]) {
    println!("{title}:");
    if board.is_empty() {
        println!("  (no eligible players)");
        return;
    }
    for score in board {
        println!(
            "  {}: {:.2} (goals {:.2}, assists {:.2}, defence {:.2}, points {:.2}, titles {:.2})",
            score.name,
            score.point,
            score.goals_score,
            score.assist_score,
            score.goals_against_score,
            score.points_score,
            score.championship_score
        );
    }
}
