//! Weighted best-of-position composite scores.
//!
//! The coefficients below are the league's fixed scoring rubric: they weigh
//! attacking output against defensive solidity differently per role. Do not
//! simplify or re-derive them.

use crate::cli::types::Position;
use crate::engine::aggregate::PlayerAggregate;
use crate::engine::ranking::half_weeks;
use serde::Serialize;
use std::cmp::Ordering;

/// One player's composite score with its per-component breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionScore {
    pub name: String,
    /// Total composite score, rounded to 2 decimals.
    pub point: f64,
    pub goals_score: f64,
    pub assist_score: f64,
    pub goals_against_score: f64,
    pub points_score: f64,
    pub championship_score: f64,
}

/// The four position leaderboards, each sorted descending by `point`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestOfPositions {
    pub attackers: Vec<PositionScore>,
    pub midfielders: Vec<PositionScore>,
    pub defenders: Vec<PositionScore>,
    pub goalkeepers: Vec<PositionScore>,
}

/// Hard output bound per leaderboard, shared with the award lists.
pub use crate::engine::awards::AWARD_LIST_CAP;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score one player under their position's rubric.
///
/// `g` goals, `a` assists, `c` championships, `d` goals-conceded average,
/// `p` league points:
/// - ATK: `0.8g + 0.3a + 2c + 6/(d+1) + 0.1p`
/// - MEI: `0.5g + 0.6a + 2c + 8/(d+1) + 0.1p`
/// - DEF/GOL: `60/(d+1) + 0.1g + 0.1a + 0.1p + 2c - 25`
pub fn score_player(aggregate: &PlayerAggregate) -> PositionScore {
    let g = f64::from(aggregate.goals);
    let a = f64::from(aggregate.assists);
    let c = f64::from(aggregate.championships);
    let d = aggregate.goals_conceded_avg;
    let p = f64::from(aggregate.points);

    let (goals_score, assist_score, goals_against_score) = match aggregate.position {
        Position::Attacker => (0.8 * g, 0.3 * a, 6.0 / (d + 1.0)),
        Position::Midfielder => (0.5 * g, 0.6 * a, 8.0 / (d + 1.0)),
        // The -25 baseline belongs to the defensive component.
        Position::Defender | Position::Goalkeeper => (0.1 * g, 0.1 * a, 60.0 / (d + 1.0) - 25.0),
    };
    let points_score = 0.1 * p;
    let championship_score = 2.0 * c;

    let goals_score = round2(goals_score);
    let assist_score = round2(assist_score);
    let goals_against_score = round2(goals_against_score);
    let points_score = round2(points_score);
    let championship_score = round2(championship_score);

    PositionScore {
        name: aggregate.name.clone(),
        point: round2(
            goals_score + assist_score + goals_against_score + points_score + championship_score,
        ),
        goals_score,
        assist_score,
        goals_against_score,
        points_score,
        championship_score,
    }
}

/// Bucket eligible players into the four position leaderboards.
///
/// Eligibility is at least half the scope's weeks, rounded up. Each board is
/// independent and capped at 9 entries.
pub fn best_of_positions(aggregates: &[PlayerAggregate], total_weeks: usize) -> BestOfPositions {
    let mut boards = BestOfPositions::default();

    for aggregate in aggregates {
        if aggregate.weeks_played < half_weeks(total_weeks) {
            continue;
        }
        let score = score_player(aggregate);
        let board = match aggregate.position {
            Position::Attacker => &mut boards.attackers,
            Position::Midfielder => &mut boards.midfielders,
            Position::Defender => &mut boards.defenders,
            Position::Goalkeeper => &mut boards.goalkeepers,
        };
        board.push(score);
    }

    for board in [
        &mut boards.attackers,
        &mut boards.midfielders,
        &mut boards.defenders,
        &mut boards.goalkeepers,
    ] {
        board.sort_by(|a, b| b.point.partial_cmp(&a.point).unwrap_or(Ordering::Equal));
        board.truncate(AWARD_LIST_CAP);
    }

    boards
}
