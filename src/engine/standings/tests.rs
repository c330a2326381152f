//! Unit tests for standings and champion resolution

use super::*;
use crate::cli::types::MatchId;
use crate::engine::snapshot::{MatchRecord, MatchScore, TeamSnapshot};
use chrono::NaiveDate;

fn team(id: u64) -> TeamSnapshot {
    TeamSnapshot {
        id: TeamId::new(id),
        champion: false,
        points: 0,
        player_ids: vec![],
        matches_home: vec![],
        matches_away: vec![],
    }
}

fn match_record(id: u64, home: u64, away: u64, score: Option<(u32, u32)>) -> MatchRecord {
    MatchRecord {
        id: MatchId::new(id),
        home_team_id: TeamId::new(home),
        away_team_id: TeamId::new(away),
        result: score.map(|(h, a)| MatchScore {
            home_goals: h,
            away_goals: a,
        }),
        goals: vec![],
        assists: vec![],
    }
}

fn week(mut teams: Vec<TeamSnapshot>, matches: Vec<MatchRecord>) -> WeekSnapshot {
    for m in &matches {
        for t in teams.iter_mut() {
            if t.id == m.home_team_id {
                t.matches_home.push(m.clone());
            } else if t.id == m.away_team_id {
                t.matches_away.push(m.clone());
            }
        }
    }
    WeekSnapshot {
        id: WeekId::new(1),
        date: NaiveDate::from_ymd_opt(2025, 6, 7).unwrap(),
        teams,
    }
}

fn standing_for(standings: &[TeamStanding], id: u64) -> &TeamStanding {
    standings
        .iter()
        .find(|s| s.team_id == TeamId::new(id))
        .expect("standing present")
}

#[test]
fn test_points_sum_invariant_per_match() {
    let w = week(
        vec![team(1), team(2)],
        vec![
            match_record(1, 1, 2, Some((2, 0))),
            match_record(2, 1, 2, Some((1, 1))),
            match_record(3, 1, 2, None),
        ],
    );
    let standings = week_standings(&w);
    let a = standing_for(&standings, 1);
    let b = standing_for(&standings, 2);

    // Per played match the split is 3+0 or 1+1; the unplayed one adds 0+0.
    assert_eq!(a.points + b.points, 5);
    assert_eq!(a.matches, 2);
    assert_eq!(b.matches, 2);
}

#[test]
fn test_champion_by_points() {
    // Team A wins one 2-0 and draws one 1-1 (4 pts, +2); B loses and draws.
    let w = week(
        vec![team(1), team(2)],
        vec![
            match_record(1, 1, 2, Some((2, 0))),
            match_record(2, 1, 2, Some((1, 1))),
        ],
    );
    let resolution = resolve_week(&w);
    assert_eq!(resolution.champion, Some(TeamId::new(1)));

    let a = standing_for(&resolution.standings, 1);
    assert_eq!(a.points, 4);
    assert_eq!(a.goal_diff, 2);
}

#[test]
fn test_points_tie_resolved_by_goal_difference() {
    // Both win their only match; A 2-0 (+2) beats B 1-0 (+1).
    let w = week(
        vec![team(1), team(2), team(3), team(4)],
        vec![
            match_record(1, 1, 3, Some((2, 0))),
            match_record(2, 2, 4, Some((1, 0))),
        ],
    );
    assert_eq!(resolve_week(&w).champion, Some(TeamId::new(1)));
}

#[test]
fn test_fewest_matches_beats_goal_difference() {
    // A: 6 pts in 2 matches; B: 6 pts in 3 matches with a bigger diff.
    let w = week(
        vec![team(1), team(2), team(3)],
        vec![
            match_record(1, 1, 3, Some((1, 0))),
            match_record(2, 1, 3, Some((1, 0))),
            match_record(3, 2, 3, Some((4, 0))),
            match_record(4, 2, 3, Some((4, 0))),
            match_record(5, 2, 3, Some((0, 1))),
        ],
    );
    let standings = week_standings(&w);
    assert_eq!(standing_for(&standings, 1).points, 6);
    assert_eq!(standing_for(&standings, 2).points, 6);
    assert_eq!(resolve_champion(&standings), Some(TeamId::new(1)));
}

#[test]
fn test_goals_scored_breaks_equal_difference() {
    // Equal points, matches and difference; A scored more.
    let w = week(
        vec![team(1), team(2), team(3), team(4)],
        vec![
            match_record(1, 1, 3, Some((3, 1))),
            match_record(2, 2, 4, Some((2, 0))),
        ],
    );
    assert_eq!(resolve_week(&w).champion, Some(TeamId::new(1)));
}

#[test]
fn test_unbreakable_tie_yields_no_champion() {
    // Identical records all the way down the cascade.
    let w = week(
        vec![team(1), team(2), team(3), team(4)],
        vec![
            match_record(1, 1, 3, Some((1, 0))),
            match_record(2, 2, 4, Some((1, 0))),
        ],
    );
    assert_eq!(resolve_week(&w).champion, None);
}

#[test]
fn test_week_without_teams_has_no_champion() {
    let w = week(vec![], vec![]);
    let resolution = resolve_week(&w);
    assert_eq!(resolution.champion, None);
    assert!(resolution.standings.is_empty());
}

#[test]
fn test_unplayed_matches_leave_standings_zeroed() {
    let w = week(vec![team(1), team(2)], vec![match_record(1, 1, 2, None)]);
    let standings = week_standings(&w);
    assert_eq!(standing_for(&standings, 1).matches, 0);
    assert_eq!(standing_for(&standings, 2).points, 0);
}

#[test]
fn test_duplicate_references_count_each_match_once() {
    // `week` already attaches the match to both teams; standings must not
    // double it.
    let w = week(vec![team(1), team(2)], vec![match_record(1, 1, 2, Some((2, 1)))]);
    let standings = week_standings(&w);
    assert_eq!(standing_for(&standings, 1).matches, 1);
    assert_eq!(standing_for(&standings, 1).goals_for, 2);
    assert_eq!(standing_for(&standings, 2).goals_against, 2);
}
