//! Unit tests for the player aggregate fold

use super::*;
use crate::cli::types::MatchId;
use crate::engine::snapshot::{AssistEvent, GoalEvent, MatchRecord, MatchScore};
use chrono::NaiveDate;

fn info(id: u64, name: &str, position: Position) -> PlayerInfo {
    PlayerInfo {
        id: PlayerId::new(id),
        name: name.to_string(),
        position,
    }
}

fn players(ids: &[u64]) -> HashMap<PlayerId, PlayerInfo> {
    ids.iter()
        .map(|&id| {
            (
                PlayerId::new(id),
                info(id, &format!("Player {id}"), Position::Midfielder),
            )
        })
        .collect()
}

fn team(id: u64, roster: &[u64]) -> TeamSnapshot {
    TeamSnapshot {
        id: TeamId::new(id),
        champion: false,
        points: 0,
        player_ids: roster.iter().map(|&p| PlayerId::new(p)).collect(),
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

/// Attach each match to both of its teams, the way storage does.
fn week(id: u64, day: u32, mut teams: Vec<TeamSnapshot>, matches: Vec<MatchRecord>) -> WeekSnapshot {
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
        id: WeekId::new(id),
        date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
        teams,
    }
}

fn aggregate_for(aggregates: &[PlayerAggregate], id: u64) -> &PlayerAggregate {
    aggregates
        .iter()
        .find(|a| a.player_id == PlayerId::new(id))
        .expect("aggregate present")
}

#[test]
fn test_win_draw_loss_points_split() {
    let m1 = match_record(1, 1, 2, Some((2, 0)));
    let m2 = match_record(2, 1, 2, Some((1, 1)));
    let w = week(1, 7, vec![team(1, &[10]), team(2, &[20])], vec![m1, m2]);
    let aggs = build_aggregates(&[w], &players(&[10, 20]), &HashSet::new());

    let winner = aggregate_for(&aggs, 10);
    assert_eq!(winner.matches, 2);
    assert_eq!(winner.wins, 1);
    assert_eq!(winner.draws, 1);
    assert_eq!(winner.losses, 0);
    assert_eq!(winner.points, 4);
    assert_eq!(winner.goals_conceded, 1);

    let loser = aggregate_for(&aggs, 20);
    assert_eq!(loser.wins, 0);
    assert_eq!(loser.draws, 1);
    assert_eq!(loser.losses, 1);
    assert_eq!(loser.points, 1);
    assert_eq!(loser.goals_conceded, 3);
}

#[test]
fn test_goalless_draw_still_pays_one_point() {
    let m = match_record(1, 1, 2, Some((0, 0)));
    let w = week(1, 7, vec![team(1, &[10]), team(2, &[20])], vec![m]);
    let aggs = build_aggregates(&[w], &players(&[10, 20]), &HashSet::new());

    assert_eq!(aggregate_for(&aggs, 10).points, 1);
    assert_eq!(aggregate_for(&aggs, 20).points, 1);
}

#[test]
fn test_unplayed_match_contributes_nothing_to_records() {
    let mut m = match_record(1, 1, 2, None);
    m.goals = vec![GoalEvent {
        player_id: Some(PlayerId::new(10)),
        own_goal_player_id: None,
        goals: 1,
    }];
    let w = week(1, 7, vec![team(1, &[10]), team(2, &[20])], vec![m]);
    let aggs = build_aggregates(&[w], &players(&[10, 20]), &HashSet::new());

    let p = aggregate_for(&aggs, 10);
    // Recorded events of a resultless match still fold; the record does not.
    assert_eq!(p.goals, 1);
    assert_eq!(p.matches, 0);
    assert_eq!(p.points, 0);
    assert_eq!(p.goals_conceded, 0);
    assert_eq!(p.points_avg, 0.0);
    assert_eq!(p.goals_conceded_avg, 0.0);
}

#[test]
fn test_own_goal_never_credits_the_scorer() {
    let mut m = match_record(1, 1, 2, Some((1, 0)));
    m.goals = vec![GoalEvent {
        player_id: None,
        own_goal_player_id: Some(PlayerId::new(20)),
        goals: 1,
    }];
    let w = week(1, 7, vec![team(1, &[10]), team(2, &[20])], vec![m]);
    let aggs = build_aggregates(&[w], &players(&[10, 20]), &HashSet::new());

    let og = aggregate_for(&aggs, 20);
    assert_eq!(og.goals, 0);
    assert_eq!(og.own_goals, 1);
}

#[test]
fn test_batched_goal_and_assist_counts() {
    let mut m = match_record(1, 1, 2, Some((3, 0)));
    m.goals = vec![GoalEvent {
        player_id: Some(PlayerId::new(10)),
        own_goal_player_id: None,
        goals: 3,
    }];
    m.assists = vec![AssistEvent {
        player_id: PlayerId::new(11),
        assists: 2,
    }];
    let w = week(1, 7, vec![team(1, &[10, 11]), team(2, &[20])], vec![m]);
    let aggs = build_aggregates(&[w], &players(&[10, 11, 20]), &HashSet::new());

    assert_eq!(aggregate_for(&aggs, 10).goals, 3);
    assert_eq!(aggregate_for(&aggs, 11).assists, 2);
}

#[test]
fn test_event_only_participation_marks_the_week() {
    // Player 30 is on no roster but is named in an assist event.
    let mut m = match_record(1, 1, 2, Some((1, 0)));
    m.assists = vec![AssistEvent {
        player_id: PlayerId::new(30),
        assists: 1,
    }];
    let w = week(1, 7, vec![team(1, &[10]), team(2, &[20])], vec![m]);
    let aggs = build_aggregates(&[w], &players(&[10, 20, 30]), &HashSet::new());

    let p = aggregate_for(&aggs, 30);
    assert_eq!(p.weeks_played, 1);
    assert_eq!(p.matches, 0);
}

#[test]
fn test_duplicate_match_references_fold_once() {
    let mut m = match_record(1, 1, 2, Some((2, 0)));
    m.goals = vec![GoalEvent {
        player_id: Some(PlayerId::new(10)),
        own_goal_player_id: None,
        goals: 2,
    }];
    // `week` attaches the match to both rosters already.
    let w = week(1, 7, vec![team(1, &[10]), team(2, &[20])], vec![m]);
    let aggs = build_aggregates(&[w], &players(&[10, 20]), &HashSet::new());

    let p = aggregate_for(&aggs, 10);
    assert_eq!(p.matches, 1);
    assert_eq!(p.goals, 2);
    assert_eq!(p.points, 3);
}

#[test]
fn test_derived_averages() {
    let m1 = match_record(1, 1, 2, Some((2, 1)));
    let m2 = match_record(2, 3, 4, Some((0, 2)));
    let w1 = week(1, 7, vec![team(1, &[10]), team(2, &[20])], vec![m1]);
    let w2 = week(2, 14, vec![team(3, &[10]), team(4, &[20])], vec![m2]);

    let aggs = build_aggregates(&[w1, w2], &players(&[10, 20]), &HashSet::new());
    let p = aggregate_for(&aggs, 10);

    // One win, one loss over two weeks.
    assert_eq!(p.points, 3);
    assert_eq!(p.weeks_played, 2);
    assert_eq!(p.goals_conceded, 3);
    assert!((p.goals_conceded_avg - 1.5).abs() < 1e-9);
    assert!((p.points_avg - 1.5).abs() < 1e-9);
    assert!((p.points_pct - 50.0).abs() < 1e-9);
    assert!((p.points_per_week - 1.5).abs() < 1e-9);
    assert!((p.goals_conceded_per_week - 1.5).abs() < 1e-9);
}

#[test]
fn test_championship_credit_follows_the_flag() {
    let mut champion_team = team(1, &[10]);
    champion_team.champion = true;
    let w1 = week(1, 7, vec![champion_team, team(2, &[20])], vec![]);
    let mut champion_again = team(3, &[10]);
    champion_again.champion = true;
    let w2 = week(2, 14, vec![champion_again, team(4, &[20])], vec![]);

    let aggs = build_aggregates(&[w1, w2], &players(&[10, 20]), &HashSet::new());
    assert_eq!(aggregate_for(&aggs, 10).championships, 2);
    assert_eq!(aggregate_for(&aggs, 20).championships, 0);
}

#[test]
fn test_excluded_player_is_skipped_entirely() {
    let mut m = match_record(1, 1, 2, Some((2, 0)));
    m.goals = vec![GoalEvent {
        player_id: Some(PlayerId::new(10)),
        own_goal_player_id: None,
        goals: 2,
    }];
    let w = week(1, 7, vec![team(1, &[10, 11]), team(2, &[20])], vec![m]);
    let exclude: HashSet<PlayerId> = [PlayerId::new(10)].into_iter().collect();
    let aggs = build_aggregates(&[w], &players(&[10, 11, 20]), &exclude);

    assert!(aggs.iter().all(|a| a.player_id != PlayerId::new(10)));
    // Teammates keep their own records.
    assert_eq!(aggregate_for(&aggs, 11).wins, 1);
    assert_eq!(aggregate_for(&aggs, 20).losses, 1);
}

#[test]
fn test_unknown_identity_is_dropped() {
    let m = match_record(1, 1, 2, Some((1, 0)));
    let w = week(1, 7, vec![team(1, &[10]), team(2, &[99])], vec![m]);
    // 99 has no PlayerInfo registered.
    let aggs = build_aggregates(&[w], &players(&[10]), &HashSet::new());
    assert_eq!(aggs.len(), 1);
    assert_eq!(aggs[0].player_id, PlayerId::new(10));
}
