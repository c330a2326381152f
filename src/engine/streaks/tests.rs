//! Unit tests for streak reconstruction

use super::*;
use crate::cli::types::{MatchId, TeamId, WeekId};
use crate::engine::snapshot::{GoalEvent, MatchRecord, MatchScore, TeamSnapshot};
use chrono::NaiveDate;

/// Week on day `day` of 2025-06 whose champion roster and per-player goal
/// counts are given directly.
fn week(id: u64, day: u32, champion_roster: &[u64], scorers: &[(u64, u32)]) -> WeekSnapshot {
    let goals = scorers
        .iter()
        .map(|&(player, goals)| GoalEvent {
            player_id: Some(PlayerId::new(player)),
            own_goal_player_id: None,
            goals,
        })
        .collect();
    let m = MatchRecord {
        id: MatchId::new(id * 100),
        home_team_id: TeamId::new(id * 10 + 1),
        away_team_id: TeamId::new(id * 10 + 2),
        result: Some(MatchScore {
            home_goals: 1,
            away_goals: 0,
        }),
        goals,
        assists: vec![],
    };
    WeekSnapshot {
        id: WeekId::new(id),
        date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
        teams: vec![
            TeamSnapshot {
                id: TeamId::new(id * 10 + 1),
                champion: !champion_roster.is_empty(),
                points: 0,
                player_ids: champion_roster.iter().map(|&p| PlayerId::new(p)).collect(),
                matches_home: vec![m.clone()],
                matches_away: vec![],
            },
            TeamSnapshot {
                id: TeamId::new(id * 10 + 2),
                champion: false,
                points: 0,
                player_ids: vec![],
                matches_home: vec![],
                matches_away: vec![m],
            },
        ],
    }
}

fn streak_of(entries: &[StreakEntry], player: u64) -> Option<u32> {
    entries
        .iter()
        .find(|e| e.player_id == PlayerId::new(player))
        .map(|e| e.streak_count)
}

#[test]
fn test_streak_frozen_where_the_run_breaks() {
    // X is top scorer in the three most recent weeks, absent in the oldest.
    let weeks = vec![
        week(4, 28, &[], &[(7, 2)]), // W3, most recent
        week(3, 21, &[], &[(7, 1)]),
        week(2, 14, &[], &[(7, 3)]),
        week(1, 7, &[], &[(8, 1)]), // W0: someone else
    ];
    let streaks = reconstruct_streaks(&weeks);
    assert_eq!(streak_of(&streaks.week_striker, 7), Some(3));
}

#[test]
fn test_no_entry_without_the_most_recent_week() {
    // Highlighted only in older weeks: not a current streak.
    let weeks = vec![
        week(3, 21, &[], &[(9, 1)]),
        week(2, 14, &[], &[(7, 2)]),
        week(1, 7, &[], &[(7, 2)]),
    ];
    let streaks = reconstruct_streaks(&weeks);
    assert_eq!(streak_of(&streaks.week_striker, 7), None);
    assert_eq!(streak_of(&streaks.week_striker, 9), Some(1));
}

#[test]
fn test_frozen_count_survives_a_later_reappearance() {
    // Present in the newest week, missing in the middle one, present again
    // in the oldest: the gap freezes the streak at 1.
    let weeks = vec![
        week(3, 21, &[], &[(7, 1)]),
        week(2, 14, &[], &[(8, 1)]),
        week(1, 7, &[], &[(7, 1)]),
    ];
    let streaks = reconstruct_streaks(&weeks);
    assert_eq!(streak_of(&streaks.week_striker, 7), Some(1));
}

#[test]
fn test_unbroken_streak_runs_through_the_oldest_week() {
    let weeks = vec![
        week(2, 14, &[10, 11], &[]),
        week(1, 7, &[10, 11], &[]),
    ];
    let streaks = reconstruct_streaks(&weeks);
    assert_eq!(streak_of(&streaks.week_champion, 10), Some(2));
    assert_eq!(streak_of(&streaks.week_champion, 11), Some(2));
}

#[test]
fn test_categories_are_independent() {
    let weeks = vec![
        week(2, 14, &[10], &[(20, 2)]),
        week(1, 7, &[10], &[(21, 2)]),
    ];
    let streaks = reconstruct_streaks(&weeks);
    assert_eq!(streak_of(&streaks.week_champion, 10), Some(2));
    assert_eq!(streak_of(&streaks.week_striker, 20), Some(1));
    assert_eq!(streak_of(&streaks.week_striker, 21), None);
    assert!(streaks.week_top_assist.is_empty());
}

#[test]
fn test_input_order_does_not_matter() {
    let mut weeks = vec![
        week(3, 21, &[], &[(7, 1)]),
        week(2, 14, &[], &[(7, 1)]),
        week(1, 7, &[], &[(8, 1)]),
    ];
    let from_desc = reconstruct_streaks(&weeks);
    weeks.reverse();
    let from_asc = reconstruct_streaks(&weeks);
    assert_eq!(from_desc, from_asc);
    assert_eq!(streak_of(&from_desc.week_striker, 7), Some(2));
}

#[test]
fn test_empty_week_list_yields_empty_streaks() {
    let streaks = reconstruct_streaks(&[]);
    assert!(streaks.week_champion.is_empty());
    assert!(streaks.week_striker.is_empty());
    assert!(streaks.week_top_assist.is_empty());
}

#[test]
fn test_entries_sorted_by_count_then_player_id() {
    let weeks = vec![
        week(2, 14, &[], &[(5, 2), (6, 2)]),
        week(1, 7, &[], &[(6, 3)]),
    ];
    let streaks = reconstruct_streaks(&weeks);
    // 6 continues to 2; 5 freezes at 1.
    let pairs: Vec<(u64, u32)> = streaks
        .week_striker
        .iter()
        .map(|e| (e.player_id.as_u64(), e.streak_count))
        .collect();
    assert_eq!(pairs, vec![(6, 2), (5, 1)]);
}
