//! Player aggregate statistics.
//!
//! Folds a scope's deduplicated matches into one aggregate record per
//! player. Aggregates are rebuilt fully on every computation and never
//! partially updated.

use crate::cli::types::{PlayerId, Position, TeamId, WeekId};
use crate::engine::dedup::unique_matches;
use crate::engine::snapshot::{PlayerInfo, TeamSnapshot, WeekSnapshot};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Aggregate statistics for one player over a computation scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAggregate {
    pub player_id: PlayerId,
    pub name: String,
    pub position: Position,

    /// Matches with a recorded result the player was rostered for.
    pub matches: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    /// League points: 3 per win, 1 per draw.
    pub points: u32,
    pub goals: u32,
    pub own_goals: u32,
    pub assists: u32,
    pub goals_conceded: u32,
    /// Distinct weeks the player appeared in, by roster membership or by
    /// being named in a goal/own-goal/assist event.
    pub weeks_played: u32,
    /// Weeks in scope where the player's team was flagged champion.
    pub championships: u32,

    /// Goals conceded per played match; 0 when no matches.
    pub goals_conceded_avg: f64,
    /// Points per played match; 0 when no matches.
    pub points_avg: f64,
    /// Points as a percentage of the maximum available (3 per match), 0-100.
    pub points_pct: f64,
    pub goals_per_week: f64,
    pub assists_per_week: f64,
    pub points_per_week: f64,
    pub goals_conceded_per_week: f64,
}

#[derive(Debug, Default)]
struct Accumulator {
    matches: u32,
    wins: u32,
    draws: u32,
    losses: u32,
    points: u32,
    goals: u32,
    own_goals: u32,
    assists: u32,
    goals_conceded: u32,
    weeks: HashSet<WeekId>,
    championships: u32,
}

impl Accumulator {
    fn into_aggregate(self, info: &PlayerInfo) -> PlayerAggregate {
        let matches = f64::from(self.matches);
        let weeks = self.weeks.len() as f64;
        PlayerAggregate {
            player_id: info.id,
            name: info.name.clone(),
            position: info.position,
            matches: self.matches,
            wins: self.wins,
            draws: self.draws,
            losses: self.losses,
            points: self.points,
            goals: self.goals,
            own_goals: self.own_goals,
            assists: self.assists,
            goals_conceded: self.goals_conceded,
            weeks_played: self.weeks.len() as u32,
            championships: self.championships,
            goals_conceded_avg: ratio(f64::from(self.goals_conceded), matches),
            points_avg: ratio(f64::from(self.points), matches),
            points_pct: ratio(f64::from(self.points), matches * 3.0) * 100.0,
            goals_per_week: ratio(f64::from(self.goals), weeks),
            assists_per_week: ratio(f64::from(self.assists), weeks),
            points_per_week: ratio(f64::from(self.points), weeks),
            goals_conceded_per_week: ratio(f64::from(self.goals_conceded), weeks),
        }
    }
}

/// Division that degrades to 0 instead of NaN/inf on an empty denominator.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Fold every deduplicated match of `weeks` into per-player aggregates.
///
/// `players` resolves identities; ids with no known identity are dropped
/// from the output. `exclude` removes players from the computation
/// entirely, as if they did not exist (used to recompute a finalized
/// month's awards without a given player).
pub fn build_aggregates(
    weeks: &[WeekSnapshot],
    players: &HashMap<PlayerId, PlayerInfo>,
    exclude: &HashSet<PlayerId>,
) -> Vec<PlayerAggregate> {
    let mut accums: HashMap<PlayerId, Accumulator> = HashMap::new();

    for week in weeks {
        fold_week(week, exclude, &mut accums);
    }

    let mut aggregates: Vec<PlayerAggregate> = accums
        .into_iter()
        .filter_map(|(id, acc)| players.get(&id).map(|info| acc.into_aggregate(info)))
        .collect();
    aggregates.sort_by_key(|a| a.player_id);
    aggregates
}

fn fold_week(
    week: &WeekSnapshot,
    exclude: &HashSet<PlayerId>,
    accums: &mut HashMap<PlayerId, Accumulator>,
) {
    let rosters: HashMap<TeamId, &TeamSnapshot> = week.teams.iter().map(|t| (t.id, t)).collect();

    // Roster membership marks week participation and championship credit,
    // whether or not the team's matches have results yet.
    for team in &week.teams {
        for &player_id in &team.player_ids {
            if exclude.contains(&player_id) {
                continue;
            }
            let acc = accums.entry(player_id).or_default();
            acc.weeks.insert(week.id);
            if team.champion {
                acc.championships += 1;
            }
        }
    }

    for m in unique_matches(week) {
        let home_roster = rosters
            .get(&m.home_team_id)
            .map_or(&[] as &[PlayerId], |t| t.player_ids.as_slice());
        let away_roster = rosters
            .get(&m.away_team_id)
            .map_or(&[] as &[PlayerId], |t| t.player_ids.as_slice());

        // A match with no result contributes to no one's record; its events
        // (if any were recorded) still fold below.
        if let Some(score) = &m.result {
            let (home_points, away_points) = match score.home_goals.cmp(&score.away_goals) {
                std::cmp::Ordering::Greater => (3, 0),
                std::cmp::Ordering::Less => (0, 3),
                std::cmp::Ordering::Equal => (1, 1),
            };

            for &player_id in home_roster {
                if exclude.contains(&player_id) {
                    continue;
                }
                let acc = accums.entry(player_id).or_default();
                acc.matches += 1;
                acc.points += home_points;
                acc.goals_conceded += score.away_goals;
                match home_points {
                    3 => acc.wins += 1,
                    1 => acc.draws += 1,
                    _ => acc.losses += 1,
                }
            }
            for &player_id in away_roster {
                if exclude.contains(&player_id) {
                    continue;
                }
                let acc = accums.entry(player_id).or_default();
                acc.matches += 1;
                acc.points += away_points;
                acc.goals_conceded += score.home_goals;
                match away_points {
                    3 => acc.wins += 1,
                    1 => acc.draws += 1,
                    _ => acc.losses += 1,
                }
            }
        }

        for g in &m.goals {
            if let Some(player_id) = g.player_id {
                if !exclude.contains(&player_id) {
                    let acc = accums.entry(player_id).or_default();
                    acc.goals += g.goals;
                    acc.weeks.insert(week.id);
                }
            }
            // Own goals never credit the scorer and are excluded from every
            // top-scorer computation.
            if let Some(player_id) = g.own_goal_player_id {
                if !exclude.contains(&player_id) {
                    let acc = accums.entry(player_id).or_default();
                    acc.own_goals += g.goals;
                    acc.weeks.insert(week.id);
                }
            }
        }

        for a in &m.assists {
            if !exclude.contains(&a.player_id) {
                let acc = accums.entry(a.player_id).or_default();
                acc.assists += a.assists;
                acc.weeks.insert(week.id);
            }
        }
    }
}

#[cfg(test)]
mod tests;
